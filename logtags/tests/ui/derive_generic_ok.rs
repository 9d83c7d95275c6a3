use std::{collections::BTreeMap, marker::PhantomData};

use logtags::Message;

#[derive(Message)]
struct Page<T, K: Ord> {
    items: Vec<T>,
    #[tags(trim_tail = 1)]
    cursors: Vec<String>,
    index: BTreeMap<K, T>,
    _kind: PhantomData<K>,
}

struct NotLoggable;

#[derive(Message)]
struct Typed<M> {
    id: u64,
    _marker: PhantomData<M>,
}

fn main() {
    let page = Page {
        items: vec![1_u32, 2],
        cursors: vec!["a".into(), "b".into()],
        index: BTreeMap::from([("k".to_owned(), 3_u32)]),
        _kind: PhantomData::<String>,
    };
    assert_eq!(logtags::extract_tags(&page).unwrap().len(), 4);

    let typed: Typed<NotLoggable> = Typed {
        id: 1,
        _marker: PhantomData,
    };
    assert!(logtags::extract_tags(&typed).is_some());
}
