use logtags::Message;

#[derive(Message)]
struct Coordinates(f64, f64, #[tags(hide)] String);

#[derive(Message)]
struct Unit;

fn main() {
    let tags = logtags::extract_tags(&Coordinates(38.7, -9.1, "home".into())).unwrap();
    assert_eq!(tags.len(), 2);
    assert!(logtags::extract_tags(&Unit).is_none());
}
