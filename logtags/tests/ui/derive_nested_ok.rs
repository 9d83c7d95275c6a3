use std::{rc::Rc, sync::Arc};

use logtags::{Message, Timestamp};

#[derive(Message)]
struct Money {
    cents: i64,
    currency: String,
}

#[derive(Message)]
struct Invoice {
    total: Money,
    lines: Vec<Money>,
    discount: Option<Box<Money>>,
    shared: Arc<Money>,
    local: Rc<str>,
    issued_at: Timestamp,
    attachment: Box<dyn Message>,
}

fn main() {
    let invoice = Invoice {
        total: Money {
            cents: 100,
            currency: "EUR".into(),
        },
        lines: Vec::new(),
        discount: None,
        shared: Arc::new(Money {
            cents: 1,
            currency: "EUR".into(),
        }),
        local: Rc::from("x"),
        issued_at: Timestamp::new(0, 0),
        attachment: Box::new(Money {
            cents: 2,
            currency: "USD".into(),
        }),
    };

    let tags = logtags::extract_tags(&invoice).unwrap();
    assert_eq!(tags.get("total.cents"), Some("100"));
    assert_eq!(tags.get("shared.currency"), Some("EUR"));
    assert_eq!(tags.get("attachment.currency"), Some("USD"));
    assert_eq!(tags.get("issued_at"), Some("1970-01-01T00:00:00Z"));
}
