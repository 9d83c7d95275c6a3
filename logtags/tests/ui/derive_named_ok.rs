use logtags::{Message, MessageTagsExt};

#[derive(Message)]
struct Login {
    user: String,
    #[tags(hide)]
    password: String,
    #[tags(obfuscate = "[otp]")]
    otp: u32,
    #[tags(trim_middle(head = 2, tail = 2), rename = "device")]
    device_id: String,
    #[tags(skip)]
    cache: std::cell::Cell<u8>,
    r#type: &'static str,
}

fn main() {
    let login = Login {
        user: "ada".into(),
        password: "pw".into(),
        otp: 123_456,
        device_id: "dev-000-111".into(),
        cache: std::cell::Cell::new(0),
        r#type: "web",
    };

    let tags = login.tags().unwrap();
    assert_eq!(tags.get("type"), Some("web"));
    assert_eq!(tags.get("device"), Some("de<...>11"));
    let _ = login.cache.get();
}
