//! JSON conversion of extracted tags.

use serde_json::{Map, Value as JsonValue};

use crate::{CallFields, Tags};

impl Tags {
    /// Converts the tags into a JSON object of string values.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let object: Map<String, JsonValue> = self
            .iter()
            .map(|(key, value)| (key.to_owned(), JsonValue::String(value.to_owned())))
            .collect();
        JsonValue::Object(object)
    }
}

impl CallFields {
    /// Converts the flattened call fields into a JSON object.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        self.clone().into_tags().to_json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tags_become_a_flat_object() {
        let tags: Tags = [("user.id", "7"), ("items.[0]", "a")].into_iter().collect();
        assert_eq!(tags.to_json(), json!({"items.[0]": "a", "user.id": "7"}));
    }

    #[test]
    fn serde_round_trips_as_a_plain_map() {
        let tags: Tags = [("a", "1")].into_iter().collect();
        let text = serde_json::to_string(&tags).unwrap();
        assert_eq!(text, r#"{"a":"1"}"#);
        let back: Tags = serde_json::from_str(&text).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn call_fields_serialize_flattened() {
        let fields = CallFields::new().server("svc:1").method("/svc/M");
        assert_eq!(
            fields.to_json(),
            json!({"method": "/svc/M", "server": "svc:1"})
        );
    }
}
