//! Property tests for the directive policies.

use std::borrow::Cow;

use logtags::{
    DisplayDirective, FieldDescriptor, FieldView, Message, TRIM_MARKER, Value, ValueKind,
    extract_tags,
};
use proptest::prelude::*;

struct One {
    descriptor: FieldDescriptor,
    value: Value<'static>,
}

impl Message for One {
    fn fields(&self) -> Vec<FieldView<'_>> {
        vec![FieldView::new(self.descriptor.clone(), self.value.clone())]
    }
}

fn string_field(directive: DisplayDirective, text: String) -> One {
    One {
        descriptor: FieldDescriptor::new("s", ValueKind::String).with_directive(directive),
        value: Value::String(Cow::Owned(text)),
    }
}

fn list_field(directive: DisplayDirective, items: &[String]) -> One {
    One {
        descriptor: FieldDescriptor::list("l", ValueKind::String).with_directive(directive),
        value: Value::List(
            items
                .iter()
                .map(|item| Value::String(Cow::Owned(item.clone())))
                .collect(),
        ),
    }
}

fn indices(message: &One) -> Vec<usize> {
    extract_tags(message)
        .map(|tags| {
            let mut indices: Vec<usize> = tags
                .keys()
                .filter_map(|key| key.strip_prefix("l.[")?.strip_suffix(']')?.parse().ok())
                .collect();
            indices.sort_unstable();
            indices
        })
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn hide_never_produces_tags(text in ".*") {
        prop_assert!(extract_tags(&string_field(DisplayDirective::Hide, text)).is_none());
    }

    #[test]
    fn obfuscate_never_reveals_the_value(text in "[a-z]{7,20}", mask in "[*#]{0,8}") {
        let message = string_field(DisplayDirective::obfuscate_with(mask.clone()), text.clone());
        let tags = extract_tags(&message).unwrap();
        prop_assert_eq!(tags.len(), 1);
        let rendered = tags.get("s").unwrap();
        prop_assert!(rendered.starts_with("(string) "));
        prop_assert!(!rendered.contains(&text));
    }

    #[test]
    fn trim_head_keeps_the_requested_suffix(text in "\\PC{0,40}", tail in 1_usize..20) {
        let total = text.chars().count();
        let tags = extract_tags(&string_field(
            DisplayDirective::TrimHead { tail_chars: tail },
            text.clone(),
        ))
        .unwrap();
        let rendered = tags.get("s").unwrap();
        if tail >= total {
            prop_assert_eq!(rendered, text.as_str());
        } else {
            let suffix: String = text.chars().skip(total - tail).collect();
            prop_assert_eq!(rendered.to_owned(), format!("{TRIM_MARKER}{suffix}"));
        }
    }

    #[test]
    fn trim_middle_output_is_bounded(text in "\\PC{0,60}", head in 1_usize..10, tail in 1_usize..10) {
        let tags = extract_tags(&string_field(
            DisplayDirective::TrimMiddle { head_chars: head, tail_chars: tail },
            text.clone(),
        ))
        .unwrap();
        let rendered = tags.get("s").unwrap();
        let limit = head + tail + TRIM_MARKER.chars().count();
        prop_assert!(rendered.chars().count() <= limit);
    }

    #[test]
    fn show_fans_out_every_element(items in prop::collection::vec("[a-z]{1,4}", 0..12)) {
        let message = list_field(DisplayDirective::Show, &items);
        prop_assert_eq!(indices(&message), (0..items.len()).collect::<Vec<_>>());
    }

    #[test]
    fn list_trims_keep_original_indices(
        items in prop::collection::vec("[a-z]{1,4}", 1..16),
        head in 0_usize..8,
        tail in 0_usize..8,
    ) {
        let len = items.len();

        let kept = indices(&list_field(DisplayDirective::TrimHead { tail_chars: tail }, &items));
        let expected: Vec<usize> = if tail == 0 { Vec::new() } else { (len.saturating_sub(tail)..len).collect() };
        prop_assert_eq!(kept, expected);

        let kept = indices(&list_field(DisplayDirective::TrimTail { head_chars: head }, &items));
        let expected: Vec<usize> = if head == 0 { Vec::new() } else { (0..head.min(len)).collect() };
        prop_assert_eq!(kept, expected);

        let kept = indices(&list_field(
            DisplayDirective::TrimMiddle { head_chars: head, tail_chars: tail },
            &items,
        ));
        let expected: Vec<usize> = if head == 0 && tail == 0 {
            Vec::new()
        } else if head + tail >= len {
            (0..len).collect()
        } else {
            (0..head).chain(len - tail..len).collect()
        };
        prop_assert_eq!(kept, expected);
    }
}
