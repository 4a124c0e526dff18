use validator_rail::{
    MessageFormat, MessageValue, MessageVariables, ResultRecord, ValidationResult,
};
use std::borrow::Cow;

#[test]
fn result_without_error_is_valid_and_empty() {
    let result = ValidationResult::new("data");

    assert_eq!(*result.data(), "data");
    assert!(result.context().is_none());
    assert!(result.messages().is_empty());
    assert!(result.raw_messages().is_empty());
    assert!(result.messages_variables().is_empty());
    assert!(result.is_valid());
}

#[test]
fn single_message_is_wrapped_into_one_element_sequence() {
    let result = ValidationResult::new("data").with_message("An error message");

    assert_eq!(result.raw_messages().len(), 1);
    assert_eq!(result.messages().len(), 1);
    assert!(!result.is_valid());
}

#[test]
fn messages_without_variables_are_borrowed_raw_messages() {
    let result = ValidationResult::new("data").with_message("An error message");

    let messages = result.messages();
    assert!(matches!(messages, Cow::Borrowed(_)));
    assert_eq!(messages.to_vec(), vec!["An error message"]);
    assert_eq!(result.raw_messages(), ["An error message"]);
}

#[test]
fn interpolates_single_variable_and_keeps_raw() {
    let result = ValidationResult::new("data")
        .with_message("Length must be %min%")
        .with_variable("min", 4);

    assert_eq!(result.messages_variables().get("min"), Some(&MessageValue::Int(4)));
    assert_eq!(result.messages().to_vec(), vec!["Length must be 4"]);
    assert_eq!(result.raw_messages(), ["Length must be %min%"]);
}

#[test]
fn interpolates_several_messages_and_variables() {
    let result = ValidationResult::new("data")
        .with_messages(["Length must be %min%", "Does not validate %pattern%"])
        .with_variable("min", 4)
        .with_variable("pattern", "abc");

    assert_eq!(result.messages_variables().len(), 2);
    assert_eq!(
        result.messages().to_vec(),
        vec!["Length must be 4", "Does not validate abc"]
    );
    assert_eq!(
        result.raw_messages(),
        ["Length must be %min%", "Does not validate %pattern%"]
    );
}

#[test]
fn unknown_placeholders_pass_through() {
    let result = ValidationResult::new(1)
        .with_message("Between %min% and %max%")
        .with_variable("min", 1);

    assert_eq!(result.messages().to_vec(), vec!["Between 1 and %max%"]);
}

#[test]
fn every_occurrence_is_replaced() {
    let result = ValidationResult::new(1)
        .with_message("%min%..%min%")
        .with_variable("min", 2);

    assert_eq!(result.messages().to_vec(), vec!["2..2"]);
}

#[test]
fn substituted_values_are_not_rescanned() {
    let result = ValidationResult::new(1)
        .with_message("%a% %b%")
        .with_variable("a", "%b%")
        .with_variable("b", "x");

    assert_eq!(result.messages().to_vec(), vec!["%b% x"]);
}

#[test]
fn interpolation_is_repeatable() {
    let result = ValidationResult::new(1)
        .with_message("Length must be %min%")
        .with_variable("min", 4);

    assert_eq!(result.messages(), result.messages());
    assert_eq!(result.to_string(), result.to_string());
}

#[test]
fn merge_appends_messages_and_variables() {
    let mut first = ValidationResult::new("data")
        .with_message("First error")
        .with_variable("key1", "var1");
    let second = ValidationResult::new("data")
        .with_message("Second error")
        .with_variable("key2", "var2");

    first.merge(&second);

    assert_eq!(*first.data(), "data");
    assert_eq!(first.raw_messages(), ["First error", "Second error"]);
    assert_eq!(first.messages_variables().len(), 2);
    assert!(!first.is_valid());

    // other is untouched
    assert_eq!(second.raw_messages(), ["Second error"]);
    assert_eq!(second.messages_variables().len(), 1);
}

#[test]
fn merge_last_value_wins_on_collision() {
    let mut first = ValidationResult::new(0).with_message("min %min%").with_variable("min", 1);
    let second = ValidationResult::new(0).with_message("min %min%").with_variable("min", 2);

    first.merge(&second);

    assert_eq!(first.messages_variables().get("min"), Some(&MessageValue::Int(2)));
    assert_eq!(first.messages().to_vec(), vec!["min 2", "min 2"]);
}

#[test]
fn merge_keeps_receiver_data_and_context() {
    let mut receiver: ValidationResult<&str, &str> =
        ValidationResult::new_with_context("mine", Some("ctx"));
    let other: ValidationResult<i32, ()> = ValidationResult::new(7).with_message("boom");

    receiver.merge(&other);

    assert_eq!(*receiver.data(), "mine");
    assert_eq!(receiver.context(), Some(&"ctx"));
    assert_eq!(receiver.raw_messages(), ["boom"]);
}

#[test]
fn merging_valid_result_keeps_receiver_valid() {
    let mut receiver = ValidationResult::new(1);
    receiver.merge(&ValidationResult::new(2));
    assert!(receiver.is_valid());
}

#[test]
fn display_joins_interpolated_messages() {
    let result = ValidationResult::new("x")
        .with_messages(["Too short, min %min%", "Invalid"])
        .with_variable("min", 3);

    assert_eq!(result.to_string(), "Too short, min 3, Invalid");
    assert_eq!(ValidationResult::new("x").to_string(), "");
}

#[test]
fn render_uses_format_separator_and_delimiters() {
    let result = ValidationResult::new("x")
        .with_messages(["at least {min}", "at most {max}"])
        .with_variable("min", 1)
        .with_variable("max", 9);

    let format = MessageFormat { separator: "\n".into(), ..MessageFormat::braces() };
    assert_eq!(result.render(&format), "at least 1\nat most 9");
    assert_eq!(result.render(&MessageFormat::lines()), "at least {min}\nat most {max}");
}

#[test]
fn record_round_trip_preserves_all_fields() {
    let mut vars = MessageVariables::new();
    vars.insert("min".into(), MessageValue::from(4));
    let original: ValidationResult<String, u8> =
        ValidationResult::from_parts("data".to_string(), Some(3), ["Length must be %min%"], vars);

    let record: ResultRecord<String, u8> = original.clone().into_record();
    assert_eq!(record.data, "data");
    assert_eq!(record.context, Some(3));
    assert_eq!(record.raw_messages, vec!["Length must be %min%"]);
    assert_eq!(record.messages_variables.get("min"), Some(&MessageValue::Int(4)));

    let restored = ValidationResult::from(record);
    assert_eq!(restored, original);
    assert_eq!(restored.messages(), original.messages());
}

#[test]
fn into_data_returns_subject() {
    let result = ValidationResult::new(vec![1, 2, 3]).with_message("bad");
    assert_eq!(result.into_data(), vec![1, 2, 3]);
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::{Deserialize, Serialize};
    use validator_rail::{MessageValue, ValidationResult};

    #[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
    struct Form {
        email: String,
    }

    #[test]
    fn serializes_as_four_field_record() {
        let result = ValidationResult::new("data")
            .with_message("Length must be %min%")
            .with_variable("min", 4);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": "data",
                "context": null,
                "raw_messages": ["Length must be %min%"],
                "messages_variables": { "min": 4 }
            })
        );
    }

    #[test]
    fn serde_round_trip_preserves_everything() {
        let result: ValidationResult<Form, Vec<String>> = ValidationResult::new_with_context(
            Form { email: "nope".into() },
            Some(vec!["sibling".into()]),
        )
        .with_message("Length must be %min%")
        .with_variable("min", 4)
        .with_variable("allowed", vec!["a", "b"]);

        let serialized = serde_json::to_string(&result).unwrap();
        let restored: ValidationResult<Form, Vec<String>> =
            serde_json::from_str(&serialized).unwrap();

        assert!(!restored.is_valid());
        assert_eq!(restored.data(), result.data());
        assert_eq!(restored.context(), result.context());
        assert_eq!(restored.raw_messages(), ["Length must be %min%"]);
        assert_eq!(restored.messages_variables(), result.messages_variables());
        assert_eq!(restored.messages().to_vec(), vec!["Length must be 4"]);
        assert_eq!(
            restored.messages_variables().get("allowed"),
            Some(&MessageValue::List(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn interpolated_view_serializes_as_message_list() {
        let result = ValidationResult::new("data")
            .with_message("Length must be %min%")
            .with_variable("min", 4);

        let json = serde_json::to_string(&result.interpolated()).unwrap();
        assert_eq!(json, r#"["Length must be 4"]"#);
    }
}
