//! Validator chain quick start
//!
//! Builds a small signup-form chain out of a templated validator and two
//! closure validators, then prints the merged messages for a few inputs.
//!
//! Run with: cargo run --example chain_quick_start

use std::sync::Arc;

use validator_rail::prelude::*;
use validator_rail::MessageFormat;

// =============================================================================
// A templated validator
// =============================================================================

struct StringLength {
    min: usize,
    max: usize,
    templates: MessageTemplates,
}

impl StringLength {
    fn new(min: usize, max: usize) -> Self {
        let templates = MessageTemplates::new()
            .with_template("tooShort", "The input is less than %min% characters long")
            .with_template("tooLong", "The input is more than %max% characters long")
            .with_variable("min")
            .with_variable("max");
        Self { min, max, templates }
    }
}

impl VariableSource for StringLength {
    fn variable(&self, name: &str) -> Option<MessageValue> {
        match name {
            "min" => Some(self.min.into()),
            "max" => Some(self.max.into()),
            _ => None,
        }
    }
}

impl TemplatedValidator for StringLength {
    fn message_templates(&self) -> &MessageTemplates {
        &self.templates
    }
}

impl Validator<String> for StringLength {
    fn validate(&self, data: &String, context: Option<&()>) -> ValidationOutcome<String> {
        let length = data.chars().count();
        let mut keys = Vec::new();
        if length < self.min {
            keys.push("tooShort");
        }
        if length > self.max {
            keys.push("tooLong");
        }
        self.build_result(data, context, keys)
    }
}

// =============================================================================
// Closure validators
// =============================================================================

fn not_empty() -> impl Validator<String> {
    validator_fn("not_empty", |s: &String, _: Option<&()>| -> ValidationOutcome<String> {
        let result = ValidationResult::new(s.clone());
        Ok(if s.is_empty() { result.with_message("Value is required") } else { result })
    })
}

fn one_of(allowed: &'static [&'static str]) -> impl Validator<String> {
    validator_fn("one_of", move |s: &String, _: Option<&()>| -> ValidationOutcome<String> {
        let result = ValidationResult::new(s.clone());
        Ok(if allowed.contains(&s.as_str()) {
            result
        } else {
            result
                .with_message("The input was not found in %haystack%")
                .with_variable("haystack", allowed.to_vec())
        })
    })
}

fn main() {
    println!("=== Validator chain quick start ===\n");

    let length = Arc::new(StringLength::new(3, 8));

    let mut chain: ValidatorChain<String> = ValidatorChain::new();
    chain.add_validator_with_priority(not_empty(), 10);
    chain.add_shared(Arc::clone(&length), DEFAULT_PRIORITY);
    chain.add_validator_with_priority(one_of(&["alice", "bob", "carol"]), 0);

    println!("Registered: {chain:?}\n");

    for input in ["", "bob", "mallory-the-intruder"] {
        match chain.validate(&input.to_string(), None) {
            Ok(result) if result.is_valid() => println!("{input:?}: ok"),
            Ok(result) => {
                println!("{input:?}: {}", result);
                println!("  raw: {:?}", result.raw_messages());
            },
            Err(err) => println!("{input:?}: configuration error: {err}"),
        }
    }

    println!("\n=== Removing the length check ===\n");
    chain.remove_validator(&length);
    let result = chain.validate(&"mallory-the-intruder".to_string(), None);
    if let Ok(result) = result {
        println!("{}", result.render(&MessageFormat::lines()));
    }
}
