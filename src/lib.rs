//! Priority-ordered validator chains with accumulating, lazily interpolated
//! validation results.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `validator_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Result with Interpolated Messages
//!
//! ```
//! use validator_rail::ValidationResult;
//!
//! let result = ValidationResult::new("ab")
//!     .with_message("Length must be %min%")
//!     .with_variable("min", 4);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.raw_messages(), ["Length must be %min%"]);
//! assert_eq!(result.to_string(), "Length must be 4");
//! ```
//!
//! ## Templated Validator in a Chain
//!
//! ```
//! use validator_rail::prelude::*;
//!
//! struct MinLength {
//!     min: usize,
//!     templates: MessageTemplates,
//! }
//!
//! impl MinLength {
//!     fn new(min: usize) -> Self {
//!         let templates = MessageTemplates::new()
//!             .with_template("tooShort", "The input is less than %min% characters long")
//!             .with_variable("min");
//!         Self { min, templates }
//!     }
//! }
//!
//! impl VariableSource for MinLength {
//!     fn variable(&self, name: &str) -> Option<MessageValue> {
//!         match name {
//!             "min" => Some(self.min.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl TemplatedValidator for MinLength {
//!     fn message_templates(&self) -> &MessageTemplates {
//!         &self.templates
//!     }
//! }
//!
//! impl Validator<String> for MinLength {
//!     fn validate(&self, data: &String, context: Option<&()>) -> ValidationOutcome<String> {
//!         let keys: &[&str] = if data.chars().count() < self.min { &["tooShort"] } else { &[] };
//!         self.build_result(data, context, keys)
//!     }
//! }
//!
//! let mut chain: ValidatorChain<String> = ValidatorChain::new();
//! chain.add_validator(MinLength::new(4));
//!
//! let result = chain.validate(&"abc".to_string(), None).unwrap();
//! assert_eq!(result.to_string(), "The input is less than 4 characters long");
//! ```

#[macro_use]
mod macros;

/// Convenience re-exports for quick starts
pub mod prelude;
/// ValidationResult, message values, formatting and configuration errors
pub mod types;
/// Validator capability, chains and message templates
pub mod validation;

pub use types::{
    ConfigurationError, MessageFormat, MessageValue, MessageVariables, MessageVec, Messages,
    ResultRecord, ValidationOutcome, ValidationResult,
};
pub use validation::{
    validator_fn, FnValidator, MessageTemplates, Selector, SharedValidator, TemplateOptions,
    TemplatedValidator, Validator, ValidatorChain, VariableSource, DEFAULT_PRIORITY,
};
