//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validator_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`ValidationResult`], [`ValidatorChain`], [`MessageTemplates`], [`MessageValue`]
//! - **Traits**: [`Validator`], [`TemplatedValidator`], [`VariableSource`]
//! - **Errors**: [`ConfigurationError`], [`ValidationOutcome`]

pub use crate::types::{ConfigurationError, MessageValue, ValidationOutcome, ValidationResult};
pub use crate::validation::{
    validator_fn, MessageTemplates, TemplatedValidator, Validator, ValidatorChain,
    VariableSource, DEFAULT_PRIORITY,
};
