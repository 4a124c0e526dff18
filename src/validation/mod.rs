//! Validators and their composition.
//!
//! This module provides the [`Validator`] capability, the
//! [`ValidatorChain`] that runs many validators as one, and the building
//! blocks for template-driven validators ([`MessageTemplates`],
//! [`VariableSource`], [`TemplatedValidator`]).
//!
//! # Key Components
//!
//! - [`Validator`] - Produces one [`ValidationResult`](crate::ValidationResult) per call
//! - [`ValidatorChain`] - Priority-ordered composite that accumulates every failure
//! - [`MessageTemplates`] - Error key to template mapping owned by a validator
//! - [`FnValidator`] - Closure adapter
//!
//! # Examples
//!
//! ```
//! use validator_rail::{validator_fn, ValidationOutcome, ValidationResult, Validator, ValidatorChain};
//!
//! let chain: ValidatorChain<String> = ValidatorChain::new()
//!     .with_validator(
//!         validator_fn("required", |s: &String, _: Option<&()>| -> ValidationOutcome<String> {
//!             let result = ValidationResult::new(s.clone());
//!             Ok(if s.is_empty() { result.with_message("Value is required") } else { result })
//!         }),
//!         10,
//!     );
//!
//! assert!(!chain.validate(&String::new(), None).unwrap().is_valid());
//! ```
pub mod chain;
pub mod fn_validator;
pub mod templates;
pub mod traits;

pub use self::chain::*;
pub use self::fn_validator::*;
pub use self::templates::*;
pub use self::traits::*;
