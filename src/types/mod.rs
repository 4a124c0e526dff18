//! Result and message types.
//!
//! This module provides the value objects produced by validators: the
//! [`ValidationResult`] itself, the [`MessageValue`]s bound to template
//! variables, the [`MessageFormat`] used to render them, and the
//! [`ConfigurationError`] raised by broken validators.
//!
//! # Examples
//!
//! ```
//! use validator_rail::ValidationResult;
//!
//! let mut first = ValidationResult::new("data")
//!     .with_message("First error %key1%")
//!     .with_variable("key1", "var1");
//! let second = ValidationResult::new("data")
//!     .with_message("Second error %key2%")
//!     .with_variable("key2", "var2");
//!
//! first.merge(&second);
//! assert_eq!(first.to_string(), "First error var1, Second error var2");
//! ```
use smallvec::SmallVec;
use std::collections::BTreeMap;

pub mod configuration_error;
pub mod message_format;
pub mod message_value;
pub mod validation_result;

pub use configuration_error::*;
pub use message_format::*;
pub use message_value::*;
pub use validation_result::*;

/// SmallVec-backed collection of raw messages.
///
/// Uses inline storage for one message, the common case of a single failing
/// rule, to avoid a heap allocation.
pub type MessageVec = SmallVec<[String; 1]>;

/// Variable name (without delimiters) to current value.
pub type MessageVariables = BTreeMap<String, MessageValue>;

/// What a validator returns: a result, or the configuration error that
/// prevented producing one.
///
/// # Type Parameters
///
/// * `D` - The validated data type
/// * `C` - The context type
pub type ValidationOutcome<D, C = ()> = Result<ValidationResult<D, C>, ConfigurationError>;
