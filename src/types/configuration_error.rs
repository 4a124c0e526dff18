//! Programmer errors raised by mis-configured validators.
//!
//! Data-validation failures are never errors: they travel as
//! [`ValidationResult`](crate::ValidationResult) values. A
//! [`ConfigurationError`] instead means the validator itself is broken (a
//! template key it references does not exist, a declared variable has no
//! value), and it aborts the enclosing `validate` call.

use core::fmt;

use std::borrow::Cow;

/// Error raised when a validator is used in a way its configuration does not
/// support.
///
/// # Examples
///
/// ```
/// use validator_rail::ConfigurationError;
///
/// let err = ConfigurationError::missing_template("LengthValidator", "tooShort");
/// assert_eq!(
///     err.to_string(),
///     "No error message template was found for key \"tooShort\" in LengthValidator"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// An error key was selected that has no registered template.
    MissingTemplate { validator: Cow<'static, str>, key: String },

    /// A declared message variable has no current value.
    MissingVariable { validator: Cow<'static, str>, name: String },

    /// The validator rejected its own settings.
    Invalid { validator: Cow<'static, str>, reason: String },
}

impl ConfigurationError {
    #[inline]
    pub fn missing_template(
        validator: impl Into<Cow<'static, str>>,
        key: impl Into<String>,
    ) -> Self {
        Self::MissingTemplate { validator: validator.into(), key: key.into() }
    }

    #[inline]
    pub fn missing_variable(
        validator: impl Into<Cow<'static, str>>,
        name: impl Into<String>,
    ) -> Self {
        Self::MissingVariable { validator: validator.into(), name: name.into() }
    }

    #[inline]
    pub fn invalid(validator: impl Into<Cow<'static, str>>, reason: impl Into<String>) -> Self {
        Self::Invalid { validator: validator.into(), reason: reason.into() }
    }

    /// Name of the validator that raised the error.
    #[inline]
    pub fn validator(&self) -> &str {
        match self {
            Self::MissingTemplate { validator, .. }
            | Self::MissingVariable { validator, .. }
            | Self::Invalid { validator, .. } => validator,
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTemplate { validator, key } => write!(
                f,
                "No error message template was found for key \"{}\" in {}",
                key, validator
            ),
            Self::MissingVariable { validator, name } => {
                write!(f, "No value was supplied for message variable \"{}\" in {}", name, validator)
            },
            Self::Invalid { validator, reason } => {
                write!(f, "Invalid configuration for {}: {}", validator, reason)
            },
        }
    }
}

impl std::error::Error for ConfigurationError {}
