//! Per-validator message template store.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{
    ConfigurationError, MessageVariables, MessageVec, ValidationOutcome, ValidationResult,
};
use crate::validation::VariableSource;

/// Error key to raw template mapping, plus the variable names the owning
/// validator fills in.
///
/// # Examples
///
/// ```
/// use validator_rail::{MessageTemplates, MessageValue, VariableSource};
///
/// struct Length { min: usize }
///
/// impl VariableSource for Length {
///     fn variable(&self, name: &str) -> Option<MessageValue> {
///         (name == "min").then(|| MessageValue::from(self.min))
///     }
/// }
///
/// let templates = MessageTemplates::new()
///     .with_template("tooShort", "Length must be at least %min%")
///     .with_variable("min");
///
/// let result = templates
///     .build_result::<_, (), _, _, _>("Length", &Length { min: 4 }, &"abc", None, ["tooShort"])
///     .unwrap();
/// assert_eq!(result.to_string(), "Length must be at least 4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTemplates {
    templates: BTreeMap<String, String>,
    variables: Vec<String>,
}

/// Construction-time overrides for a [`MessageTemplates`] store.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateOptions {
    pub message_templates: BTreeMap<String, String>,
    pub message_variables: Vec<String>,
}

impl MessageTemplates {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the template for `key`.
    #[inline]
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }

    /// Declares a variable the validator supplies a value for.
    #[inline]
    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.variables.contains(&name) {
            self.variables.push(name);
        }
        self
    }

    /// Applies user supplied overrides.
    ///
    /// Override templates replace same-key entries. A non-empty override
    /// variable list replaces the declared list.
    pub fn with_overrides(mut self, options: TemplateOptions) -> Self {
        self.templates.extend(options.message_templates);
        if !options.message_variables.is_empty() {
            self.variables = options.message_variables;
        }
        self
    }

    #[inline]
    pub fn templates(&self) -> &BTreeMap<String, String> {
        &self.templates
    }

    #[inline]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[inline]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Builds a [`ValidationResult`] for the selected error keys.
    ///
    /// Variables are only captured when at least one key was selected.
    ///
    /// # Errors
    ///
    /// * [`ConfigurationError::MissingTemplate`] if a key has no template.
    /// * [`ConfigurationError::MissingVariable`] if `source` has no value for a
    ///   declared variable.
    pub fn build_result<D, C, S, I, K>(
        &self,
        validator: &str,
        source: &S,
        data: &D,
        context: Option<&C>,
        keys: I,
    ) -> ValidationOutcome<D, C>
    where
        D: Clone,
        C: Clone,
        S: VariableSource + ?Sized,
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut raw_messages = MessageVec::new();
        for key in keys {
            let key = key.as_ref();
            match self.templates.get(key) {
                Some(template) => raw_messages.push(template.clone()),
                None => {
                    return Err(ConfigurationError::missing_template(validator.to_owned(), key))
                },
            }
        }

        let mut variables = MessageVariables::new();
        if raw_messages.is_empty() {
            return Ok(ValidationResult {
                data: data.clone(),
                context: context.cloned(),
                raw_messages,
                messages_variables: variables,
            });
        }

        for name in &self.variables {
            let value = source
                .variable(name)
                .ok_or_else(|| ConfigurationError::missing_variable(validator.to_owned(), name))?;
            variables.insert(name.clone(), value);
        }

        Ok(ValidationResult {
            data: data.clone(),
            context: context.cloned(),
            raw_messages,
            messages_variables: variables,
        })
    }
}
