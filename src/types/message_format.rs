//! Message rendering configuration and placeholder interpolation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::MessageVariables;

/// Configuration-based message renderer.
///
/// Controls how placeholders are delimited inside raw templates and how the
/// interpolated messages are joined into a single string.
///
/// # Examples
///
/// ```
/// use validator_rail::{MessageFormat, MessageValue, MessageVariables};
///
/// let mut vars = MessageVariables::new();
/// vars.insert("min".into(), MessageValue::from(4));
///
/// let format = MessageFormat::default();
/// assert_eq!(format.interpolate("at least %min%", &vars), "at least 4");
///
/// let braces = MessageFormat::braces();
/// assert_eq!(braces.interpolate("at least {min}", &vars), "at least 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MessageFormat {
    pub placeholder_prefix: String,
    pub placeholder_suffix: String,
    pub separator: String,
    pub list_separator: String,
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self {
            placeholder_prefix: "%".into(),
            placeholder_suffix: "%".into(),
            separator: ", ".into(),
            list_separator: ", ".into(),
        }
    }
}

impl MessageFormat {
    /// One message per line.
    #[inline]
    pub fn lines() -> Self {
        Self { separator: "\n".into(), ..Default::default() }
    }

    /// `{name}` placeholders instead of `%name%`.
    #[inline]
    pub fn braces() -> Self {
        Self { placeholder_prefix: "{".into(), placeholder_suffix: "}".into(), ..Default::default() }
    }

    /// Wraps a variable name in the configured delimiters.
    #[inline]
    pub fn placeholder(&self, name: &str) -> String {
        let mut out = String::with_capacity(
            self.placeholder_prefix.len() + name.len() + self.placeholder_suffix.len(),
        );
        out.push_str(&self.placeholder_prefix);
        out.push_str(name);
        out.push_str(&self.placeholder_suffix);
        out
    }

    /// Builds the placeholder/value substitution table for `variables`.
    ///
    /// Longer placeholders come first so that overlapping names resolve to the
    /// longest literal match.
    pub fn substitutions(&self, variables: &MessageVariables) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = variables
            .iter()
            .map(|(name, value)| (self.placeholder(name), value.render(&self.list_separator)))
            .collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        pairs
    }

    /// Interpolates a single template.
    ///
    /// Placeholders whose name is not in `variables` are left verbatim.
    pub fn interpolate(&self, template: &str, variables: &MessageVariables) -> String {
        if variables.is_empty() {
            return template.to_owned();
        }
        replace_all(template, &self.placeholder_prefix, &self.substitutions(variables))
    }

    /// Joins already interpolated messages with the configured separator.
    #[inline]
    pub fn join<S: AsRef<str>>(&self, messages: &[S]) -> String {
        let mut out = String::new();
        for (i, message) in messages.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            out.push_str(message.as_ref());
        }
        out
    }
}

/// Single left-to-right pass; substituted text is never re-scanned.
pub(crate) fn replace_all(template: &str, prefix: &str, pairs: &[(String, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        if prefix.is_empty() || rest.starts_with(prefix) {
            for (needle, value) in pairs {
                if !needle.is_empty() && rest.starts_with(needle.as_str()) {
                    out.push_str(value);
                    rest = &rest[needle.len()..];
                    continue 'scan;
                }
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}
