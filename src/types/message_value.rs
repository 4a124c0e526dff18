//! Values substituted into message templates.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::MessageFormat;

/// A scalar or list value bound to a message variable.
///
/// With the `serde` feature the value is untagged, so it reads and writes as
/// the natural JSON shape (`null`, `true`, `4`, `"abc"`, `[1, 2]`).
///
/// JSON has no NaN or infinity, so `From<f64>` stores non-finite floats as
/// their text (`"NaN"`, `"inf"`), which renders the same and survives a round
/// trip. Integers outside the `i64` range read back as [`MessageValue::Float`].
///
/// # Examples
///
/// ```
/// use validator_rail::MessageValue;
///
/// assert_eq!(MessageValue::from(4).to_string(), "4");
/// assert_eq!(MessageValue::from(vec!["a", "b"]).to_string(), "a, b");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum MessageValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<MessageValue>),
}

impl MessageValue {
    /// Returns `true` for [`MessageValue::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stringifies the value the way interpolation does, joining list items
    /// with `list_separator`.
    pub fn render(&self, list_separator: &str) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            },
            Self::Str(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(|item| item.render(list_separator))
                .collect::<Vec<_>>()
                .join(list_separator),
        }
    }
}

impl Display for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&MessageFormat::default().list_separator))
    }
}

impl From<bool> for MessageValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for MessageValue {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for MessageValue {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Str(n.to_string()),
        }
    }
}

impl From<f32> for MessageValue {
    fn from(n: f32) -> Self {
        Self::from(f64::from(n))
    }
}

impl From<f64> for MessageValue {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            Self::Float(n)
        } else {
            Self::Str(n.to_string())
        }
    }
}

impl From<&str> for MessageValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for MessageValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<MessageValue>> From<Option<T>> for MessageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<MessageValue>> From<Vec<T>> for MessageValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MessageValue>> FromIterator<T> for MessageValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}
