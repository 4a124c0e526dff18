//! Accumulated outcome of validating a single value.
//!
//! A [`ValidationResult`] keeps the raw message templates exactly as the
//! validators produced them (useful as translation keys) together with the
//! variables needed to render them. Interpolation only happens when
//! [`ValidationResult::messages`] is called.

use core::fmt::{self, Display};
use core::ops::Deref;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::message_format::replace_all;
use crate::types::{MessageFormat, MessageValue, MessageVariables, MessageVec};

/// Holds the validated data, its optional context, the raw error templates and
/// the variables used to interpolate them.
///
/// A result with no raw messages is valid.
///
/// # Examples
///
/// ```
/// use validator_rail::ValidationResult;
///
/// let result = ValidationResult::new("abc")
///     .with_message("Length must be %min%")
///     .with_variable("min", 4);
///
/// assert!(!result.is_valid());
/// assert_eq!(result.raw_messages(), ["Length must be %min%"]);
/// assert_eq!(&*result.messages(), ["Length must be 4"]);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult<D, C = ()> {
    pub(crate) data: D,
    pub(crate) context: Option<C>,
    pub(crate) raw_messages: MessageVec,
    pub(crate) messages_variables: MessageVariables,
}

impl<D> ValidationResult<D> {
    /// Creates a valid result without context.
    #[inline]
    pub fn new(data: D) -> Self {
        Self::new_with_context(data, None)
    }
}

impl<D, C> ValidationResult<D, C> {
    /// Creates a valid result carrying an optional context.
    #[inline]
    pub fn new_with_context(data: D, context: Option<C>) -> Self {
        Self {
            data,
            context,
            raw_messages: MessageVec::new(),
            messages_variables: MessageVariables::new(),
        }
    }

    /// Creates a result from all four parts at once.
    pub fn from_parts<I, S>(
        data: D,
        context: Option<C>,
        raw_messages: I,
        messages_variables: MessageVariables,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data,
            context,
            raw_messages: raw_messages.into_iter().map(Into::into).collect(),
            messages_variables,
        }
    }

    /// Appends one raw message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.raw_messages.push(message.into());
        self
    }

    /// Appends several raw messages, preserving their order.
    #[inline]
    pub fn with_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_messages.extend(messages.into_iter().map(Into::into));
        self
    }

    /// Sets (or overrides) a message variable.
    #[inline]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<MessageValue>) -> Self {
        self.messages_variables.insert(name.into(), value.into());
        self
    }

    /// Returns `true` when no raw message was recorded.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.raw_messages.is_empty()
    }

    #[inline]
    pub fn data(&self) -> &D {
        &self.data
    }

    #[inline]
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Uninterpolated templates, in the order they were produced.
    #[inline]
    pub fn raw_messages(&self) -> &[String] {
        &self.raw_messages
    }

    #[inline]
    pub fn messages_variables(&self) -> &MessageVariables {
        &self.messages_variables
    }

    /// Interpolated messages, using `%name%` placeholders.
    ///
    /// Borrows the raw messages untouched when there is nothing to substitute.
    #[inline]
    pub fn messages(&self) -> Cow<'_, [String]> {
        self.messages_with(&MessageFormat::default())
    }

    /// Interpolated messages under a custom [`MessageFormat`].
    pub fn messages_with(&self, format: &MessageFormat) -> Cow<'_, [String]> {
        if self.messages_variables.is_empty() {
            return Cow::Borrowed(self.raw_messages.as_slice());
        }

        let pairs = format.substitutions(&self.messages_variables);
        let rendered = self
            .raw_messages
            .iter()
            .map(|raw| replace_all(raw, &format.placeholder_prefix, &pairs))
            .collect();
        Cow::Owned(rendered)
    }

    /// Interpolated messages wrapped in a view that serializes as a plain list.
    #[inline]
    pub fn interpolated(&self) -> Messages<'_> {
        Messages(self.messages())
    }

    /// Joins the interpolated messages with the format's separator.
    pub fn render(&self, format: &MessageFormat) -> String {
        format.join(&*self.messages_with(format))
    }

    /// Folds `other` into this result.
    ///
    /// Raw messages are appended in order and variables are merged, with
    /// `other` winning on a name collision. Data and context are left alone.
    pub fn merge<OD, OC>(&mut self, other: &ValidationResult<OD, OC>) {
        self.raw_messages.extend(other.raw_messages.iter().cloned());
        self.messages_variables
            .extend(other.messages_variables.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Consumes the result, returning the validated data.
    #[inline]
    pub fn into_data(self) -> D {
        self.data
    }

    /// Encodes the result into its persisted four-field layout.
    pub fn into_record(self) -> ResultRecord<D, C> {
        ResultRecord {
            data: self.data,
            context: self.context,
            raw_messages: self.raw_messages.into_vec(),
            messages_variables: self.messages_variables,
        }
    }

    /// Decodes a result from its persisted layout.
    pub fn from_record(record: ResultRecord<D, C>) -> Self {
        Self {
            data: record.data,
            context: record.context,
            raw_messages: MessageVec::from_vec(record.raw_messages),
            messages_variables: record.messages_variables,
        }
    }
}

impl<D, C> Display for ValidationResult<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&MessageFormat::default()))
    }
}

/// Persisted layout of a [`ValidationResult`].
///
/// The field names are a stable contract, independent of how the result
/// stores them internally.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord<D, C = ()> {
    pub data: D,
    pub context: Option<C>,
    pub raw_messages: Vec<String>,
    pub messages_variables: MessageVariables,
}

impl<D, C> From<ValidationResult<D, C>> for ResultRecord<D, C> {
    #[inline]
    fn from(result: ValidationResult<D, C>) -> Self {
        result.into_record()
    }
}

impl<D, C> From<ResultRecord<D, C>> for ValidationResult<D, C> {
    #[inline]
    fn from(record: ResultRecord<D, C>) -> Self {
        Self::from_record(record)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct RecordRef<'a, D, C> {
    data: &'a D,
    context: Option<&'a C>,
    raw_messages: &'a [String],
    messages_variables: &'a MessageVariables,
}

#[cfg(feature = "serde")]
impl<D: Serialize, C: Serialize> Serialize for ValidationResult<D, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRef {
            data: &self.data,
            context: self.context.as_ref(),
            raw_messages: self.raw_messages.as_slice(),
            messages_variables: &self.messages_variables,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D, C> Deserialize<'de> for ValidationResult<D, C>
where
    D: Deserialize<'de>,
    C: Deserialize<'de>,
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        ResultRecord::<D, C>::deserialize(deserializer).map(Self::from_record)
    }
}

/// Interpolated messages of a [`ValidationResult`].
///
/// Serializes as a plain sequence of strings, the shape clients usually want
/// in an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages<'a>(Cow<'a, [String]>);

impl Messages<'_> {
    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.0.into_owned()
    }
}

impl Deref for Messages<'_> {
    type Target = [String];

    #[inline]
    fn deref(&self) -> &[String] {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for Messages<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}
