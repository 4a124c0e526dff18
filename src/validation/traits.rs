//! Core validator traits.

use crate::types::{MessageValue, ValidationOutcome};
use crate::validation::MessageTemplates;

/// The capability every validator provides.
///
/// A validator reads `data` (and the optional `context`) and reports its
/// findings as a fresh [`ValidationResult`](crate::ValidationResult). Failing
/// data is *not* an error: it is an invalid result. `Err` is reserved for
/// [`ConfigurationError`](crate::ConfigurationError)s, which abort the
/// enclosing validation.
///
/// `Box<V>` forwards to `V`. `Arc<V>` does not implement the trait; register
/// shared instances with [`ValidatorChain::add_shared`](crate::ValidatorChain::add_shared).
///
/// # Examples
///
/// ```
/// use validator_rail::{ValidationOutcome, ValidationResult, Validator};
///
/// struct NotEmpty;
///
/// impl Validator<String> for NotEmpty {
///     fn validate(&self, data: &String, context: Option<&()>) -> ValidationOutcome<String> {
///         let result = ValidationResult::new_with_context(data.clone(), context.copied());
///         Ok(if data.is_empty() { result.with_message("Value is required") } else { result })
///     }
/// }
///
/// assert!(NotEmpty.invoke(&"x".to_string(), None).unwrap().is_valid());
/// assert_eq!(NotEmpty.name(), "NotEmpty");
/// ```
pub trait Validator<D, C = ()>: Send + Sync {
    /// Validates `data`, optionally using `context`.
    fn validate(&self, data: &D, context: Option<&C>) -> ValidationOutcome<D, C>;

    /// Alias of [`validate`](Validator::validate).
    #[inline]
    fn invoke(&self, data: &D, context: Option<&C>) -> ValidationOutcome<D, C> {
        self.validate(data, context)
    }

    /// Name used for removal by name and in diagnostics.
    ///
    /// Defaults to the implementing type's name without its module path.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }
}

impl<D, C, V> Validator<D, C> for Box<V>
where
    V: Validator<D, C> + ?Sized,
{
    #[inline]
    fn validate(&self, data: &D, context: Option<&C>) -> ValidationOutcome<D, C> {
        (**self).validate(data, context)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Supplies the current value of a validator's declared message variables.
///
/// Implemented by templated validators: `min`/`max` of a length check, the
/// haystack of an inclusion check, and so on.
pub trait VariableSource {
    /// Value of the variable `name`, or `None` when the validator has none.
    fn variable(&self, name: &str) -> Option<MessageValue>;
}

/// Base contract for validators whose failures are described by
/// [`MessageTemplates`].
pub trait TemplatedValidator: VariableSource {
    fn message_templates(&self) -> &MessageTemplates;

    /// Builds the result for the given error keys, capturing every declared
    /// variable through [`VariableSource`].
    ///
    /// An empty `keys` yields a valid result.
    fn build_result<D, C, I, K>(
        &self,
        data: &D,
        context: Option<&C>,
        keys: I,
    ) -> ValidationOutcome<D, C>
    where
        Self: Sized,
        D: Clone,
        C: Clone,
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.message_templates().build_result(
            short_type_name::<Self>(),
            self,
            data,
            context,
            keys,
        )
    }
}

/// `a::b::Type<X, Y>` → `Type`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = core::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
