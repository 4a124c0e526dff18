use std::borrow::Cow;

use crate::types::ValidationOutcome;
use crate::validation::Validator;

/// Adapts a closure into a named [`Validator`].
///
/// # Examples
///
/// ```
/// use validator_rail::{FnValidator, ValidationOutcome, ValidationResult, Validator};
///
/// let positive = FnValidator::new("positive", |n: &i32, _: Option<&()>| -> ValidationOutcome<i32> {
///     let result = ValidationResult::new(*n);
///     Ok(if *n > 0 { result } else { result.with_message("Must be positive") })
/// });
///
/// assert!(Validator::<i32>::validate(&positive, &3, None).unwrap().is_valid());
/// assert!(!Validator::<i32>::validate(&positive, &-3, None).unwrap().is_valid());
/// assert_eq!(Validator::<i32>::name(&positive), "positive");
/// ```
pub struct FnValidator<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> FnValidator<F> {
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<F> core::fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnValidator").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<D, C, F> Validator<D, C> for FnValidator<F>
where
    F: Fn(&D, Option<&C>) -> ValidationOutcome<D, C> + Send + Sync,
{
    #[inline]
    fn validate(&self, data: &D, context: Option<&C>) -> ValidationOutcome<D, C> {
        (self.f)(data, context)
    }

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }
}

/// Shorthand for [`FnValidator::new`].
#[inline]
pub fn validator_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> FnValidator<F> {
    FnValidator::new(name, f)
}
