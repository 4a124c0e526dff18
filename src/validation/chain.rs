//! Priority-ordered composite validator.
//!
//! A [`ValidatorChain`] runs every registered validator against the same
//! input and folds all their failures into one [`ValidationResult`]. It is a
//! [`Validator`] itself, so chains nest.
//!
//! Validators with a higher priority run first; equal priorities keep their
//! registration order. The order is computed lazily: registering or removing
//! validators only marks the chain, and the next `validate` call sorts it.

use core::any::TypeId;
use core::cmp::Reverse;
use core::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use smallvec::SmallVec;

use crate::types::{ValidationOutcome, ValidationResult};
use crate::validation::Validator;

/// Priority used by [`ValidatorChain::add_validator`].
pub const DEFAULT_PRIORITY: i32 = 1;

/// Shared, type-erased validator handle.
pub type SharedValidator<D, C = ()> = Arc<dyn Validator<D, C>>;

struct ChainEntry<D, C> {
    priority: i32,
    validator: SharedValidator<D, C>,
    type_id: Option<TypeId>,
}

struct ChainState<D, C> {
    entries: Vec<ChainEntry<D, C>>,
    sorted: bool,
}

impl<D, C> ChainState<D, C> {
    fn sort(&mut self) {
        // `sort_by_key` is stable: equal priorities keep insertion order.
        self.entries.sort_by_key(|entry| Reverse(entry.priority));
        self.sorted = true;
        rail_log!(debug, validators = self.entries.len(), "validator chain re-sorted");
    }
}

/// Selects validators to remove from a [`ValidatorChain`].
///
/// Built from `&Arc<V>` (identity of the shared instance) or from a name
/// (every validator whose [`Validator::name`] matches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Instance(*const ()),
    Name(&'a str),
}

impl<'a, V: ?Sized> From<&'a Arc<V>> for Selector<'a> {
    #[inline]
    fn from(validator: &'a Arc<V>) -> Self {
        Selector::Instance(Arc::as_ptr(validator) as *const ())
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Selector::Name(name)
    }
}

impl<'a> From<&'a String> for Selector<'a> {
    #[inline]
    fn from(name: &'a String) -> Self {
        Selector::Name(name)
    }
}

/// Ordered collection of validators that validates as one.
///
/// Registration takes `&mut self`; validation takes `&self` and can run from
/// several threads once the chain is set up.
///
/// # Examples
///
/// ```
/// use validator_rail::{validator_fn, ValidationOutcome, ValidationResult, Validator, ValidatorChain};
///
/// fn rule(message: &'static str, fails: bool) -> impl Validator<i32> {
///     validator_fn(message, move |n: &i32, _: Option<&()>| -> ValidationOutcome<i32> {
///         let result = ValidationResult::new(*n);
///         Ok(if fails { result.with_message(message) } else { result })
///     })
/// }
///
/// let mut chain: ValidatorChain<i32> = ValidatorChain::new();
/// chain.add_validator(rule("A", true));
/// chain.add_validator_with_priority(rule("B", true), 5);
/// chain.add_validator(rule("C", false));
///
/// let result = chain.validate(&42, None).unwrap();
/// assert_eq!(result.raw_messages(), ["B", "A"]);
/// assert_eq!(chain.count(), 3);
/// ```
pub struct ValidatorChain<D, C = ()> {
    state: RwLock<ChainState<D, C>>,
}

impl<D, C> Default for ValidatorChain<D, C> {
    fn default() -> Self {
        Self { state: RwLock::new(ChainState { entries: Vec::new(), sorted: true }) }
    }
}

impl<D, C> fmt::Debug for ValidatorChain<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ValidatorChain")
            .field(
                "validators",
                &state
                    .entries
                    .iter()
                    .map(|entry| (entry.validator.name(), entry.priority))
                    .collect::<Vec<_>>(),
            )
            .field("sorted", &state.sorted)
            .finish()
    }
}

impl<D, C> ValidatorChain<D, C> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_validator_with_priority`](Self::add_validator_with_priority).
    #[inline]
    pub fn with_validator<V>(mut self, validator: V, priority: i32) -> Self
    where
        V: Validator<D, C> + 'static,
    {
        self.add_validator_with_priority(validator, priority);
        self
    }

    /// Registers a validator with [`DEFAULT_PRIORITY`].
    #[inline]
    pub fn add_validator<V>(&mut self, validator: V)
    where
        V: Validator<D, C> + 'static,
    {
        self.add_validator_with_priority(validator, DEFAULT_PRIORITY);
    }

    /// Registers a validator; higher priorities run first.
    pub fn add_validator_with_priority<V>(&mut self, validator: V, priority: i32)
    where
        V: Validator<D, C> + 'static,
    {
        self.push(ChainEntry {
            priority,
            validator: Arc::new(validator),
            type_id: Some(TypeId::of::<V>()),
        });
    }

    /// Registers an already shared validator.
    ///
    /// Keep a clone of the `Arc` to remove this exact instance later. The
    /// by-value registration methods do not accept an `Arc`:
    ///
    /// ```compile_fail
    /// use std::sync::Arc;
    /// use validator_rail::{validator_fn, ValidationOutcome, ValidationResult, ValidatorChain};
    ///
    /// let shared = Arc::new(validator_fn("any", |s: &String, _: Option<&()>| -> ValidationOutcome<String> {
    ///     Ok(ValidationResult::new(s.clone()))
    /// }));
    /// let mut chain: ValidatorChain<String> = ValidatorChain::new();
    /// chain.add_validator(Arc::clone(&shared));
    /// ```
    pub fn add_shared<V>(&mut self, validator: Arc<V>, priority: i32)
    where
        V: Validator<D, C> + 'static,
    {
        self.push(ChainEntry { priority, validator, type_id: Some(TypeId::of::<V>()) });
    }

    /// Registers a type-erased validator.
    pub fn add_dyn(&mut self, validator: SharedValidator<D, C>, priority: i32) {
        self.push(ChainEntry { priority, validator, type_id: None });
    }

    fn push(&mut self, entry: ChainEntry<D, C>) {
        rail_log!(trace, validator = entry.validator.name(), priority = entry.priority, "validator registered");
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        state.entries.push(entry);
        state.sorted = false;
    }

    /// Removes every entry matching `selector`.
    ///
    /// Scans the whole chain, so it is linear in the number of entries. A
    /// validator registered several times is removed under every priority.
    /// Returns whether anything was removed.
    pub fn remove_validator<'a>(&mut self, selector: impl Into<Selector<'a>>) -> bool {
        let selector = selector.into();
        self.remove_where(|entry| match selector {
            Selector::Instance(ptr) => Arc::as_ptr(&entry.validator) as *const () == ptr,
            Selector::Name(name) => entry.validator.name() == name,
        })
    }

    /// Removes every entry registered with the concrete type `V`.
    pub fn remove_validator_of<V: 'static>(&mut self) -> bool {
        let target = TypeId::of::<V>();
        self.remove_where(|entry| entry.type_id == Some(target))
    }

    fn remove_where<P>(&mut self, mut matches: P) -> bool
    where
        P: FnMut(&ChainEntry<D, C>) -> bool,
    {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        let before = state.entries.len();
        // `retain` keeps the relative order, so a sorted chain stays sorted.
        state.entries.retain(|entry| !matches(entry));
        let removed = before - state.entries.len();
        if removed > 0 {
            rail_log!(trace, removed, "validators removed");
        }
        removed > 0
    }

    /// Number of registered entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.state.read().unwrap_or_else(PoisonError::into_inner).entries.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `false` while a registration change is waiting for the next
    /// `validate` call to re-sort the chain.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).sorted
    }

    /// Validators in execution order, sorting first if needed.
    ///
    /// No lock is held once this returns, so members may re-enter the chain.
    fn ordered(&self) -> SmallVec<[SharedValidator<D, C>; 4]> {
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if state.sorted {
                return state.entries.iter().map(|entry| Arc::clone(&entry.validator)).collect();
            }
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !state.sorted {
            state.sort();
        }
        state.entries.iter().map(|entry| Arc::clone(&entry.validator)).collect()
    }
}

impl<D, C> Validator<D, C> for ValidatorChain<D, C>
where
    D: Clone,
    C: Clone,
{
    /// Runs every member in priority order and merges their failures.
    ///
    /// A member's [`ConfigurationError`](crate::ConfigurationError) aborts the
    /// remaining members and is returned as is.
    fn validate(&self, data: &D, context: Option<&C>) -> ValidationOutcome<D, C> {
        let mut accumulated = ValidationResult::new_with_context(data.clone(), context.cloned());

        for validator in self.ordered() {
            rail_log!(trace, validator = validator.name(), "running validator");
            let result = validator.validate(data, context).map_err(|err| {
                rail_log!(warn, validator = validator.name(), error = %err, "validator mis-configured");
                err
            })?;

            if !result.is_valid() {
                accumulated.merge(&result);
            }
        }

        Ok(accumulated)
    }
}

impl<D, C, V> Extend<(V, i32)> for ValidatorChain<D, C>
where
    V: Validator<D, C> + 'static,
{
    fn extend<I: IntoIterator<Item = (V, i32)>>(&mut self, iter: I) {
        for (validator, priority) in iter {
            self.add_validator_with_priority(validator, priority);
        }
    }
}

impl<D, C, V> FromIterator<(V, i32)> for ValidatorChain<D, C>
where
    V: Validator<D, C> + 'static,
{
    fn from_iter<I: IntoIterator<Item = (V, i32)>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}
