use std::borrow::Borrow;
use std::fmt;
use std::ops::{Deref, Index};

use crate::config::EntityConfig;
use crate::error::ValidationRejected;
use crate::trace;
use crate::validator::Validator;

/// A value container that validates every write routed through it.
///
/// Reads are transparent: an `Entity<T>` derefs to `&T`, forwards indexing and
/// formatting, and compares like `T`. Writes go through [`Entity::set`], which
/// commits only when the validator accepts the candidate.
///
/// The `shadow` field is a public mirror of the committed value. It is
/// re-synchronised after every successful write; mutating it directly does
/// not touch the committed value until [`Entity::resync`] pushes it back
/// through the validator.
pub struct Entity<T> {
    pub(crate) value: T,
    /// Public mirror of the committed value
    pub shadow: T,
    validator: Validator<T>,
    pub(crate) config: EntityConfig,
}

impl<T: Clone> Entity<T> {
    /// Wrap `value` with an accept-all validator.
    ///
    /// The initial value is never validated; construction cannot fail.
    pub fn new(value: T) -> Self {
        Self::with_config(value, EntityConfig::default())
    }

    pub fn with_config(value: T, config: EntityConfig) -> Self {
        Self {
            shadow: value.clone(),
            value,
            validator: Validator::accept_all(),
            config,
        }
    }

    /// Wrap `value` and install `check` as the validator.
    ///
    /// As with [`Entity::new`], `value` itself is not checked.
    pub fn with_validator<F>(value: T, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let mut entity = Self::new(value);
        entity.validator = Validator::new(check);
        entity
    }

    /// Validated set.
    ///
    /// Commits `candidate` to both the value and the shadow when the
    /// validator accepts it and returns `true`. Otherwise nothing changes and
    /// the result is `false`.
    pub fn set(&mut self, candidate: T) -> bool {
        self.try_set(candidate).is_ok()
    }

    /// Validated set that hands a rejected candidate back.
    pub fn try_set(&mut self, candidate: T) -> Result<(), ValidationRejected<T>> {
        if self.validator.check(&candidate) {
            trace::operation(&self.config, "set");
            self.shadow = candidate.clone();
            self.value = candidate;
            Ok(())
        } else {
            trace::rejected(&self.config);
            Err(ValidationRejected::new(candidate))
        }
    }

    /// Push the current shadow back through the validated set.
    ///
    /// On rejection the shadow keeps its externally written value and the
    /// committed value is unchanged.
    pub fn resync(&mut self) -> bool {
        trace::operation(&self.config, "resync");
        let candidate = self.shadow.clone();
        self.set(candidate)
    }

    /// Compute a new value from the current one and route it through `set`.
    ///
    /// The observable form of compound assignment: the result is what gets
    /// validated, and the boolean reports whether it committed.
    pub fn update<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        self.try_update(f).is_ok()
    }

    pub fn try_update<F>(&mut self, f: F) -> Result<(), ValidationRejected<T>>
    where
        F: FnOnce(&T) -> T,
    {
        let candidate = f(&self.value);
        self.try_set(candidate)
    }

    /// Build a fresh, unvalidated instance around `value` that shares this
    /// instance's config but not its validator.
    pub(crate) fn derive(&self, value: T) -> Self {
        Self::with_config(value, self.config)
    }
}

impl<T> Entity<T> {
    /// The committed value (never the shadow).
    pub fn get(&self) -> &T {
        trace::operation(&self.config, "get");
        &self.value
    }

    /// A handle to the current validator.
    pub fn validator(&self) -> Validator<T> {
        trace::operation(&self.config, "validator");
        self.validator.clone()
    }

    /// Replace the validator.
    ///
    /// The committed value is not re-validated against the new predicate.
    pub fn set_validator<F>(&mut self, check: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.replace_validator(Validator::new(check));
    }

    /// Install an existing validator handle, e.g. one taken from another
    /// instance.
    pub fn replace_validator(&mut self, validator: Validator<T>) {
        trace::operation(&self.config, "set_validator");
        self.validator = validator;
    }

    pub fn config(&self) -> &EntityConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EntityConfig) {
        self.config = config;
    }

    /// Mutable access to the committed value that SKIPS validation.
    ///
    /// Anything written through this reference is never checked against the
    /// validator, and the shadow is left as it was. Follow up with
    /// [`Entity::set`] or [`Entity::resync`] if the invariant matters.
    pub fn unchecked_mut(&mut self) -> &mut T {
        trace::operation(&self.config, "unchecked_mut");
        &mut self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub(crate) fn trace(&self, op: &'static str) {
        trace::operation(&self.config, op);
    }
}

impl<T: Clone + Default> Default for Entity<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            shadow: self.shadow.clone(),
            validator: self.validator.clone(),
            config: self.config,
        }
    }
}

impl<T: Clone> From<T> for Entity<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for Entity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.trace("deref");
        &self.value
    }
}

impl<T> AsRef<T> for Entity<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> Borrow<T> for Entity<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T, I> Index<I> for Entity<T>
where
    T: Index<I>,
{
    type Output = T::Output;

    fn index(&self, index: I) -> &Self::Output {
        self.trace("[]");
        &self.value[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Entity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("value", &self.value)
            .field("shadow", &self.shadow)
            .field("validator", &self.validator)
            .field("config", &self.config)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Entity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
