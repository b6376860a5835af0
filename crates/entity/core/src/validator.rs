use std::fmt;
use std::sync::Arc;

/// The predicate a proposed value must satisfy before it commits.
///
/// Cloning is cheap: clones share the same underlying closure. The container
/// treats the predicate as opaque and never assumes it is pure.
pub struct Validator<T: ?Sized> {
    /// `None` is the built-in accept-all validator
    check: Option<Arc<dyn Fn(&T) -> bool + Send + Sync>>,
}

impl<T: ?Sized> Validator<T> {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Some(Arc::new(check)),
        }
    }

    /// The default validator: every candidate passes.
    pub fn accept_all() -> Self {
        Self { check: None }
    }

    /// Evaluate the predicate against a candidate.
    pub fn check(&self, candidate: &T) -> bool {
        match &self.check {
            Some(check) => check(candidate),
            None => true,
        }
    }

    /// True if this is the built-in accept-all validator (not merely a
    /// closure that happens to return `true`).
    pub fn is_accept_all(&self) -> bool {
        self.check.is_none()
    }

    /// True if both handles share the same closure, or are both accept-all.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.check, &other.check) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
        }
    }
}

impl<T: ?Sized> Default for Validator<T> {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_accept_all() {
            f.write_str("Validator(accept_all)")
        } else {
            f.write_str("Validator(custom)")
        }
    }
}
