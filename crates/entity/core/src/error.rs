use thiserror::Error;

/// A proposed value failed the container's validator.
///
/// The container state is left untouched; the rejected candidate is handed
/// back so the caller can inspect it, retry with something else, or drop it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation rejected: the proposed value violates the validator")]
pub struct ValidationRejected<T> {
    pub candidate: T,
}

impl<T> ValidationRejected<T> {
    pub fn new(candidate: T) -> Self {
        Self { candidate }
    }

    /// Take the rejected candidate back.
    pub fn into_candidate(self) -> T {
        self.candidate
    }
}
