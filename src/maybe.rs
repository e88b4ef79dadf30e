//! Present/absent wrapper returned by [`Parrot::as_optional`](crate::Parrot::as_optional).
//!
//! Unlike `Option`, reading an absent `Maybe` is a checked error rather than a
//! panic, so callers that prefer `?` can go straight from a cast to the value.

use crate::error::{ParrotError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    internal: Option<T>,
}

impl<T> Maybe<T> {
    pub fn new(value: T) -> Self {
        Self {
            internal: Some(value),
        }
    }

    pub fn absent() -> Self {
        Self { internal: None }
    }

    pub fn has_value(&self) -> bool {
        self.internal.is_some()
    }

    /// Borrow the held value; `InvalidAccess` when absent.
    pub fn value(&self) -> Result<&T> {
        self.internal.as_ref().ok_or(ParrotError::InvalidAccess)
    }

    pub fn value_mut(&mut self) -> Result<&mut T> {
        self.internal.as_mut().ok_or(ParrotError::InvalidAccess)
    }

    /// Move the held value out; `InvalidAccess` when absent.
    pub fn into_value(self) -> Result<T> {
        self.internal.ok_or(ParrotError::InvalidAccess)
    }

    pub fn into_option(self) -> Option<T> {
        self.internal
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self { internal: value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.internal
    }
}
