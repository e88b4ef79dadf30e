//! Error taxonomy for the holder and its helpers.

use thiserror::Error;

/// Errors raised by [`Maybe`](crate::Maybe), [`Parrot`](crate::Parrot) casts
/// and [`LineStage`](crate::LineStage).
#[derive(Debug, Error)]
pub enum ParrotError {
    /// Read the value of an absent `Maybe`.
    #[error("invalid access: no value present")]
    InvalidAccess,

    /// Value cast to a type the parrot is not holding.
    #[error("invalid cast: requested {requested}, parrot holds {}", .held.unwrap_or("nothing"))]
    InvalidCast {
        requested: &'static str,
        held: Option<&'static str>,
    },

    /// Writing an utterance to the underlying sink failed.
    #[error("writing utterance: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ParrotError> = std::result::Result<T, E>;
