//! A value-semantic polymorphic holder.
//!
//! [`Parrot`] mimics any [`Capability`], copies deeply, and hands the held
//! instance back as the concrete type the caller names, through one of three
//! casts: [`Parrot::as_shared`], [`Parrot::as_optional`] or
//! [`Parrot::as_value`].

pub mod capability;
pub mod error;
pub mod maybe;
pub mod menagerie;
pub mod parrot;
pub mod recital;
pub mod stage;

pub use capability::{Capability, Erased};
pub use error::{ParrotError, Result};
pub use maybe::Maybe;
pub use menagerie::{Cat, Dog, Mynah, Species, allowed_species_names};
pub use parrot::{Parrot, SILENT_SOUND, SILENT_VOICE};
pub use recital::{CastOutcome, RecitalReport, recite};
pub use stage::{Format, LineStage, Stage, Utterance, allowed_format_names};

use std::env;

pub const ENV_SPECIES: &str = "PARROT_SPECIES";
pub const ENV_FORMAT: &str = "PARROT_FORMAT";
pub const ENV_WORDS: &str = "PARROT_WORDS";

/// Split a comma- or whitespace-separated list, dropping empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Value of `name` when it is set and not empty.
pub fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_accepts_commas_and_spaces() {
        assert_eq!(split_list("hello, polly  cracker"), vec!["hello", "polly", "cracker"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn env_non_empty_ignores_missing_variables() {
        assert_eq!(env_non_empty("PARROT_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
