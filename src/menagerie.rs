//! Concrete capabilities a parrot can mimic.
//!
//! `Dog` and `Cat` are stateless and each carry one operation that is only
//! reachable after a successful cast. `Mynah` keeps a vocabulary so the
//! deep-copy behavior of [`Parrot`](crate::Parrot) is observable.

use crate::capability::Capability;
use crate::stage::{Stage, Utterance};
use anyhow::{Result, bail};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dog;

impl Dog {
    pub const SOUND: &'static str = "woof";

    pub fn paw(&self, stage: &mut dyn Stage) {
        stage.emit(Utterance::new(Species::Dog.as_str(), "woof?", 1));
    }
}

impl Capability for Dog {
    fn perform(&self, n: usize, stage: &mut dyn Stage) {
        stage.emit(Utterance::new(Species::Dog.as_str(), Self::SOUND, n));
    }

    fn duplicate(&self) -> Box<dyn Capability> {
        Box::new(*self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cat;

impl Cat {
    pub const SOUND: &'static str = "meow";

    pub fn zzz(&self, stage: &mut dyn Stage) {
        stage.emit(Utterance::new(Species::Cat.as_str(), "zzz", 1));
    }
}

impl Capability for Cat {
    fn perform(&self, n: usize, stage: &mut dyn Stage) {
        stage.emit(Utterance::new(Species::Cat.as_str(), Self::SOUND, n));
    }

    fn duplicate(&self) -> Box<dyn Capability> {
        Box::new(*self)
    }
}

/// A bird that repeats the last word it learned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mynah {
    vocabulary: Vec<String>,
}

impl Mynah {
    /// Sound made before any word has been learned.
    pub const UNTRAINED: &'static str = "...";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn learn(&mut self, word: impl Into<String>) {
        self.vocabulary.push(word.into());
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Say every learned word once, oldest first.
    pub fn recite(&self, stage: &mut dyn Stage) {
        for word in &self.vocabulary {
            stage.emit(Utterance::new(Species::Mynah.as_str(), word.as_str(), 1));
        }
    }

    fn current_word(&self) -> &str {
        self.vocabulary
            .last()
            .map(String::as_str)
            .unwrap_or(Self::UNTRAINED)
    }
}

impl Capability for Mynah {
    fn perform(&self, n: usize, stage: &mut dyn Stage) {
        stage.emit(Utterance::new(
            Species::Mynah.as_str(),
            self.current_word(),
            n,
        ));
    }

    fn duplicate(&self) -> Box<dyn Capability> {
        Box::new(self.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
    Mynah,
}

const ALL_SPECIES: &[Species] = &[Species::Dog, Species::Cat, Species::Mynah];

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Mynah => "mynah",
        }
    }

    /// Build an instance of this species. `words` only matter for a mynah.
    pub fn summon(&self, words: &[String]) -> Box<dyn Capability> {
        match self {
            Species::Dog => Box::new(Dog),
            Species::Cat => Box::new(Cat),
            Species::Mynah => {
                let mut mynah = Mynah::new();
                for word in words {
                    mynah.learn(word.as_str());
                }
                Box::new(mynah)
            }
        }
    }
}

impl TryFrom<&str> for Species {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            "mynah" => Ok(Species::Mynah),
            other => bail!(
                "Unknown species: {other} (expected one of {})",
                allowed_species_names().join(", ")
            ),
        }
    }
}

pub fn allowed_species_names() -> Vec<&'static str> {
    ALL_SPECIES.iter().map(Species::as_str).collect()
}
