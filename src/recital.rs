//! The demo sequence, runnable from the binary and from tests.
//!
//! A recital lets the dog and the cat (and the chosen species, if it is
//! neither) perform once, has a parrot mimic the chosen species and then tries
//! every cast shape against both `Dog` and `Cat`. A successful value cast only
//! uses the variant's own operation; optional and shared casts perform first.
//! Failed casts are recorded in the report.

use crate::capability::Capability;
use crate::menagerie::{Cat, Dog, Species};
use crate::parrot::Parrot;
use crate::stage::Stage;
use serde::Serialize;
use tracing::{debug, info};

const CAST_TARGETS: &[Species] = &[Species::Dog, Species::Cat];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CastOutcome {
    pub target: &'static str,
    pub value: bool,
    pub optional: bool,
    pub shared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecitalReport {
    pub species: &'static str,
    pub times: usize,
    pub casts: Vec<CastOutcome>,
}

impl RecitalReport {
    pub fn outcome(&self, target: Species) -> Option<&CastOutcome> {
        self.casts.iter().find(|cast| cast.target == target.as_str())
    }
}

/// Run the full sequence for `species`, emitting every utterance on `stage`.
///
/// `times` is the base repetition count: the parrot performs `times`,
/// optional casts `times + 1` and shared casts `times + 2`.
pub fn recite(
    species: Species,
    times: usize,
    words: &[String],
    stage: &mut dyn Stage,
) -> RecitalReport {
    info!(species = species.as_str(), times, "starting recital");
    Dog.perform(1, stage);
    Cat.perform(1, stage);
    let original = species.summon(words);
    if !CAST_TARGETS.contains(&species) {
        original.perform(1, stage);
    }

    let parrot = Parrot::mimic(&*original);
    parrot.perform(times, stage);

    let casts = vec![
        try_casts::<Dog>(&parrot, Species::Dog, times, stage, |dog, stage| {
            dog.paw(stage)
        }),
        try_casts::<Cat>(&parrot, Species::Cat, times, stage, |cat, stage| {
            cat.zzz(stage)
        }),
    ];

    RecitalReport {
        species: species.as_str(),
        times,
        casts,
    }
}

fn try_casts<V>(
    parrot: &Parrot,
    target: Species,
    times: usize,
    stage: &mut dyn Stage,
    special: impl Fn(&V, &mut dyn Stage),
) -> CastOutcome
where
    V: Capability + Clone,
{
    let mut outcome = CastOutcome {
        target: target.as_str(),
        ..CastOutcome::default()
    };

    match parrot.as_value::<V>() {
        Ok(variant) => {
            outcome.value = true;
            special(&variant, &mut *stage);
        }
        Err(err) => {
            debug!(wanted = target.as_str(), "value cast refused: {err}");
            outcome.value_error = Some(err.to_string());
        }
    }

    if let Ok(variant) = parrot.as_optional::<V>().into_value() {
        outcome.optional = true;
        variant.perform(times + 1, stage);
        special(&variant, &mut *stage);
    }

    if let Some(shared) = parrot.as_shared::<V>() {
        outcome.shared = true;
        shared.perform(times + 2, stage);
        special(&*shared, &mut *stage);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Utterance;

    // Dog recital reproduces the mimic-then-cast sequence line for line.
    #[test]
    fn dog_recital_matches_only_dog() {
        let mut stage: Vec<Utterance> = Vec::new();
        let report = recite(Species::Dog, 2, &[], &mut stage);

        let dog = report.outcome(Species::Dog).expect("dog outcome");
        assert!(dog.value && dog.optional && dog.shared);
        assert!(dog.value_error.is_none());

        let cat = report.outcome(Species::Cat).expect("cat outcome");
        assert!(!cat.value && !cat.optional && !cat.shared);
        assert!(cat.value_error.as_deref().unwrap().contains("invalid cast"));

        let lines: Vec<String> = stage.iter().map(Utterance::line).collect();
        assert_eq!(
            lines,
            vec![
                "woof",
                "meow",
                "woofwoof",
                "woof?",
                "woofwoofwoof",
                "woof?",
                "woofwoofwoofwoof",
                "woof?",
            ]
        );
    }

    // A mynah performs after the dog and the cat and matches no cast target.
    #[test]
    fn mynah_recital_matches_nothing() {
        let mut stage: Vec<Utterance> = Vec::new();
        let words = vec!["polly".to_string()];
        let report = recite(Species::Mynah, 1, &words, &mut stage);
        assert!(report.casts.iter().all(|cast| !cast.optional && !cast.shared));
        let lines: Vec<String> = stage.iter().map(Utterance::line).collect();
        assert_eq!(lines, vec!["woof", "meow", "polly", "polly"]);
    }

    // The value cast only triggers the variant operation, never a performance.
    #[test]
    fn value_cast_only_uses_variant_operation() {
        let mut stage: Vec<Utterance> = Vec::new();
        recite(Species::Cat, 1, &[], &mut stage);
        let lines: Vec<String> = stage.iter().map(Utterance::line).collect();
        assert_eq!(
            lines,
            vec!["woof", "meow", "meow", "zzz", "meowmeow", "zzz", "meowmeowmeow", "zzz"]
        );
    }
}
