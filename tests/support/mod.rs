#![allow(dead_code)]

use anyhow::{Context, Result};
use parrot::{Capability, Stage, Utterance};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Text lines produced by `capability.perform(n)`.
pub fn performed_lines(capability: &dyn Capability, n: usize) -> Vec<String> {
    let mut stage: Vec<Utterance> = Vec::new();
    capability.perform(n, &mut stage);
    stage.iter().map(Utterance::line).collect()
}

/// Records utterances and lets a test run arbitrary calls against it.
pub fn record(f: impl FnOnce(&mut dyn Stage)) -> Vec<Utterance> {
    let mut stage: Vec<Utterance> = Vec::new();
    f(&mut stage);
    stage
}

pub fn demo_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_parrot-demo"))
}

/// Run the demo with a clean `PARROT_*` environment plus `envs`.
pub fn run_demo(args: &[&str], envs: &[(&str, &str)]) -> Result<Output> {
    let mut cmd = Command::new(demo_binary());
    cmd.args(args)
        .env_remove("PARROT_SPECIES")
        .env_remove("PARROT_FORMAT")
        .env_remove("PARROT_WORDS")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output()
        .with_context(|| format!("failed to run parrot-demo {}", args.join(" ")))
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// A capability with mutable state that is only reachable through `&mut`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tally {
    pub marks: Vec<u32>,
}

impl Capability for Tally {
    fn perform(&self, n: usize, stage: &mut dyn Stage) {
        stage.emit(Utterance::new("tally", self.marks.len().to_string(), n));
    }

    fn duplicate(&self) -> Box<dyn Capability> {
        Box::new(self.clone())
    }
}
