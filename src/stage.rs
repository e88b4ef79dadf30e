//! Where performances land.
//!
//! `Capability::perform` has no return value; everything it does is observed
//! through a [`Stage`]. Tests record utterances into a `Vec`, the demo binary
//! writes them line by line to stdout through [`LineStage`].

use crate::error::{ParrotError, Result};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One observable signal: `sound` repeated `repetitions` times by `voice`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub voice: String,
    pub sound: String,
    pub repetitions: usize,
}

impl Utterance {
    pub fn new(voice: impl Into<String>, sound: impl Into<String>, repetitions: usize) -> Self {
        Self {
            voice: voice.into(),
            sound: sound.into(),
            repetitions,
        }
    }

    /// The sound repeated `repetitions` times, with no separator.
    pub fn line(&self) -> String {
        self.sound.repeat(self.repetitions)
    }
}

/// Sink for utterances. Emitting never fails; sinks that can fail latch the
/// error and report it later.
pub trait Stage {
    fn emit(&mut self, utterance: Utterance);
}

impl Stage for Vec<Utterance> {
    fn emit(&mut self, utterance: Utterance) {
        self.push(utterance);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
        }
    }
}

impl TryFrom<&str> for Format {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => bail!(
                "Unknown format: {other} (expected one of {})",
                allowed_format_names().join(", ")
            ),
        }
    }
}

pub fn allowed_format_names() -> Vec<&'static str> {
    [Format::Text, Format::Json]
        .iter()
        .map(Format::as_str)
        .collect()
}

/// Writes one line per utterance to `out`.
///
/// The first write error is kept and every later utterance is dropped;
/// [`LineStage::finish`] returns it.
pub struct LineStage<W: Write> {
    out: W,
    format: Format,
    error: Option<ParrotError>,
}

impl<W: Write> LineStage<W> {
    pub fn new(out: W, format: Format) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first error seen while emitting.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, utterance: &Utterance) -> Result<()> {
        match self.format {
            Format::Text => writeln!(self.out, "{}", utterance.line())?,
            Format::Json => {
                serde_json::to_writer(&mut self.out, utterance).map_err(std::io::Error::from)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Stage for LineStage<W> {
    fn emit(&mut self, utterance: Utterance) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_line(&utterance) {
            tracing::warn!(voice = %utterance.voice, "dropping utterance: {err}");
            self.error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_repeats_sound_without_separator() {
        assert_eq!(Utterance::new("dog", "woof", 3).line(), "woofwoofwoof");
        assert_eq!(Utterance::new("dog", "woof", 0).line(), "");
    }

    #[test]
    fn text_stage_writes_one_line_per_utterance() {
        let mut stage = LineStage::new(Vec::new(), Format::Text);
        stage.emit(Utterance::new("cat", "meow", 2));
        stage.emit(Utterance::new("cat", "zzz", 1));
        let out = stage.finish().expect("finish");
        assert_eq!(String::from_utf8(out).unwrap(), "meowmeow\nzzz\n");
    }

    #[test]
    fn json_stage_lines_parse_back() {
        let mut stage = LineStage::new(Vec::new(), Format::Json);
        stage.emit(Utterance::new("dog", "woof", 2));
        let out = String::from_utf8(stage.finish().expect("finish")).unwrap();
        let parsed: Utterance = serde_json::from_str(out.trim()).expect("json line");
        assert_eq!(parsed, Utterance::new("dog", "woof", 2));
    }

    #[test]
    fn write_errors_are_latched_until_finish() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut stage = LineStage::new(Broken, Format::Text);
        stage.emit(Utterance::new("dog", "woof", 1));
        stage.emit(Utterance::new("dog", "woof", 1));
        assert!(matches!(stage.finish(), Err(ParrotError::Io(_))));
    }

    #[test]
    fn format_parse_and_strings_round_trip() {
        assert_eq!(Format::try_from("json").unwrap().as_str(), "json");
        assert_eq!(Format::try_from("text").unwrap(), Format::Text);
        assert!(Format::try_from("yaml").is_err());
        assert_eq!(allowed_format_names(), vec!["text", "json"]);
    }
}
