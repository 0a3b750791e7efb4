//! Practice lexicon loaded from TOML, following the same OnceLock pattern as
//! the rest of the crate's embedded data.
//!
//! - `parse_lexicon_toml(s)` parses and validates a lexicon
//! - `init_custom(toml_content)` swaps the default before first use
//! - `default_lexicon()` returns `&'static Lexicon` (lazy-init singleton)
//! - Default entries are embedded via `include_str!("default_lexicon.toml")`
//!
//! Validation runs every entry through every form kind, so malformed data
//! fails at load time instead of in the middle of a practice session.

#[cfg(test)]
mod tests;

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjective::conjugate_adjective_all;
use crate::error::MorphologyError;
use crate::types::{AdjectiveEntry, ConjugationResult, VerbEntry};
use crate::unicode::is_hiragana_reading;
use crate::verb::conjugate_verb_all;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set a custom lexicon before the first `default_lexicon()` call.
pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
    parse_lexicon_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| LexiconError::AlreadyInitialized)
}

/// Get or initialize the global lexicon singleton.
pub fn default_lexicon() -> &'static Lexicon {
    static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_LEXICON_TOML);
        parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid")
    })
}

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("lexicon has no verbs or adjectives")]
    Empty,
    #[error("empty surface for reading {0}")]
    EmptySurface(String),
    #[error("reading of {surface} is not hiragana: {reading}")]
    InvalidReading { surface: String, reading: String },
    #[error("entry {surface}: {source}")]
    Entry {
        surface: String,
        source: MorphologyError,
    },
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub verbs: Vec<VerbEntry>,
    #[serde(default)]
    pub adjectives: Vec<AdjectiveEntry>,
}

impl Lexicon {
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        parse_lexicon_toml(&content)
    }

    /// Find a verb by surface or reading.
    pub fn find_verb(&self, word: &str) -> Option<&VerbEntry> {
        self.verbs
            .iter()
            .find(|e| e.surface == word || e.reading == word)
    }

    /// Find an adjective by surface or reading.
    pub fn find_adjective(&self, word: &str) -> Option<&AdjectiveEntry> {
        self.adjectives
            .iter()
            .find(|e| e.surface == word || e.reading == word)
    }

    pub fn len(&self) -> usize {
        self.verbs.len() + self.adjectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
    let lexicon: Lexicon =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    if lexicon.is_empty() {
        return Err(LexiconError::Empty);
    }

    for verb in &lexicon.verbs {
        check_text(&verb.surface, &verb.reading)?;
        for (_, result) in conjugate_verb_all(verb) {
            check_result(&verb.surface, result)?;
        }
    }
    for adj in &lexicon.adjectives {
        check_text(&adj.surface, &adj.reading)?;
        for (_, result) in conjugate_adjective_all(adj) {
            check_result(&adj.surface, result)?;
        }
    }

    debug!(
        verbs = lexicon.verbs.len(),
        adjectives = lexicon.adjectives.len(),
        "lexicon parsed"
    );
    Ok(lexicon)
}

fn check_text(surface: &str, reading: &str) -> Result<(), LexiconError> {
    if surface.is_empty() {
        return Err(LexiconError::EmptySurface(reading.to_string()));
    }
    if !is_hiragana_reading(reading) {
        return Err(LexiconError::InvalidReading {
            surface: surface.to_string(),
            reading: reading.to_string(),
        });
    }
    Ok(())
}

/// Lexical gaps are part of the language, not bad data.
fn check_result(
    surface: &str,
    result: Result<ConjugationResult, MorphologyError>,
) -> Result<(), LexiconError> {
    match result {
        Ok(_) | Err(MorphologyError::UnsupportedForm { .. }) => Ok(()),
        Err(source) => Err(LexiconError::Entry {
            surface: surface.to_string(),
            source,
        }),
    }
}
