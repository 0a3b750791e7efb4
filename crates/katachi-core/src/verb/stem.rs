//! Stem derivation for the regular verb classes.

use crate::error::MorphologyError;
use crate::types::{ConjugationResult, VerbEntry};
use crate::unicode::split_last;

use super::rows::{classify_row, Grade, Row};

/// A surface/reading pair that is always trimmed and extended together, so
/// the two stay aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stem {
    pub surface: String,
    pub reading: String,
}

impl Stem {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
        }
    }

    /// Append the same kana to surface and reading.
    pub fn join(&self, suffix: &str) -> Stem {
        Stem {
            surface: format!("{}{suffix}", self.surface),
            reading: format!("{}{suffix}", self.reading),
        }
    }

    /// Remove `suffix` from both, or `None` if either does not end with it.
    pub fn strip_suffix(&self, suffix: &str) -> Option<Stem> {
        let surface = self.surface.strip_suffix(suffix)?;
        let reading = self.reading.strip_suffix(suffix)?;
        Some(Stem::new(surface, reading))
    }

    /// True when either side is empty.
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty() || self.reading.is_empty()
    }

    pub fn into_result(self) -> ConjugationResult {
        ConjugationResult::new(self.surface, self.reading)
    }
}

/// Ichidan stem: the dictionary form without its trailing る. The stem
/// itself must be non-empty.
pub fn ichidan_stem(entry: &VerbEntry) -> Result<Stem, MorphologyError> {
    let stem = Stem::new(entry.surface.as_str(), entry.reading.as_str())
        .strip_suffix("る")
        .ok_or_else(|| {
            MorphologyError::malformed(&entry.surface, &entry.reading, "ichidan verb must end in る")
        })?;
    if stem.is_empty() {
        return Err(MorphologyError::malformed(
            &entry.surface,
            &entry.reading,
            "ichidan verb has no stem before る",
        ));
    }
    Ok(stem)
}

/// A godan verb split into its invariant base and the row of its final kana.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GodanVerb {
    /// Everything before the final kana, e.g. `書` / `か` for 書く.
    pub base: Stem,
    pub row: Row,
}

impl GodanVerb {
    pub fn new(entry: &VerbEntry) -> Result<Self, MorphologyError> {
        let row = classify_row(&entry.reading)?;
        let (reading_base, ending) = split_last(&entry.reading)
            .ok_or_else(|| MorphologyError::malformed(&entry.surface, &entry.reading, "empty reading"))?;
        let surface_base = match split_last(&entry.surface) {
            Some((base, last)) if last == ending => base,
            _ => {
                return Err(MorphologyError::malformed(
                    &entry.surface,
                    &entry.reading,
                    format!("godan surface must end in the reading's final kana {ending}"),
                ))
            }
        };
        let base = Stem::new(surface_base, reading_base);
        // No godan verb is a bare row kana.
        if base.is_empty() {
            return Err(MorphologyError::malformed(
                &entry.surface,
                &entry.reading,
                "godan verb has nothing before its final kana",
            ));
        }
        Ok(GodanVerb { base, row })
    }

    /// Base plus the row's kana at `grade` (書 + き).
    pub fn stem(&self, grade: Grade) -> Stem {
        let mut buf = [0u8; 4];
        self.base.join(self.row.stem_kana(grade).encode_utf8(&mut buf))
    }
}
