/// Data-integrity failures raised by the conjugation engine.
///
/// Lexical entries are curated data, so each variant points at a bug in that
/// data (or at a lexical gap) rather than at user input. No variant carries a
/// fallback surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphologyError {
    #[error("no godan row for reading {reading:?} (final kana {kana:?})")]
    UnknownRow { reading: String, kana: Option<char> },

    #[error("malformed entry {surface} ({reading}): {reason}")]
    MalformedEntry {
        surface: String,
        reading: String,
        reason: String,
    },

    #[error("unsupported form {kind} for {surface} ({reading})")]
    UnsupportedForm {
        surface: String,
        reading: String,
        kind: &'static str,
    },
}

impl MorphologyError {
    /// The entry is fine but the language has no such form (ある has no
    /// potential).
    pub fn is_lexical_gap(&self) -> bool {
        matches!(self, MorphologyError::UnsupportedForm { .. })
    }

    pub(crate) fn malformed(surface: &str, reading: &str, reason: impl Into<String>) -> Self {
        MorphologyError::MalformedEntry {
            surface: surface.to_string(),
            reading: reading.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(surface: &str, reading: &str, kind: &'static str) -> Self {
        MorphologyError::UnsupportedForm {
            surface: surface.to_string(),
            reading: reading.to_string(),
            kind,
        }
    }
}
