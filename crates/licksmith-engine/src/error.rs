//! Error types for phrase generation.

use thiserror::Error;

use crate::phrase::PhraseType;

/// Error type for the phrase engine.
///
/// Parse and spelling failures indicate corrupt input or cell data and are
/// never retried. Construction failures mean the bounded chaining retry was
/// exhausted; the caller may try again with other parameters.
#[derive(Debug, Error)]
pub enum LickError {
    /// A note token does not follow the `<Letter>[#|b]<Octave>` grammar.
    #[error("Invalid note '{token}': {reason}")]
    Parse { token: String, reason: String },

    /// A computed pitch has no canonical spelling (octave outside 3..=6).
    #[error("No canonical spelling for pitch class {pitch_class} in octave {octave}")]
    Unspellable { pitch_class: u8, octave: i32 },

    /// The bounded chaining retry ran out of attempts.
    #[error("Failed to build a {phrase_type} phrase after {attempts} attempts")]
    PhraseConstruction {
        phrase_type: PhraseType,
        attempts: u32,
    },

    /// Key name not present in the key table.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Phrase type identifier not recognised.
    #[error("Unknown phrase type: {0}")]
    UnknownPhraseType(String),

    /// A cycler was built over an empty collection.
    #[error("Cannot cycle over an empty collection: {0}")]
    EmptyCycler(String),

    /// Generator configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(String),
}

impl LickError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            LickError::Parse { .. } => "LICK_001",
            LickError::Unspellable { .. } => "LICK_002",
            LickError::PhraseConstruction { .. } => "LICK_003",
            LickError::UnknownKey(_) => "LICK_004",
            LickError::UnknownPhraseType(_) => "LICK_005",
            LickError::EmptyCycler(_) => "LICK_006",
            LickError::Config(_) => "LICK_007",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            LickError::Parse { .. } | LickError::Unspellable { .. } => "pitch",
            LickError::PhraseConstruction { .. } | LickError::EmptyCycler(_) => "chain",
            LickError::UnknownKey(_) | LickError::UnknownPhraseType(_) => "request",
            LickError::Config(_) => "config",
        }
    }

    pub(crate) fn parse(token: &str, reason: impl Into<String>) -> Self {
        LickError::Parse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations.
pub type LickResult<T> = Result<T, LickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            LickError::parse("H4", "bad letter"),
            LickError::Unspellable {
                pitch_class: 0,
                octave: 7,
            },
            LickError::PhraseConstruction {
                phrase_type: PhraseType::Turnaround,
                attempts: 100,
            },
            LickError::UnknownKey("H".into()),
            LickError::UnknownPhraseType("bebop".into()),
            LickError::EmptyCycler("keys".into()),
            LickError::Config("missing".into()),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_construction_error_message() {
        let err = LickError::PhraseConstruction {
            phrase_type: PhraseType::RhythmChanges56,
            attempts: 100,
        };
        assert_eq!(
            err.to_string(),
            "Failed to build a rhythm_changes_56 phrase after 100 attempts"
        );
        assert_eq!(err.category(), "chain");
    }
}
