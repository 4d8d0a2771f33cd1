//! Spelled notes and note-token parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::spelling::{canonical_spelling, is_canonical_octave, PitchName};
use crate::error::{LickError, LickResult};

/// Note token grammar: letter, optional `#` or `b`, single-digit octave.
const NOTE_PATTERN: &str = r"^([A-G][#b]?)([0-9])$";

static NOTE_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_regex() -> &'static Regex {
    NOTE_REGEX.get_or_init(|| Regex::new(NOTE_PATTERN).expect("invalid regex pattern"))
}

/// A spelled pitch: pitch-class name plus octave.
///
/// Equality compares spelling and octave, so `F#4 != Gb4`. Use
/// [`Note::is_pitch_equal`] or [`Note::is_class_equal`] for enharmonic
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    name: PitchName,
    octave: i32,
}

impl Note {
    /// Create a note from a spelling and octave.
    pub const fn new(name: PitchName, octave: i32) -> Self {
        Self { name, octave }
    }

    /// Create a note with the canonical spelling for an absolute pitch.
    ///
    /// Fails if the octave lies outside the canonical table (3..=6).
    pub fn canonical(pitch_class: u8, octave: i32) -> LickResult<Self> {
        Ok(Self::new(canonical_spelling(pitch_class, octave)?, octave))
    }

    /// Parse a note token such as `"Bb4"` or `"F#3"`.
    pub fn parse(token: &str) -> LickResult<Self> {
        let caps = note_regex()
            .captures(token)
            .ok_or_else(|| LickError::parse(token, "expected <Letter>[#|b]<Octave>"))?;
        let name: PitchName = caps[1]
            .parse()
            .map_err(|_| LickError::parse(token, "spelling not in the pitch table"))?;
        let octave: i32 = caps[2]
            .parse()
            .map_err(|_| LickError::parse(token, "octave is not a digit"))?;
        Ok(Self::new(name, octave))
    }

    pub fn name(&self) -> PitchName {
        self.name
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn pitch_class(&self) -> u8 {
        self.name.pitch_class()
    }

    /// Absolute pitch as `pitch_class + 12 * octave`.
    pub fn absolute_pitch(&self) -> i32 {
        self.pitch_class() as i32 + 12 * self.octave
    }

    /// Same pitch class, any octave.
    pub fn is_class_equal(&self, other: &Note) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    /// Same absolute pitch, any spelling.
    pub fn is_pitch_equal(&self, other: &Note) -> bool {
        self.absolute_pitch() == other.absolute_pitch()
    }

    /// Returns true if this spelling and octave appear in the canonical table.
    pub fn is_canonical(&self) -> bool {
        is_canonical_octave(self.octave)
    }
}

/// Parse a note token into `(pitch_class, octave)`.
pub fn note_to_pitch(token: &str) -> LickResult<(u8, i32)> {
    let note = Note::parse(token)?;
    Ok((note.pitch_class(), note.octave()))
}

/// Parse a whitespace-free list of note tokens.
pub fn parse_notes<S: AsRef<str>>(tokens: &[S]) -> LickResult<Vec<Note>> {
    tokens.iter().map(|t| Note::parse(t.as_ref())).collect()
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

impl FromStr for Note {
    type Err = LickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = LickError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Note::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
