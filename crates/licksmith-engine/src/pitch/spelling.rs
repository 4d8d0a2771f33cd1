//! Pitch-class spellings and the canonical spelling table.

use std::fmt;
use std::str::FromStr;

use crate::error::{LickError, LickResult};

/// Lowest octave present in the canonical spelling table.
pub const MIN_CANONICAL_OCTAVE: i32 = 3;

/// Highest octave present in the canonical spelling table.
pub const MAX_CANONICAL_OCTAVE: i32 = 6;

/// One of the 17 spellings used for the 12 pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchName {
    C,
    Db,
    Cs,
    D,
    Eb,
    Ds,
    E,
    F,
    Gb,
    Fs,
    G,
    Ab,
    Gs,
    A,
    Bb,
    As,
    B,
}

/// Spellings indexed by pitch class, flats for black keys.
pub const FLAT_NAMES: [PitchName; 12] = [
    PitchName::C,
    PitchName::Db,
    PitchName::D,
    PitchName::Eb,
    PitchName::E,
    PitchName::F,
    PitchName::Gb,
    PitchName::G,
    PitchName::Ab,
    PitchName::A,
    PitchName::Bb,
    PitchName::B,
];

/// Spellings indexed by pitch class, sharps for black keys.
pub const SHARP_NAMES: [PitchName; 12] = [
    PitchName::C,
    PitchName::Cs,
    PitchName::D,
    PitchName::Ds,
    PitchName::E,
    PitchName::F,
    PitchName::Fs,
    PitchName::G,
    PitchName::Gs,
    PitchName::A,
    PitchName::As,
    PitchName::B,
];

impl PitchName {
    /// All spellings in canonical table order (flat before sharp).
    pub const ALL: [PitchName; 17] = [
        PitchName::C,
        PitchName::Db,
        PitchName::Cs,
        PitchName::D,
        PitchName::Eb,
        PitchName::Ds,
        PitchName::E,
        PitchName::F,
        PitchName::Gb,
        PitchName::Fs,
        PitchName::G,
        PitchName::Ab,
        PitchName::Gs,
        PitchName::A,
        PitchName::Bb,
        PitchName::As,
        PitchName::B,
    ];

    /// Pitch class 0-11 with C = 0.
    pub fn pitch_class(self) -> u8 {
        match self {
            PitchName::C => 0,
            PitchName::Db | PitchName::Cs => 1,
            PitchName::D => 2,
            PitchName::Eb | PitchName::Ds => 3,
            PitchName::E => 4,
            PitchName::F => 5,
            PitchName::Gb | PitchName::Fs => 6,
            PitchName::G => 7,
            PitchName::Ab | PitchName::Gs => 8,
            PitchName::A => 9,
            PitchName::Bb | PitchName::As => 10,
            PitchName::B => 11,
        }
    }

    /// Spelling as written in note tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchName::C => "C",
            PitchName::Db => "Db",
            PitchName::Cs => "C#",
            PitchName::D => "D",
            PitchName::Eb => "Eb",
            PitchName::Ds => "D#",
            PitchName::E => "E",
            PitchName::F => "F",
            PitchName::Gb => "Gb",
            PitchName::Fs => "F#",
            PitchName::G => "G",
            PitchName::Ab => "Ab",
            PitchName::Gs => "G#",
            PitchName::A => "A",
            PitchName::Bb => "Bb",
            PitchName::As => "A#",
            PitchName::B => "B",
        }
    }

    /// Natural letter of the spelling, upper case.
    pub fn letter(self) -> char {
        // as_str always starts with an ASCII letter
        self.as_str().as_bytes()[0] as char
    }

    /// Returns true for the five flat spellings.
    pub fn is_flat(self) -> bool {
        matches!(
            self,
            PitchName::Db | PitchName::Eb | PitchName::Gb | PitchName::Ab | PitchName::Bb
        )
    }

    /// Returns true for the five sharp spellings.
    pub fn is_sharp(self) -> bool {
        matches!(
            self,
            PitchName::Cs | PitchName::Ds | PitchName::Fs | PitchName::Gs | PitchName::As
        )
    }

    /// Canonical spelling for a pitch class: the first table entry, which is
    /// the natural or the flat.
    pub fn canonical(pitch_class: u8) -> PitchName {
        FLAT_NAMES[(pitch_class % 12) as usize]
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PitchName {
    type Err = LickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| LickError::parse(s, "unrecognised pitch spelling"))
    }
}

/// Returns true if `octave` is covered by the canonical spelling table.
pub fn is_canonical_octave(octave: i32) -> bool {
    (MIN_CANONICAL_OCTAVE..=MAX_CANONICAL_OCTAVE).contains(&octave)
}

/// Look up the canonical spelling for an absolute `(pitch_class, octave)` pair.
///
/// Fails with [`LickError::Unspellable`] outside octaves 3..=6.
pub fn canonical_spelling(pitch_class: u8, octave: i32) -> LickResult<PitchName> {
    if !is_canonical_octave(octave) {
        return Err(LickError::Unspellable {
            pitch_class: pitch_class % 12,
            octave,
        });
    }
    Ok(PitchName::canonical(pitch_class))
}
