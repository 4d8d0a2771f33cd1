//! The twelve named keys and their semitone offsets from C.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LickError;

/// A tonal center.
///
/// The twelve display names map one-to-one onto the semitone values 0..12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    B,
    Fs,
    Db,
    Ab,
    Eb,
    Bb,
    F,
}

impl Key {
    /// Keys in table order (circle of fifths from C).
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::G,
        Key::D,
        Key::A,
        Key::E,
        Key::B,
        Key::Fs,
        Key::Db,
        Key::Ab,
        Key::Eb,
        Key::Bb,
        Key::F,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::G => "G",
            Key::D => "D",
            Key::A => "A",
            Key::E => "E",
            Key::B => "B",
            Key::Fs => "F#",
            Key::Db => "Db",
            Key::Ab => "Ab",
            Key::Eb => "Eb",
            Key::Bb => "Bb",
            Key::F => "F",
        }
    }

    /// Semitones above C.
    pub fn semitones(self) -> u8 {
        match self {
            Key::C => 0,
            Key::Db => 1,
            Key::D => 2,
            Key::Eb => 3,
            Key::E => 4,
            Key::F => 5,
            Key::Fs => 6,
            Key::G => 7,
            Key::Ab => 8,
            Key::A => 9,
            Key::Bb => 10,
            Key::B => 11,
        }
    }

    /// Inverse of [`Key::semitones`], taken modulo 12.
    pub fn from_semitones(semitones: i32) -> Key {
        match semitones.rem_euclid(12) {
            0 => Key::C,
            1 => Key::Db,
            2 => Key::D,
            3 => Key::Eb,
            4 => Key::E,
            5 => Key::F,
            6 => Key::Fs,
            7 => Key::G,
            8 => Key::Ab,
            9 => Key::A,
            10 => Key::Bb,
            _ => Key::B,
        }
    }

    /// The key `interval` semitones above this one.
    pub fn transpose(self, interval: i32) -> Key {
        Key::from_semitones(self.semitones() as i32 + interval)
    }

    /// Keys whose notes are spelled with flats.
    pub fn prefers_flats(self) -> bool {
        matches!(
            self,
            Key::Db | Key::Ab | Key::Eb | Key::Bb | Key::F | Key::C
        )
    }

    /// Keys where flat spellings are forced to their sharp equivalents.
    pub fn is_sharp_context(self) -> bool {
        matches!(
            self,
            Key::Fs | Key::B | Key::E | Key::A | Key::D | Key::G
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = LickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s.trim())
            .ok_or_else(|| LickError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for Key {
    type Error = LickError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_table_is_bijection() {
        let semitones: HashSet<u8> = Key::ALL.iter().map(|k| k.semitones()).collect();
        assert_eq!(semitones.len(), 12);
        for key in Key::ALL {
            assert_eq!(Key::from_semitones(key.semitones() as i32), key);
        }
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("F#".parse::<Key>().unwrap(), Key::Fs);
        assert_eq!("Bb".parse::<Key>().unwrap(), Key::Bb);
        assert!(matches!("Gb".parse::<Key>(), Err(LickError::UnknownKey(_))));
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(Key::C.transpose(7), Key::G);
        assert_eq!(Key::F.transpose(7), Key::C);
        assert_eq!(Key::A.transpose(3), Key::C);
        assert_eq!(Key::C.transpose(-7), Key::F);
    }

    #[test]
    fn test_spelling_preferences_are_disjoint() {
        for key in Key::ALL {
            assert!(!(key.prefers_flats() && key.is_sharp_context()), "{key}");
        }
    }
}
