//! Mapping a requested tonic to the key material is generated in.

use crate::key::Key;
use crate::phrase::{ChordColor, PhraseType};
use crate::pitch::PitchName;

/// Where and how a phrase is transposed after assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPlan {
    /// Key used to select and spell material.
    pub generation_key: Key,
    /// Semitones applied to the assembled phrase.
    pub semitones: i32,
    /// Key whose spelling rules the transposed notes follow.
    pub spelling_key: Key,
}

/// Chord roots a 7sus4 line in a generation key can be played over:
/// `(generation key, [minor, dominant, half-diminished, altered])`.
const SUS4_ROOTS: [(Key, [PitchName; 4]); 12] = {
    use PitchName::*;
    [
        (Key::C, [G, C, E, Fs]),
        (Key::G, [D, G, B, Db]),
        (Key::D, [A, D, Fs, Ab]),
        (Key::A, [E, A, Cs, Eb]),
        (Key::E, [B, E, Gs, Bb]),
        (Key::B, [Fs, B, Ds, F]),
        (Key::Fs, [Cs, Fs, As, C]),
        (Key::Db, [Ab, Db, F, G]),
        (Key::Ab, [Eb, Ab, C, D]),
        (Key::Eb, [Bb, Eb, G, A]),
        (Key::Bb, [F, Bb, D, E]),
        (Key::F, [C, F, A, B]),
    ]
};

fn color_column(color: ChordColor) -> usize {
    match color {
        ChordColor::Minor => 0,
        ChordColor::Dominant => 1,
        ChordColor::HalfDim => 2,
        ChordColor::Altered => 3,
    }
}

/// Generation key whose 7sus4 material sounds over `root` with `color`.
pub fn sus4_generation_key(root: Key, color: ChordColor) -> Key {
    let column = color_column(color);
    SUS4_ROOTS
        .iter()
        .find(|(_, roots)| roots[column].pitch_class() == root.semitones())
        .map(|(key, _)| *key)
        .unwrap_or(root)
}

/// Chord root shown for a 7sus4 line generated in `generation_key`.
pub fn sus4_display_root(generation_key: Key, color: ChordColor) -> PitchName {
    let column = color_column(color);
    SUS4_ROOTS
        .iter()
        .find(|(key, _)| *key == generation_key)
        .map(|(_, roots)| roots[column])
        .unwrap_or_else(|| PitchName::canonical(generation_key.semitones()))
}

/// All four chord roots for a 7sus4 generation key, in colour order.
pub fn sus4_roots(generation_key: Key) -> [PitchName; 4] {
    ChordColor::ALL.map(|c| sus4_display_root(generation_key, c))
}

/// Key material is generated in for `phrase_type` at `tonic`.
pub fn generation_key(phrase_type: PhraseType, tonic: Key) -> Key {
    match phrase_type {
        PhraseType::MajorTwoFive(_) | PhraseType::SideStepTwoFive => tonic.transpose(7),
        PhraseType::MinorTwoFive(_) => tonic.transpose(3),
        PhraseType::Sus4 {
            color: Some(color), ..
        } => sus4_generation_key(tonic, color),
        _ => tonic,
    }
}

/// Full transposition plan for `phrase_type` at `tonic`.
///
/// Turnarounds are built in the tonic and then lifted a fifth; everything
/// else moves by the generation key's offset from C.
pub fn plan(phrase_type: PhraseType, tonic: Key) -> KeyPlan {
    let generation_key = generation_key(phrase_type, tonic);
    match phrase_type {
        PhraseType::Turnaround => KeyPlan {
            generation_key,
            semitones: (tonic.semitones() as i32 + 7).rem_euclid(12),
            spelling_key: tonic,
        },
        _ => KeyPlan {
            generation_key,
            semitones: generation_key.semitones() as i32,
            spelling_key: generation_key,
        },
    }
}
