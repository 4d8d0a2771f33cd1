//! Tests for note parsing, spelling and transposition.

use super::*;
use crate::error::LickError;
use crate::key::Key;

fn n(token: &str) -> Note {
    Note::parse(token).unwrap()
}

fn notes(tokens: &[&str]) -> Vec<Note> {
    parse_notes(tokens).unwrap()
}

#[test]
fn test_note_to_pitch() {
    assert_eq!(note_to_pitch("C4").unwrap(), (0, 4));
    assert_eq!(note_to_pitch("Bb4").unwrap(), (10, 4));
    assert_eq!(note_to_pitch("A#4").unwrap(), (10, 4));
    assert_eq!(note_to_pitch("F#3").unwrap(), (6, 3));
    assert_eq!(note_to_pitch("B6").unwrap(), (11, 6));
}

#[test]
fn test_note_to_pitch_rejects_bad_tokens() {
    for token in ["H4", "C", "Cb4", "E#4", "c4", "C10", "", "Bb 4"] {
        assert!(
            matches!(note_to_pitch(token), Err(LickError::Parse { .. })),
            "accepted {token:?}"
        );
    }
}

#[test]
fn test_display_roundtrip() {
    for name in PitchName::ALL {
        for octave in MIN_CANONICAL_OCTAVE..=MAX_CANONICAL_OCTAVE {
            let note = Note::new(name, octave);
            assert_eq!(n(&note.to_string()), note);
        }
    }
}

#[test]
fn test_equality_kinds() {
    assert_ne!(n("F#4"), n("Gb4"));
    assert!(n("F#4").is_pitch_equal(&n("Gb4")));
    assert!(n("F#4").is_class_equal(&n("Gb5")));
    assert!(!n("F#4").is_pitch_equal(&n("Gb5")));
    assert_eq!(n("C4").absolute_pitch(), 48);
    assert_eq!(n("E6").absolute_pitch(), 76);
}

#[test]
fn test_canonical_spelling_bounds() {
    assert_eq!(canonical_spelling(1, 3).unwrap(), PitchName::Db);
    assert_eq!(canonical_spelling(6, 6).unwrap(), PitchName::Gb);
    assert!(matches!(
        canonical_spelling(0, 7),
        Err(LickError::Unspellable {
            pitch_class: 0,
            octave: 7
        })
    ));
    assert!(canonical_spelling(11, 2).is_err());
}

#[test]
fn test_transpose_into_g() {
    assert_eq!(transpose_note(n("C4"), 7, Key::G), n("G4"));
}

#[test]
fn test_transpose_carries_octave_into_flat_key() {
    let out = transpose_note(n("B4"), 1, Key::Db);
    assert_eq!(out, n("C5"));
}

#[test]
fn test_transpose_down_borrows_octave() {
    assert_eq!(transpose_note(n("C4"), -1, Key::F), n("B3"));
    assert_eq!(transpose_note(n("D4"), -5, Key::C), n("A3"));
    assert_eq!(transpose_note(n("E5"), -17, Key::C), n("B3"));
}

#[test]
fn test_transpose_spelling_follows_key() {
    assert_eq!(transpose_note(n("C4"), 1, Key::Ab), n("Db4"));
    assert_eq!(transpose_note(n("C4"), 1, Key::A), n("C#4"));
    assert_eq!(transpose_note(n("C4"), 10, Key::Bb), n("Bb4"));
    assert_eq!(transpose_note(n("C4"), 10, Key::E), n("A#4"));
    assert_eq!(transpose_note(n("Gb4"), 0, Key::Fs), n("F#4"));
    assert_eq!(transpose_note(n("F#4"), 0, Key::Eb), n("Gb4"));
}

#[test]
fn test_transpose_never_flat_in_sharp_context() {
    for key in Key::ALL.into_iter().filter(|k| k.is_sharp_context()) {
        for pc in 0..12 {
            let note = transpose_note(n("C4"), pc, key);
            assert!(!note.name().is_flat(), "{note} in {key}");
        }
    }
}

#[test]
fn test_transposed_notes_reparse() {
    for key in Key::ALL {
        for semitones in -12..=24 {
            let start = n("E4");
            let out = transpose_note(start, semitones, key);
            let expected_abs = start.absolute_pitch() + semitones;
            let (pc, oct) = note_to_pitch(&out.to_string()).unwrap();
            assert_eq!(pc as i32 + 12 * oct, expected_abs, "{out} in {key}");
        }
    }
}

#[test]
fn test_join_shift_same_class() {
    assert_eq!(join_octave_shift(n("A4"), n("A3")), 1);
    assert_eq!(join_octave_shift(n("Bb4"), n("A#4")), 0);
}

#[test]
fn test_join_shift_wraps_large_interval() {
    // G is 10 semitones above A: treated as wrapping into the next octave
    assert_eq!(join_octave_shift(n("A4"), n("G4")), 1);
    assert_eq!(join_octave_shift(n("A4"), n("Bb4")), 0);
    assert_eq!(join_octave_shift(n("C5"), n("D3")), 2);
}

#[test]
fn test_adjust_right_cell_matches_join_octave() {
    let left = notes(&["Bb4", "D4", "F4", "F#4", "A4"]);
    let right = notes(&["A3", "G3", "F#3", "G3", "C4"]);
    let adjusted = adjust_right_cell(&left, &right).unwrap();
    assert_eq!(adjusted, notes(&["A4", "G4", "Gb4", "G4", "C5"]));
    assert!(adjusted[0].is_pitch_equal(left.last().unwrap()));
}

#[test]
fn test_adjust_right_cell_respells_canonically() {
    let left = notes(&["C4", "D4", "E4", "G4", "G#4"]);
    let right = notes(&["G#4", "F4", "E4", "D4", "C4"]);
    let adjusted = adjust_right_cell(&left, &right).unwrap();
    assert_eq!(adjusted[0], n("Ab4"));
    assert!(adjusted.iter().all(|note| !note.name().is_sharp()));
}

#[test]
fn test_adjust_right_cell_out_of_table_fails() {
    let left = notes(&["C6", "D6", "E6", "G6", "A6"]);
    let right = notes(&["G3", "A3", "Bb3", "C4", "D4"]);
    // A6 -> G wraps upward: a four-octave shift leaves the table
    assert!(matches!(
        adjust_right_cell(&left, &right),
        Err(LickError::Unspellable { .. })
    ));
}

#[test]
fn test_adjust_right_cell_empty_sides() {
    let right = notes(&["C4", "D4"]);
    assert_eq!(adjust_right_cell(&[], &right).unwrap(), right);
    assert!(adjust_right_cell(&right, &[]).unwrap().is_empty());
}
