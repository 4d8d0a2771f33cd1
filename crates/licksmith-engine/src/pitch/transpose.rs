//! Transposition and octave splicing.

use super::note::Note;
use super::spelling::{PitchName, FLAT_NAMES, SHARP_NAMES};
use crate::error::LickResult;
use crate::key::Key;

/// Transpose `note` by `semitones`, spelling the result for `key`.
///
/// Octave overflow carries with floor division, so transposing down past C
/// lowers the octave. Flat-preferring keys use flat names; sharp-context
/// keys force the five flat names to sharps.
pub fn transpose_note(note: Note, semitones: i32, key: Key) -> Note {
    let shifted = note.pitch_class() as i32 + semitones;
    let pitch_class = shifted.rem_euclid(12) as usize;
    let octave = note.octave() + shifted.div_euclid(12);

    let table = if key.prefers_flats() {
        &FLAT_NAMES
    } else {
        &SHARP_NAMES
    };
    let mut name = table[pitch_class];
    if key.is_sharp_context() {
        name = sharpen(name);
    }
    Note::new(name, octave)
}

fn sharpen(name: PitchName) -> PitchName {
    match name {
        PitchName::Db => PitchName::Cs,
        PitchName::Eb => PitchName::Ds,
        PitchName::Gb => PitchName::Fs,
        PitchName::Ab => PitchName::Gs,
        PitchName::Bb => PitchName::As,
        other => other,
    }
}

/// Transpose every note of a phrase.
pub fn transpose_notes(notes: &[Note], semitones: i32, key: Key) -> Vec<Note> {
    notes
        .iter()
        .map(|&n| transpose_note(n, semitones, key))
        .collect()
}

/// Octave shift that places `right` after `left` with the smallest leap.
///
/// Same pitch class at the join: match octaves. Otherwise an upward step of
/// more than a tritone is taken as wrapping into the next octave.
pub fn join_octave_shift(left_end: Note, right_start: Note) -> i32 {
    if left_end.is_class_equal(&right_start) {
        return left_end.octave() - right_start.octave();
    }
    let diff = (right_start.pitch_class() as i32 - left_end.pitch_class() as i32).rem_euclid(12);
    if diff > 6 {
        left_end.octave() + 1 - right_start.octave()
    } else {
        left_end.octave() - right_start.octave()
    }
}

/// Shift `right` by octaves so it joins smoothly onto the end of `left`.
///
/// Every shifted note is re-spelled canonically. Fails with
/// [`crate::LickError::Unspellable`] when a note leaves octaves 3..=6.
pub fn adjust_right_cell(left: &[Note], right: &[Note]) -> LickResult<Vec<Note>> {
    let (Some(&left_end), Some(&right_start)) = (left.last(), right.first()) else {
        return Ok(right.to_vec());
    };
    let shift = join_octave_shift(left_end, right_start);
    right
        .iter()
        .map(|n| Note::canonical(n.pitch_class(), n.octave() + shift))
        .collect()
}
