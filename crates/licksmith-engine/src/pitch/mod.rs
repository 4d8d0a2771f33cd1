//! Pitch model: spelled notes, pitch-class arithmetic and transposition.
//!
//! Notes are written `<PitchClassName><Octave>` (e.g. `"Bb4"`). Seventeen
//! spellings cover the twelve pitch classes; the canonical spelling table
//! spans octaves 3 through 6 and prefers naturals and flats.

mod note;
mod spelling;
mod transpose;

#[cfg(test)]
mod tests;

pub use note::{note_to_pitch, parse_notes, Note};
pub use spelling::{
    canonical_spelling, is_canonical_octave, PitchName, FLAT_NAMES, MAX_CANONICAL_OCTAVE,
    MIN_CANONICAL_OCTAVE, SHARP_NAMES,
};
pub use transpose::{adjust_right_cell, join_octave_shift, transpose_note, transpose_notes};
