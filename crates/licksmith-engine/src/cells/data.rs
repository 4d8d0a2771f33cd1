//! Hand-curated base cell tables, written in C.
//!
//! Derived sets (fifth/step transpositions) are built from these in
//! [`super::CellLibrary::load`].

pub(super) type CellTokens = [&'static str; 5];

/// Dominant (7sus4) vocabulary.
pub(super) const DOMINANT: &[CellTokens] = &[
    ["Bb4", "D4", "F4", "F#4", "A4"],
    ["D4", "F4", "E4", "D4", "C4"],
    ["A4", "G4", "F#4", "G4", "C5"],
    ["E4", "G4", "Bb4", "D5", "C5"],
    ["C5", "B4", "Bb4", "A4", "G4"],
    ["C4", "D4", "E4", "G4", "Bb4"],
    ["Bb4", "A4", "G4", "F4", "E4"],
    ["Bb3", "C4", "D4", "F4", "E4"],
    ["G4", "D4", "F4", "D4", "E4"],
    ["D4", "F4", "D4", "Eb4", "E4"],
    ["E4", "D4", "C4", "B3", "Bb3"],
    ["E5", "F5", "D5", "Bb4", "A4"],
    ["A4", "Bb4", "F#4", "A4", "G4"],
    ["Bb4", "F4", "F#4", "A4", "G4"],
    ["F#4", "A4", "G#4", "F#4", "G4"],
    ["D4", "F4", "F#4", "A4", "G4"],
    ["G4", "A4", "Bb4", "C5", "D5"],
    ["G4", "F4", "E4", "D4", "C4"],
    ["G4", "Bb4", "D5", "F5", "E5"],
    ["D5", "Ab4", "A4", "C5", "Bb4"],
    ["G4", "F4", "E4", "F4", "D4"],
    ["D5", "Bb4", "A4", "G4", "C5"],
    ["D5", "Bb4", "G4", "F4", "E4"],
    ["Bb3", "C4", "D4", "E4", "F4"],
    ["C5", "B4", "Bb4", "D4", "F4"],
    ["F4", "F#4", "A4", "Ab4", "G4"],
    ["F4", "D4", "Bb3", "G3", "E4"],
    ["F4", "D4", "C4", "Bb3", "A3"],
    ["Bb3", "C4", "D4", "F4", "F#4"],
    ["Bb4", "A4", "G4", "F4", "F#4"],
    ["F#4", "A4", "G4", "F4", "E4"],
    ["F#4", "A4", "G4", "E4", "C4"],
];

/// Altered-dominant approaches appended to [`DOMINANT`] for ii-V lines.
pub(super) const DOMINANT_EXTENSIONS: &[CellTokens] = &[
    ["D5", "Bb4", "A4", "G4", "F#4"],
    ["G4", "A4", "Bb4", "C5", "Db5"],
    ["G4", "A4", "Bb4", "C5", "Eb5"],
    ["C5", "Bb4", "A4", "Bb4", "Eb5"],
    ["G4", "F4", "E4", "F4", "Db4"],
    ["D5", "Bb4", "A4", "G4", "Ab4"],
    ["C5", "B4", "Bb4", "A4", "Ab4"],
    ["Bb3", "D4", "F4", "A4", "Ab4"],
    ["Bb4", "D4", "F4", "A4", "Ab4"],
    ["D4", "F4", "F#4", "A4", "Ab4"],
];

pub(super) const MAJOR: &[CellTokens] = &[
    ["G4", "A4", "B4", "D5", "C5"],
    ["E4", "G4", "B4", "D5", "C5"],
    ["E4", "G4", "B4", "D5", "B4"],
    ["B4", "C5", "D5", "Db5", "C5"],
    ["E5", "Bb4", "B4", "D5", "C5"],
    ["C5", "B4", "A4", "Ab4", "G4"],
    ["C4", "D4", "E4", "G4", "B4"],
    ["C5", "E4", "G4", "B4", "A4"],
    ["B4", "A4", "G4", "F4", "E4"],
    ["D4", "C4", "B3", "C4", "E4"],
    ["E4", "G4", "A4", "B4", "D5"],
    ["D5", "C5", "B4", "A4", "G4"],
    ["E4", "G4", "B4", "A4", "G4"],
    ["B4", "A4", "G#4", "F#4", "G4"],
    ["G4", "F4", "E4", "D4", "B3"],
    ["G4", "E4", "D4", "C4", "B3"],
    ["G4", "E4", "B3", "G3", "A3"],
    ["B3", "C4", "E4", "G4", "B4"],
    ["D5", "C5", "E4", "G4", "B4"],
    ["E5", "D5", "Bb4", "B4", "D5"],
    ["B4", "A4", "G4", "E4", "D4"],
    ["D5", "Db5", "C5", "E5", "B4"],
    ["C5", "E4", "G4", "B4", "A4"],
    ["A4", "G4", "G#4", "F#4", "G4"],
    ["A4", "G#4", "G4", "F4", "E4"],
    ["A4", "G4", "C4", "F4", "E4"],
    ["G4", "B3", "C4", "F4", "E4"],
    ["G4", "F4", "D4", "Eb4", "E4"],
    ["B4", "C5", "G#4", "B4", "A4"],
    ["E4", "C4", "B3", "A3", "D4"],
    ["C5", "E4", "Eb4", "E4", "B4"],
    ["A4", "C5", "B4", "A4", "G4"],
    ["C5", "G4", "Ab4", "B4", "A4"],
];

/// Dominant-to-tonic landings in C.
pub(super) const MAJOR_RESOLUTION: &[CellTokens] = &[
    ["C5", "Bb4", "Eb5", "Db5", "C5"],
    ["C5", "Ab4", "E4", "C4", "G4"],
    ["E4", "Db4", "C4", "Bb3", "A3"],
    ["E4", "Db5", "C5", "Bb4", "A4"],
    ["E4", "G4", "Bb4", "Db5", "C5"],
    ["E4", "G4", "Db4", "B3", "C4"],
    ["G4", "E4", "C4", "Bb3", "A3"],
    ["G4", "Ab4", "E4", "Db4", "C4"],
    ["Bb4", "Ab4", "E4", "C4", "G4"],
    ["Bb4", "Ab4", "E4", "Db4", "C4"],
    ["Db4", "Eb4", "C4", "Bb3", "A3"],
    ["Eb4", "Db4", "C4", "Bb3", "A3"],
    ["Eb4", "Db4", "Ab3", "Bb3", "C4"],
    ["Eb4", "Db4", "Ab3", "E3", "C4"],
    ["F#4", "E4", "Eb4", "Db4", "C4"],
    ["F#4", "A4", "G4", "E4", "C4"],
    ["A4", "G4", "Gb4", "G4", "C5"],
    ["A4", "Ab4", "E4", "C4", "G4"],
    ["A4", "G4", "Eb4", "E4", "G4"],
    ["A4", "Ab4", "E4", "Db4", "C4"],
    ["Ab4", "E4", "Eb4", "Db4", "C4"],
    ["Ab4", "E5", "Eb5", "Db5", "C5"],
];

/// Half-diminished ii in A minor.
pub(super) const MINOR_B: &[CellTokens] = &[
    ["D4", "C4", "B3", "A3", "G#3"],
    ["B3", "D4", "F4", "A4", "G#4"],
    ["A4", "F4", "D4", "B3", "G#4"],
    ["F4", "D4", "B3", "A3", "G#3"],
    ["B4", "F4", "A4", "G4", "G#4"],
];

/// Altered V resolving to A minor.
pub(super) const MINOR_C: &[CellTokens] = &[
    ["G#4", "F4", "E4", "D4", "C4"],
    ["G#3", "F4", "E4", "D4", "C4"],
    ["G#3", "B3", "E4", "D4", "C4"],
    ["G#3", "B3", "D4", "F4", "E4"],
    ["G#4", "F4", "D4", "D#4", "E4"],
    ["G#3", "F4", "D4", "D#4", "E4"],
    ["G#4", "B4", "F4", "D#4", "E4"],
];

/// Opening bar of the I-VI-ii-V turnaround.
pub(super) const TURNAROUND: &[CellTokens] = &[
    ["A4", "G4", "E4", "F4", "Gb4"],
    ["A4", "E4", "G4", "F4", "Gb4"],
    ["A4", "C4", "E4", "G4", "Gb4"],
    ["A4", "C5", "E5", "G5", "Gb5"],
    ["C5", "Bb4", "A4", "G4", "Gb4"],
    ["C4", "D4", "E4", "G4", "Gb4"],
];

/// Diminished landings for bars 5-6 of rhythm changes.
pub(super) const RHYTHM_CHANGES_RESOLUTION: &[CellTokens] = &[
    ["A4", "C5", "Eb5", "F#5", "G5"],
    ["C4", "Eb4", "F#4", "A4", "G4"],
    ["F#4", "A4", "G#4", "F#4", "G4"],
    ["D#4", "F#4", "B4", "A4", "G4"],
    ["D#4", "A4", "G#4", "F#4", "G4"],
    ["D#4", "C4", "A3", "F#3", "G3"],
];
