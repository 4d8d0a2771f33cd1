//! Acceptance gate for finished phrases.
//!
//! A phrase passes when it has the expected note count, every note sits in
//! the pitch window, and no nine-note run traces the forbidden shape in any
//! key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pitch::Note;

/// Pitch classes of the rejected contour A F E D G A B D F.
pub const FORBIDDEN_SHAPE: [u8; 9] = [9, 5, 4, 2, 7, 9, 11, 2, 5];

/// Inclusive window of absolute pitches (`pitch_class + 12 * octave`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PitchWindow {
    pub low: i32,
    pub high: i32,
}

impl PitchWindow {
    /// F2 (29) through E6 (76).
    pub const DEFAULT: PitchWindow = PitchWindow { low: 29, high: 76 };

    pub fn contains(&self, note: &Note) -> bool {
        (self.low..=self.high).contains(&note.absolute_pitch())
    }
}

impl Default for PitchWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of gating a finished phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    Accept,
    WrongLength { expected: usize, actual: usize },
    OutOfRange { note: Note },
    /// The forbidden contour, in some key, starting at note `at`.
    ForbiddenShape { at: usize },
}

impl GateVerdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, GateVerdict::Accept)
    }
}

impl fmt::Display for GateVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateVerdict::Accept => f.write_str("accepted"),
            GateVerdict::WrongLength { expected, actual } => {
                write!(f, "expected {expected} notes, got {actual}")
            }
            GateVerdict::OutOfRange { note } => write!(f, "{note} is out of range"),
            GateVerdict::ForbiddenShape { at } => {
                write!(f, "forbidden shape at note {}", at + 1)
            }
        }
    }
}

/// Start of the first nine-note run whose pitch classes are
/// [`FORBIDDEN_SHAPE`] moved by a common interval.
pub fn forbidden_shape_at(notes: &[Note]) -> Option<usize> {
    notes.windows(FORBIDDEN_SHAPE.len()).position(|run| {
        let offset = |i: usize| (run[i].pitch_class() + 12 - FORBIDDEN_SHAPE[i]) % 12;
        (1..run.len()).all(|i| offset(i) == offset(0))
    })
}

/// Check note count first, then every note against `window`, then the
/// forbidden shape.
pub fn check(notes: &[Note], expected_len: usize, window: PitchWindow) -> GateVerdict {
    if notes.len() != expected_len {
        return GateVerdict::WrongLength {
            expected: expected_len,
            actual: notes.len(),
        };
    }
    if let Some(&note) = notes.iter().find(|n| !window.contains(n)) {
        return GateVerdict::OutOfRange { note };
    }
    match forbidden_shape_at(notes) {
        Some(at) => GateVerdict::ForbiddenShape { at },
        None => GateVerdict::Accept,
    }
}
