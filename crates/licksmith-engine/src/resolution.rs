//! Resolution validation: making a phrase end on a canonical resolution
//! cell.

use log::warn;

use crate::cells::{Cell, CELL_LEN};
use crate::error::LickResult;
use crate::pitch::Note;

/// How the tail of a phrase related to the canonical set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The last five notes already equal a canonical cell.
    Exact,
    /// The tail matched canonical cell `cell_index` by pitch class and was
    /// rebuilt with that cell's contour.
    Repaired { cell_index: usize },
    /// No canonical cell matched; the phrase is unchanged.
    Unmatched,
}

/// Validate the final five notes of `phrase` against `canonical`.
///
/// An exact match is accepted as is. Otherwise the first canonical cell
/// whose pitch classes match the tail in order is rebuilt over the tail,
/// keeping the cell's octave contour anchored at the tail's first note and
/// re-spelling canonically. With no match the phrase passes through.
pub fn validate_resolution(
    phrase: &[Note],
    canonical: &[Cell],
) -> LickResult<(Vec<Note>, ResolutionOutcome)> {
    if phrase.len() < CELL_LEN {
        warn!(
            "phrase of {} notes is too short to end on a resolution cell",
            phrase.len()
        );
        return Ok((phrase.to_vec(), ResolutionOutcome::Unmatched));
    }
    let split = phrase.len() - CELL_LEN;
    let tail = &phrase[split..];

    if canonical.iter().any(|cell| cell.notes() == tail) {
        return Ok((phrase.to_vec(), ResolutionOutcome::Exact));
    }

    let matched = canonical.iter().position(|cell| {
        cell.notes()
            .iter()
            .zip(tail)
            .all(|(c, t)| c.is_class_equal(t))
    });
    let Some(cell_index) = matched else {
        let shown: Vec<String> = tail.iter().map(Note::to_string).collect();
        warn!(
            "resolution '{}' matches no canonical cell, passing through",
            shown.join(" ")
        );
        return Ok((phrase.to_vec(), ResolutionOutcome::Unmatched));
    };

    let cell = &canonical[cell_index];
    let anchor = tail[0].octave();
    let base = cell.first().octave();
    let mut repaired = phrase[..split].to_vec();
    for note in cell.notes() {
        repaired.push(Note::canonical(
            note.pitch_class(),
            anchor + note.octave() - base,
        )?);
    }
    Ok((repaired, ResolutionOutcome::Repaired { cell_index }))
}
