//! Phrase types, their chaining topologies, and assembled phrases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cells::{CellSetId, CELL_LEN};
use crate::error::LickError;
use crate::key::Key;
use crate::pitch::Note;

/// Two-cell or four-cell phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseLength {
    Short,
    Long,
}

impl PhraseLength {
    /// Number of cells joined.
    pub fn cells(self) -> usize {
        match self {
            PhraseLength::Short => 2,
            PhraseLength::Long => 4,
        }
    }

    /// Note count after joining: `5 + 4 * (cells - 1)`.
    pub fn notes(self) -> usize {
        expected_notes(self.cells())
    }
}

/// Note count of a chain of `cells` cells with one-note overlaps.
pub fn expected_notes(cells: usize) -> usize {
    CELL_LEN + (CELL_LEN - 1) * cells.saturating_sub(1)
}

/// Chord a 7sus4 line is played over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordColor {
    Minor,
    Dominant,
    HalfDim,
    Altered,
}

impl ChordColor {
    pub const ALL: [ChordColor; 4] = [
        ChordColor::Minor,
        ChordColor::Dominant,
        ChordColor::HalfDim,
        ChordColor::Altered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChordColor::Minor => "minor",
            ChordColor::Dominant => "dominant",
            ChordColor::HalfDim => "half_dim",
            ChordColor::Altered => "altered",
        }
    }

    /// Chord-symbol suffix, e.g. `ø7` for half-diminished.
    pub fn chord_suffix(self) -> &'static str {
        match self {
            ChordColor::Minor => "m",
            ChordColor::Dominant => "7",
            ChordColor::HalfDim => "ø7",
            ChordColor::Altered => "7Alt",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ChordColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Harmonic type of a requested phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PhraseType {
    /// Dominant 7sus4 line, optionally pinned to one chord colour.
    Sus4 {
        length: PhraseLength,
        color: Option<ChordColor>,
    },
    Major(PhraseLength),
    MajorTwoFive(PhraseLength),
    MinorTwoFive(PhraseLength),
    Turnaround,
    /// Bars 5-6 of rhythm changes (I7 IV7 #IVdim).
    RhythmChanges56,
    /// II7 to V7.
    TwoSevenToFiveSeven,
    /// Major ii-V approached from a half step above (bIIIm bVI7 IIm V7 I).
    SideStepTwoFive,
}

/// How cells are drawn and joined for a phrase type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Left cell, then a right cell appended after it.
    Pair { left: CellSetId, right: CellSetId },
    /// Seed (resolution) cell, then one cell prepended from each link set
    /// in order.
    Chain {
        seed: CellSetId,
        links: [CellSetId; 3],
    },
}

impl Topology {
    pub fn cell_count(&self) -> usize {
        match self {
            Topology::Pair { .. } => 2,
            Topology::Chain { links, .. } => 1 + links.len(),
        }
    }

    pub fn expected_len(&self) -> usize {
        expected_notes(self.cell_count())
    }
}

impl PhraseType {
    /// Every phrase type, in menu order.
    pub fn all() -> Vec<PhraseType> {
        let mut types = Vec::with_capacity(20);
        for length in [PhraseLength::Short, PhraseLength::Long] {
            types.push(PhraseType::Sus4 {
                length,
                color: None,
            });
            for color in ChordColor::ALL {
                types.push(PhraseType::Sus4 {
                    length,
                    color: Some(color),
                });
            }
        }
        for length in [PhraseLength::Short, PhraseLength::Long] {
            types.push(PhraseType::Major(length));
        }
        for length in [PhraseLength::Short, PhraseLength::Long] {
            types.push(PhraseType::MajorTwoFive(length));
        }
        for length in [PhraseLength::Short, PhraseLength::Long] {
            types.push(PhraseType::MinorTwoFive(length));
        }
        types.push(PhraseType::Turnaround);
        types.push(PhraseType::RhythmChanges56);
        types.push(PhraseType::TwoSevenToFiveSeven);
        types.push(PhraseType::SideStepTwoFive);
        types
    }

    /// Stable identifier, e.g. `long_25_minor`.
    pub fn id(&self) -> String {
        let prefix = |length: PhraseLength| match length {
            PhraseLength::Short => "",
            PhraseLength::Long => "long_",
        };
        match *self {
            PhraseType::Sus4 { length, color } => match color {
                Some(c) => format!("{}7sus4_{}", prefix(length), c),
                None => format!("{}7sus4", prefix(length)),
            },
            PhraseType::Major(length) => format!("{}major", prefix(length)),
            PhraseType::MajorTwoFive(PhraseLength::Short) => "short_25_major".into(),
            PhraseType::MajorTwoFive(PhraseLength::Long) => "long_25_major".into(),
            PhraseType::MinorTwoFive(PhraseLength::Short) => "short_25_minor".into(),
            PhraseType::MinorTwoFive(PhraseLength::Long) => "long_25_minor".into(),
            PhraseType::Turnaround => "turnaround".into(),
            PhraseType::RhythmChanges56 => "rhythm_changes_56".into(),
            PhraseType::TwoSevenToFiveSeven => "ii7_to_v7".into(),
            PhraseType::SideStepTwoFive => "long_side_step_25".into(),
        }
    }

    pub fn length(&self) -> PhraseLength {
        match *self {
            PhraseType::Sus4 { length, .. }
            | PhraseType::Major(length)
            | PhraseType::MajorTwoFive(length)
            | PhraseType::MinorTwoFive(length) => length,
            PhraseType::Turnaround
            | PhraseType::RhythmChanges56
            | PhraseType::TwoSevenToFiveSeven
            | PhraseType::SideStepTwoFive => PhraseLength::Long,
        }
    }

    /// Note count every accepted phrase of this type has.
    pub fn expected_len(&self) -> usize {
        self.topology().expected_len()
    }

    /// Chord colour of a pinned 7sus4 type.
    pub fn color(&self) -> Option<ChordColor> {
        match *self {
            PhraseType::Sus4 { color, .. } => color,
            _ => None,
        }
    }

    /// The same type with its 7sus4 colour replaced. Other types are
    /// returned unchanged.
    pub fn with_color(self, color: Option<ChordColor>) -> Self {
        match self {
            PhraseType::Sus4 { length, .. } => PhraseType::Sus4 { length, color },
            other => other,
        }
    }

    pub fn is_sus4(&self) -> bool {
        matches!(self, PhraseType::Sus4 { .. })
    }

    pub fn topology(&self) -> Topology {
        use CellSetId::*;
        use PhraseLength::*;
        match *self {
            PhraseType::Sus4 { length: Short, .. } => Topology::Pair {
                left: Dominant,
                right: Dominant,
            },
            PhraseType::Sus4 { length: Long, .. } => Topology::Chain {
                seed: Dominant,
                links: [Dominant, Dominant, Dominant],
            },
            PhraseType::Major(Short) => Topology::Pair {
                left: Major,
                right: Major,
            },
            PhraseType::Major(Long) => Topology::Chain {
                seed: Major,
                links: [Major, Major, Major],
            },
            PhraseType::MajorTwoFive(Short) => Topology::Pair {
                left: DominantExtended,
                right: MajorResolution,
            },
            PhraseType::MajorTwoFive(Long) => Topology::Chain {
                seed: MajorResolution,
                links: [DominantExtended, Dominant, Dominant],
            },
            PhraseType::MinorTwoFive(Short) => Topology::Pair {
                left: MinorB,
                right: MinorC,
            },
            PhraseType::MinorTwoFive(Long) => Topology::Chain {
                seed: MinorC,
                links: [MinorB, DominantDown5, DominantDown5],
            },
            PhraseType::Turnaround => Topology::Chain {
                seed: MajorResolution,
                links: [DominantExtended, MinorCDown2, CellSetId::Turnaround],
            },
            PhraseType::RhythmChanges56 => Topology::Chain {
                seed: RhythmChangesResolution,
                links: [DominantUp5Trimmed, Dominant, Dominant],
            },
            PhraseType::TwoSevenToFiveSeven => Topology::Chain {
                seed: DominantDown5Trimmed,
                links: [
                    DominantDown5Trimmed,
                    DominantUp2Trimmed,
                    DominantUp2Trimmed,
                ],
            },
            PhraseType::SideStepTwoFive => Topology::Chain {
                seed: MajorResolution,
                links: [DominantExtended, DominantUp1Trimmed, DominantUp1Trimmed],
            },
        }
    }

    /// Canonical set the final five notes must come from, if any.
    pub fn resolution_set(&self) -> Option<CellSetId> {
        match self {
            PhraseType::MajorTwoFive(_)
            | PhraseType::Turnaround
            | PhraseType::SideStepTwoFive => Some(CellSetId::MajorResolution),
            PhraseType::MinorTwoFive(_) => Some(CellSetId::MinorC),
            PhraseType::RhythmChanges56 => Some(CellSetId::RhythmChangesResolution),
            PhraseType::TwoSevenToFiveSeven => Some(CellSetId::DominantDown5Trimmed),
            PhraseType::Sus4 { .. } | PhraseType::Major(_) => None,
        }
    }

    /// Whether the tail is validated straight after assembly, before
    /// transposition.
    pub fn validates_on_assembly(&self) -> bool {
        matches!(
            self,
            PhraseType::Turnaround | PhraseType::RhythmChanges56 | PhraseType::TwoSevenToFiveSeven
        )
    }

    /// Whether assembly retries lines containing a known problem run.
    pub fn screens_problem_runs(&self) -> bool {
        matches!(
            self,
            PhraseType::MajorTwoFive(PhraseLength::Long)
                | PhraseType::MinorTwoFive(_)
                | PhraseType::Turnaround
                | PhraseType::RhythmChanges56
                | PhraseType::TwoSevenToFiveSeven
                | PhraseType::SideStepTwoFive
        )
    }
}

impl fmt::Display for PhraseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for PhraseType {
    type Err = LickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        PhraseType::all()
            .into_iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| LickError::UnknownPhraseType(s.to_string()))
    }
}

impl TryFrom<String> for PhraseType {
    type Error = LickError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhraseType> for String {
    fn from(phrase_type: PhraseType) -> Self {
        phrase_type.id()
    }
}

/// An accepted, transposed phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// Concrete type; a cycled 7sus4 colour is filled in here.
    pub phrase_type: PhraseType,
    /// Key the caller asked for (or the key cycler supplied).
    pub tonic: Key,
    /// Key the material was generated and spelled in.
    pub generation_key: Key,
    pub notes: Vec<Note>,
    /// Gate rejections before this phrase was accepted.
    pub regenerations: u32,
}

impl Phrase {
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes as `<PitchClassName><Octave>` tokens.
    pub fn tokens(&self) -> Vec<String> {
        self.notes.iter().map(Note::to_string).collect()
    }

    /// Chord-progression text for display under the staff.
    pub fn label(&self) -> String {
        crate::labels::describe(self.phrase_type, self.tonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_roundtrip() {
        let all = PhraseType::all();
        assert_eq!(all.len(), 20);
        let ids: HashSet<String> = all.iter().map(PhraseType::id).collect();
        assert_eq!(ids.len(), all.len());
        for t in all {
            assert_eq!(t.id().parse::<PhraseType>().unwrap(), t);
        }
    }

    #[test]
    fn test_known_ids() {
        assert_eq!(
            "long_7sus4_half_dim".parse::<PhraseType>().unwrap(),
            PhraseType::Sus4 {
                length: PhraseLength::Long,
                color: Some(ChordColor::HalfDim)
            }
        );
        assert_eq!(
            "ii7_to_v7".parse::<PhraseType>().unwrap(),
            PhraseType::TwoSevenToFiveSeven
        );
        assert_eq!(
            "long_side_step_25".parse::<PhraseType>().unwrap(),
            PhraseType::SideStepTwoFive
        );
        assert!(matches!(
            "25_major".parse::<PhraseType>(),
            Err(LickError::UnknownPhraseType(_))
        ));
    }

    #[test]
    fn test_expected_lengths() {
        for t in PhraseType::all() {
            let expected = match t.length() {
                PhraseLength::Short => 9,
                PhraseLength::Long => 17,
            };
            assert_eq!(t.expected_len(), expected, "{t}");
            assert_eq!(t.length().notes(), expected, "{t}");
        }
    }

    #[test]
    fn test_on_assembly_validation_implies_resolution_set() {
        for t in PhraseType::all() {
            if t.validates_on_assembly() {
                assert!(t.resolution_set().is_some(), "{t}");
            }
        }
    }

    #[test]
    fn test_problem_run_screening() {
        assert!(PhraseType::SideStepTwoFive.screens_problem_runs());
        assert!(PhraseType::MinorTwoFive(PhraseLength::Short).screens_problem_runs());
        assert!(!PhraseType::MajorTwoFive(PhraseLength::Short).screens_problem_runs());
        assert!(PhraseType::all()
            .iter()
            .filter(|t| t.is_sus4() || matches!(t, PhraseType::Major(_)))
            .all(|t| !t.screens_problem_runs()));
    }

    #[test]
    fn test_with_color_only_touches_sus4() {
        let t = PhraseType::Sus4 {
            length: PhraseLength::Short,
            color: None,
        };
        assert_eq!(
            t.with_color(Some(ChordColor::Altered)).id(),
            "7sus4_altered"
        );
        assert_eq!(
            PhraseType::Turnaround.with_color(Some(ChordColor::Minor)),
            PhraseType::Turnaround
        );
    }
}
