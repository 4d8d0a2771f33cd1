//! The static cell library.
//!
//! A cell is a fixed five-note melodic fragment tied to one harmonic role.
//! Cells are grouped into named sets; several sets are derived from the
//! dominant vocabulary by transposing it a fixed interval. The library is
//! built once per process and is read-only afterwards.

mod data;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{LickError, LickResult};
use crate::key::Key;
use crate::pitch::{transpose_note, Note};
use data::CellTokens;

/// Number of notes in every cell.
pub const CELL_LEN: usize = 5;

/// Pitch class excluded from the start of the trimmed dominant sets (F),
/// checked after transposition.
const TRIMMED_START_CLASS: u8 = 5;

/// One melodic fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cell([Note; CELL_LEN]);

impl Cell {
    pub const fn new(notes: [Note; CELL_LEN]) -> Self {
        Self(notes)
    }

    /// Parse a cell from exactly five note tokens.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> LickResult<Self> {
        let notes = crate::pitch::parse_notes(tokens)?;
        let notes: [Note; CELL_LEN] = notes.try_into().map_err(|v: Vec<Note>| {
            LickError::parse(
                &v.iter().map(Note::to_string).collect::<Vec<_>>().join(" "),
                format!("a cell needs exactly {CELL_LEN} notes"),
            )
        })?;
        Ok(Self(notes))
    }

    pub fn notes(&self) -> &[Note] {
        &self.0
    }

    pub fn first(&self) -> Note {
        self.0[0]
    }

    pub fn last(&self) -> Note {
        self.0[CELL_LEN - 1]
    }

    /// Transpose every note, spelling for `key`.
    pub fn transposed(&self, semitones: i32, key: Key) -> Self {
        Self(self.0.map(|n| transpose_note(n, semitones, key)))
    }
}

impl AsRef<[Note]> for Cell {
    fn as_ref(&self) -> &[Note] {
        &self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

/// Named cell sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellSetId {
    /// Dominant / 7sus4 vocabulary.
    Dominant,
    /// Dominant vocabulary plus altered approaches.
    DominantExtended,
    Major,
    /// Canonical landings for major ii-V and turnaround lines.
    MajorResolution,
    MinorB,
    /// Canonical landings for minor ii-V lines.
    MinorC,
    /// Dominant vocabulary down a fourth.
    DominantDown5,
    MinorCDown2,
    Turnaround,
    RhythmChangesResolution,
    /// Dominant up a fourth, F-starting cells removed.
    DominantUp5Trimmed,
    /// Dominant up a whole step, F-starting cells removed.
    DominantUp2Trimmed,
    /// Dominant down a fourth, F-starting cells removed.
    DominantDown5Trimmed,
    /// Dominant up a half step, F-starting cells removed.
    DominantUp1Trimmed,
}

impl CellSetId {
    pub const ALL: [CellSetId; 14] = [
        CellSetId::Dominant,
        CellSetId::DominantExtended,
        CellSetId::Major,
        CellSetId::MajorResolution,
        CellSetId::MinorB,
        CellSetId::MinorC,
        CellSetId::DominantDown5,
        CellSetId::MinorCDown2,
        CellSetId::Turnaround,
        CellSetId::RhythmChangesResolution,
        CellSetId::DominantUp5Trimmed,
        CellSetId::DominantUp2Trimmed,
        CellSetId::DominantDown5Trimmed,
        CellSetId::DominantUp1Trimmed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CellSetId::Dominant => "dominant",
            CellSetId::DominantExtended => "dominant_extended",
            CellSetId::Major => "major",
            CellSetId::MajorResolution => "major_resolution",
            CellSetId::MinorB => "minor_b",
            CellSetId::MinorC => "minor_c",
            CellSetId::DominantDown5 => "dominant_down5",
            CellSetId::MinorCDown2 => "minor_c_down2",
            CellSetId::Turnaround => "turnaround",
            CellSetId::RhythmChangesResolution => "rhythm_changes_resolution",
            CellSetId::DominantUp5Trimmed => "dominant_up5_trimmed",
            CellSetId::DominantUp2Trimmed => "dominant_up2_trimmed",
            CellSetId::DominantDown5Trimmed => "dominant_down5_trimmed",
            CellSetId::DominantUp1Trimmed => "dominant_up1_trimmed",
        }
    }

    /// Look up a set by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for CellSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All cell sets, parsed and derived.
#[derive(Debug, Clone)]
pub struct CellLibrary {
    sets: HashMap<CellSetId, Vec<Cell>>,
}

impl CellLibrary {
    /// Parse the base tables and derive the transposed sets.
    pub fn load() -> LickResult<Self> {
        let dominant = parse_table(data::DOMINANT)?;
        let mut extended = dominant.clone();
        extended.extend(parse_table(data::DOMINANT_EXTENSIONS)?);
        let minor_c = parse_table(data::MINOR_C)?;

        let shifted = |cells: &[Cell], semitones: i32| -> Vec<Cell> {
            cells.iter().map(|c| c.transposed(semitones, Key::C)).collect()
        };
        let trimmed = |semitones: i32| -> Vec<Cell> {
            shifted(&dominant, semitones)
                .into_iter()
                .filter(|c| c.first().pitch_class() != TRIMMED_START_CLASS)
                .collect()
        };

        let mut sets = HashMap::new();
        sets.insert(CellSetId::DominantDown5, shifted(&dominant, -5));
        sets.insert(CellSetId::MinorCDown2, shifted(&minor_c, -2));
        sets.insert(CellSetId::DominantUp5Trimmed, trimmed(5));
        sets.insert(CellSetId::DominantUp2Trimmed, trimmed(2));
        sets.insert(CellSetId::DominantDown5Trimmed, trimmed(-5));
        sets.insert(CellSetId::DominantUp1Trimmed, trimmed(1));
        sets.insert(CellSetId::Major, parse_table(data::MAJOR)?);
        sets.insert(
            CellSetId::MajorResolution,
            parse_table(data::MAJOR_RESOLUTION)?,
        );
        sets.insert(CellSetId::MinorB, parse_table(data::MINOR_B)?);
        sets.insert(CellSetId::Turnaround, parse_table(data::TURNAROUND)?);
        sets.insert(
            CellSetId::RhythmChangesResolution,
            parse_table(data::RHYTHM_CHANGES_RESOLUTION)?,
        );
        sets.insert(CellSetId::MinorC, minor_c);
        sets.insert(CellSetId::DominantExtended, extended);
        sets.insert(CellSetId::Dominant, dominant);

        Ok(Self { sets })
    }

    /// Cells of one set.
    pub fn get(&self, id: CellSetId) -> &[Cell] {
        self.sets.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All sets in [`CellSetId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (CellSetId, &[Cell])> + '_ {
        CellSetId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

fn parse_table(table: &[CellTokens]) -> LickResult<Vec<Cell>> {
    table.iter().map(|tokens| Cell::parse(tokens)).collect()
}

static LIBRARY: OnceLock<CellLibrary> = OnceLock::new();

/// The process-wide cell library.
pub fn library() -> &'static CellLibrary {
    LIBRARY.get_or_init(|| CellLibrary::load().expect("built-in cell tables are valid"))
}

/// Shorthand for `library().get(id)`.
pub fn cell_set(id: CellSetId) -> &'static [Cell] {
    library().get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell(tokens: [&str; 5]) -> Cell {
        Cell::parse(&tokens).unwrap()
    }

    #[test]
    fn test_library_loads() {
        assert!(CellLibrary::load().is_ok());
    }

    #[test]
    fn test_set_sizes() {
        let lib = library();
        let sizes: Vec<(CellSetId, usize)> = lib.iter().map(|(id, c)| (id, c.len())).collect();
        assert_eq!(
            sizes,
            vec![
                (CellSetId::Dominant, 32),
                (CellSetId::DominantExtended, 42),
                (CellSetId::Major, 33),
                (CellSetId::MajorResolution, 22),
                (CellSetId::MinorB, 5),
                (CellSetId::MinorC, 7),
                (CellSetId::DominantDown5, 32),
                (CellSetId::MinorCDown2, 7),
                (CellSetId::Turnaround, 6),
                (CellSetId::RhythmChangesResolution, 6),
                (CellSetId::DominantUp5Trimmed, 29),
                (CellSetId::DominantUp2Trimmed, 32),
                (CellSetId::DominantDown5Trimmed, 25),
                (CellSetId::DominantUp1Trimmed, 29),
            ]
        );
    }

    #[test]
    fn test_derived_sets_are_flat_spelled() {
        assert_eq!(
            cell_set(CellSetId::DominantDown5)[0],
            cell(["F4", "A3", "C4", "Db4", "E4"])
        );
        assert_eq!(
            cell_set(CellSetId::MinorCDown2)[0],
            cell(["Gb4", "Eb4", "D4", "C4", "Bb3"])
        );
    }

    #[test]
    fn test_trimmed_sets_skip_f_starts() {
        let trimmed = [
            CellSetId::DominantUp5Trimmed,
            CellSetId::DominantUp2Trimmed,
            CellSetId::DominantDown5Trimmed,
            CellSetId::DominantUp1Trimmed,
        ];
        for id in trimmed {
            assert!(
                cell_set(id).iter().all(|c| c.first().pitch_class() != 5),
                "{id}"
            );
        }

        // The filter runs on the transposed cells: C-starting dominant
        // cells land on F a fourth down and are dropped there.
        let down5 = cell_set(CellSetId::DominantDown5);
        let dropped: Vec<&Cell> = down5
            .iter()
            .filter(|c| !cell_set(CellSetId::DominantDown5Trimmed).contains(*c))
            .collect();
        assert_eq!(dropped.len(), 7);
        assert!(dropped.iter().all(|c| c.first().to_string().starts_with('F')));

        // Nothing lands on F a whole step up
        let up2: Vec<Cell> = cell_set(CellSetId::Dominant)
            .iter()
            .map(|c| c.transposed(2, Key::C))
            .collect();
        assert_eq!(cell_set(CellSetId::DominantUp2Trimmed), up2.as_slice());
    }

    #[test]
    fn test_every_note_is_spellable() {
        for (id, cells) in library().iter() {
            for c in cells {
                assert!(c.notes().iter().all(Note::is_canonical), "{id}: {c}");
            }
        }
    }

    #[test]
    fn test_cell_parse_length() {
        assert!(Cell::parse(&["C4", "D4", "E4"]).is_err());
        assert_eq!(cell(["C4", "D4", "E4", "G4", "Bb4"]).to_string(), "C4 D4 E4 G4 Bb4");
    }

    #[test]
    fn test_set_names_roundtrip() {
        for id in CellSetId::ALL {
            assert_eq!(CellSetId::from_name(id.as_str()), Some(id));
        }
        assert_eq!(CellSetId::from_name("bebop"), None);
    }
}
