//! Cell chaining: joining cells at matching pitch classes under a bounded
//! retry policy.
//!
//! Two-cell forms draw a left cell and append a right cell that starts on
//! the left cell's final pitch class, falling back to any right cell when
//! none does. Four-cell forms start from a resolution cell and grow
//! leftward, prepending from each link set a cell that ends on the chain's
//! current first pitch class.
//!
//! Some phrase types also screen the assembled line for a few known
//! awkward runs and retry when one appears.

use std::fmt;
use std::sync::OnceLock;

use log::debug;
use rand_pcg::Pcg32;

use crate::cells::{cell_set, Cell, CellSetId};
use crate::cycler::Cycler;
use crate::error::{LickError, LickResult};
use crate::phrase::{PhraseType, Topology};
use crate::pitch::{adjust_right_cell, parse_notes, Note};
use crate::rng::{component_rng, fork_rng};

/// Append `right` after `left`, sharing the join note.
///
/// `right` is octave-shifted onto the end of `left` and its first note
/// dropped.
pub fn splice_forward(left: &[Note], right: &[Note]) -> LickResult<Vec<Note>> {
    let adjusted = adjust_right_cell(left, right)?;
    let mut phrase = left.to_vec();
    phrase.extend(adjusted.into_iter().skip(1));
    Ok(phrase)
}

/// Prepend `left` before `chain`, sharing the join note.
///
/// The whole chain is octave-shifted to follow `left`; the last note of
/// `left` is dropped in favour of the chain's shifted head.
pub fn splice_backward(left: &[Note], chain: &[Note]) -> LickResult<Vec<Note>> {
    let adjusted = adjust_right_cell(left, chain)?;
    let mut phrase = left[..left.len().saturating_sub(1)].to_vec();
    phrase.extend(adjusted);
    Ok(phrase)
}

/// Cells of `set` whose first note shares a pitch class with `end`.
pub fn starting_on(set: &[Cell], end: Note) -> Vec<Cell> {
    set.iter()
        .filter(|c| c.first().is_class_equal(&end))
        .copied()
        .collect()
}

/// Cells of `set` whose last note shares a pitch class with `head`.
pub fn ending_on(set: &[Cell], head: Note) -> Vec<Cell> {
    set.iter()
        .filter(|c| c.last().is_class_equal(&head))
        .copied()
        .collect()
}

/// Nine-note runs rejected at assembly.
const PROBLEM_RUNS: [[&str; 9]; 3] = [
    ["D4", "Bb4", "A4", "G4", "C5", "D5", "E5", "G5", "Bb5"],
    ["D4", "F4", "E4", "G3", "Bb3", "C3", "Db3", "A3", "G3"],
    ["G4", "Bb4", "A4", "G4", "C5", "D5", "E5", "G5", "Bb5"],
];

fn problem_runs() -> &'static [Vec<Note>] {
    static RUNS: OnceLock<Vec<Vec<Note>>> = OnceLock::new();
    RUNS.get_or_init(|| {
        PROBLEM_RUNS
            .iter()
            .map(|run| parse_notes(run).expect("built-in problem runs are valid"))
            .collect()
    })
}

/// Start of the first problem run in `notes`.
///
/// A run matches in any of its twelve transpositions, where every pitch
/// class moves by the same interval and every octave number stays put.
/// Spelling is ignored.
pub fn problem_run_at(notes: &[Note]) -> Option<usize> {
    problem_runs().iter().find_map(|run| {
        notes.windows(run.len()).position(|window| {
            let offset = |i: usize| (window[i].pitch_class() + 12 - run[i].pitch_class()) % 12;
            window.iter().zip(run).all(|(a, b)| a.octave() == b.octave())
                && (1..run.len()).all(|i| offset(i) == offset(0))
        })
    })
}

/// Why one construction attempt was abandoned.
#[derive(Debug)]
enum AttemptFailure {
    /// No cell in the set joins the current chain head.
    Stalled { set: CellSetId, head: Note },
    /// A splice moved a note outside the spellable octaves.
    OutOfRange(LickError),
    WrongLength(usize),
    /// The line contains a problem run starting at this note.
    ProblemRun { at: usize },
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Stalled { set, head } => {
                write!(f, "no {set} cell ends on {}", head.name())
            }
            AttemptFailure::OutOfRange(e) => write!(f, "{e}"),
            AttemptFailure::WrongLength(n) => write!(f, "assembled {n} notes"),
            AttemptFailure::ProblemRun { at } => {
                write!(f, "problem run at note {}", at + 1)
            }
        }
    }
}

/// Outcome of one attempt: the outer error is fatal to the call.
type Attempt = Result<Result<Vec<Note>, AttemptFailure>, LickError>;

/// Splice errors abort an attempt when they are range failures and the
/// whole call otherwise.
fn classify(err: LickError) -> Result<AttemptFailure, LickError> {
    match err {
        LickError::Unspellable { .. } => Ok(AttemptFailure::OutOfRange(err)),
        other => Err(other),
    }
}

/// The cyclers one phrase type draws cells from.
#[derive(Debug, Clone)]
pub enum ChainCyclers {
    Pair {
        left: Cycler<Cell>,
        right: Cycler<Cell>,
    },
    Chain {
        seed: Cycler<Cell>,
        links: [CellSetId; 3],
    },
}

impl ChainCyclers {
    /// Build the cyclers for `topology`, each on its own seed stream.
    pub fn new(topology: Topology, base_seed: u64) -> LickResult<Self> {
        let cycler = |role: &str, set: CellSetId| {
            Cycler::new(
                format!("{role}:{set}"),
                cell_set(set).to_vec(),
                component_rng(base_seed, &format!("{role}:{set}")),
            )
        };
        Ok(match topology {
            Topology::Pair { left, right } => ChainCyclers::Pair {
                left: cycler("left", left)?,
                right: cycler("right", right)?,
            },
            Topology::Chain { seed, links } => ChainCyclers::Chain {
                seed: cycler("seed", seed)?,
                links,
            },
        })
    }

    /// Number of cells one phrase joins.
    pub fn cell_count(&self) -> usize {
        match self {
            ChainCyclers::Pair { .. } => 2,
            ChainCyclers::Chain { links, .. } => 1 + links.len(),
        }
    }

    fn restart(&mut self) {
        match self {
            ChainCyclers::Pair { left, .. } => left.reset_permutation(),
            ChainCyclers::Chain { seed, .. } => seed.reset_permutation(),
        }
    }

    fn attempt(&mut self, rng: &mut Pcg32) -> Attempt {
        match self {
            ChainCyclers::Pair { left, right } => attempt_pair(left, right),
            ChainCyclers::Chain { seed, links } => attempt_chain(seed, links, rng),
        }
    }
}

fn attempt_pair(
    left: &mut Cycler<Cell>,
    right: &mut Cycler<Cell>,
) -> Attempt {
    let left_cell = left.next_item();
    let end = left_cell.last();

    let compatible = right.items().iter().any(|c| c.first().is_class_equal(&end));
    let joined = if compatible {
        right.next_where(|c| c.first().is_class_equal(&end))
    } else {
        None
    };
    let right_cell = match joined {
        Some(cell) => cell,
        None => {
            debug!(
                "no {} cell starts on {}, joining an arbitrary one",
                right.label(),
                end.name()
            );
            right.next_item()
        }
    };

    match splice_forward(left_cell.notes(), right_cell.notes()) {
        Ok(notes) => Ok(Ok(notes)),
        Err(e) => classify(e).map(Err),
    }
}

fn attempt_chain(
    seed: &mut Cycler<Cell>,
    links: &[CellSetId; 3],
    rng: &mut Pcg32,
) -> Attempt {
    let mut chain = seed.next_item().notes().to_vec();

    for &set in links {
        let head = chain[0];
        let candidates = ending_on(cell_set(set), head);
        if candidates.is_empty() {
            return Ok(Err(AttemptFailure::Stalled { set, head }));
        }
        let left_cell = Cycler::new(set.as_str(), candidates, fork_rng(rng))?.next_item();
        chain = match splice_backward(left_cell.notes(), &chain) {
            Ok(notes) => notes,
            Err(e) => return classify(e).map(Err),
        };
    }
    Ok(Ok(chain))
}

/// Assemble a raw phrase for `phrase_type` in C.
///
/// Retries the whole construction up to `max_attempts` times, reshuffling
/// the left or seed cycler between attempts. Types that screen problem runs
/// also retry when one is found. Fails with
/// [`LickError::PhraseConstruction`] once the attempts are spent.
pub fn assemble(
    phrase_type: PhraseType,
    cyclers: &mut ChainCyclers,
    rng: &mut Pcg32,
    max_attempts: u32,
) -> LickResult<Vec<Note>> {
    let expected = phrase_type.expected_len();

    for attempt in 1..=max_attempts {
        let failure = match cyclers.attempt(rng)? {
            Ok(notes) if notes.len() != expected => AttemptFailure::WrongLength(notes.len()),
            Ok(notes) => {
                let run = if phrase_type.screens_problem_runs() {
                    problem_run_at(&notes)
                } else {
                    None
                };
                match run {
                    Some(at) => AttemptFailure::ProblemRun { at },
                    None => return Ok(notes),
                }
            }
            Err(failure) => failure,
        };
        debug!("{phrase_type} attempt {attempt}/{max_attempts} failed: {failure}");
        cyclers.restart();
    }

    Err(LickError::PhraseConstruction {
        phrase_type,
        attempts: max_attempts,
    })
}
