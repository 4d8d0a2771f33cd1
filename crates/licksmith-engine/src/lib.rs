//! Licksmith Engine - Jazz Phrase Assembly
//!
//! This crate builds short practice phrases ("licks") from a fixed library of
//! five-note melodic cells. Cells are chained at matching pitch classes,
//! octave-adjusted for smooth joins, transposed into a requested key, and
//! gated to an instrument-friendly range and away from a few awkward shapes.
//!
//! # Features
//!
//! - **Two- and four-cell chains**: 9-note and 17-note phrases with one-note
//!   overlaps at every join
//! - **Harmonic types**: 7sus4 (with minor/dominant/half-diminished/altered
//!   colours), major, major and minor ii-V, side-stepped ii-V, turnaround,
//!   rhythm changes bars 5-6, II7 to V7
//! - **Resolution repair**: phrases that must land on a canonical cell are
//!   re-spelled and re-contoured after transposition
//! - **Notation**: LilyPond source for full and join-point views
//!
//! # Determinism
//!
//! All shuffling uses PCG32 seeded through BLAKE3 per-component derivation.
//! The same seed and request always yield the same phrase sequence.
//!
//! # Example
//!
//! ```ignore
//! use licksmith_engine::{generate_phrase, GeneratorConfig, Key, PhraseType};
//!
//! let config = GeneratorConfig::default().with_seed(42);
//! let phrase = generate_phrase("long_25_major".parse()?, Some(Key::F), &config)?;
//!
//! println!("{} ({})", phrase.tokens().join(" "), phrase.label());
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: Note spelling, parsing and transposition
//! - [`cells`]: The static cell library
//! - [`chain`]: Cell chaining under bounded retries
//! - [`resolution`]: Resolution-cell validation
//! - [`generate`]: Sessions and the one-shot entry point

pub mod cells;
pub mod chain;
pub mod config;
pub mod cycler;
pub mod error;
pub mod gate;
pub mod generate;
pub mod key;
pub mod keymap;
pub mod labels;
pub mod phrase;
pub mod pitch;
pub mod resolution;
pub mod rng;
pub mod score;

pub use cells::{cell_set, library, Cell, CellLibrary, CellSetId};
pub use config::GeneratorConfig;
pub use error::{LickError, LickResult};
pub use gate::PitchWindow;
pub use generate::{generate_phrase, ColorMode, PhraseSession};
pub use key::Key;
pub use phrase::{ChordColor, Phrase, PhraseLength, PhraseType};
pub use pitch::Note;
pub use score::{render_lilypond, ScoreView};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
