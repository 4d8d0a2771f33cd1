//! Main entry point for phrase generation.
//!
//! A request names a phrase type and optionally a tonic. Generation runs the
//! pipeline:
//! - [`crate::chain`] assembles a raw phrase in C
//! - [`crate::resolution`] repairs the tail for resolving types
//! - [`crate::keymap`] picks the target key and the phrase is transposed
//! - [`crate::gate`] accepts the result or forces a regeneration
//!
//! [`PhraseSession`] keeps the cyclers alive across successive phrases;
//! [`generate_phrase`] is the one-shot form.

mod session;


pub use session::{ColorMode, PhraseSession};

use crate::config::GeneratorConfig;
use crate::error::LickResult;
use crate::key::Key;
use crate::phrase::{Phrase, PhraseType};

/// Generate one phrase of `phrase_type`.
///
/// With `key` set the phrase is pinned to that tonic; otherwise a key cycler
/// picks one, advancing on every range rejection.
pub fn generate_phrase(
    phrase_type: PhraseType,
    key: Option<Key>,
    config: &GeneratorConfig,
) -> LickResult<Phrase> {
    PhraseSession::new(phrase_type, key, config.clone())?.next_phrase()
}
