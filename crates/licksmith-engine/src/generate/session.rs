//! Phrase sessions: the cyclers and loop behind successive phrases.

use log::{debug, warn};
use rand_pcg::Pcg32;

use crate::cells::{cell_set, Cell, CellSetId};
use crate::chain::{assemble, ChainCyclers};
use crate::config::GeneratorConfig;
use crate::cycler::Cycler;
use crate::error::{LickError, LickResult};
use crate::gate::{self, GateVerdict};
use crate::key::Key;
use crate::keymap::{self, KeyPlan};
use crate::phrase::{ChordColor, Phrase, PhraseType};
use crate::pitch::{transpose_notes, Note};
use crate::resolution::validate_resolution;
use crate::rng::{component_rng, entropy_seed};

/// How 7sus4 chord colours are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use the colour in the phrase type, if any.
    #[default]
    Fixed,
    /// Draw a fresh colour from a four-colour cycler for every phrase.
    Cycle,
}

/// Owns the cyclers of one phrase-type selection.
#[derive(Debug, Clone)]
pub struct PhraseSession {
    phrase_type: PhraseType,
    fixed_key: Option<Key>,
    color_mode: ColorMode,
    config: GeneratorConfig,
    seed: u64,
    cells: ChainCyclers,
    keys: Cycler<Key>,
    colors: Cycler<ChordColor>,
    rng: Pcg32,
}

impl PhraseSession {
    /// Start a session for `phrase_type`.
    ///
    /// `key` pins every phrase to one tonic; `None` cycles through all
    /// twelve keys.
    pub fn new(
        phrase_type: PhraseType,
        key: Option<Key>,
        config: GeneratorConfig,
    ) -> LickResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(entropy_seed);
        debug!("session for {phrase_type} seeded with {seed}");

        Ok(Self {
            cells: ChainCyclers::new(phrase_type.topology(), seed)?,
            keys: Cycler::new("keys", Key::ALL.to_vec(), component_rng(seed, "keys"))?,
            colors: Cycler::new(
                "colors",
                ChordColor::ALL.to_vec(),
                component_rng(seed, "colors"),
            )?,
            rng: component_rng(seed, "compatible"),
            phrase_type,
            fixed_key: key,
            color_mode: ColorMode::Fixed,
            config,
            seed,
        })
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    pub fn phrase_type(&self) -> PhraseType {
        self.phrase_type
    }

    /// Seed all cyclers were derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the next accepted phrase.
    ///
    /// Loops until the acceptance gate passes. Only a spent chaining
    /// retry or corrupt cell data ends the call with an error.
    pub fn next_phrase(&mut self) -> LickResult<Phrase> {
        let phrase_type = match self.color_mode {
            ColorMode::Cycle if self.phrase_type.is_sus4() => {
                self.phrase_type.with_color(Some(self.colors.next_item()))
            }
            _ => self.phrase_type,
        };
        let mut tonic = self.fixed_key.unwrap_or_else(|| self.keys.next_item());
        let mut rejections: u32 = 0;

        loop {
            let plan = keymap::plan(phrase_type, tonic);
            let reason = match self.build(phrase_type, &plan) {
                Ok(notes) => match gate::check(&notes, phrase_type.expected_len(), self.config.range) {
                    GateVerdict::Accept => {
                        return Ok(Phrase {
                            phrase_type,
                            tonic,
                            generation_key: plan.generation_key,
                            notes,
                            regenerations: rejections,
                        })
                    }
                    verdict => verdict.to_string(),
                },
                Err(e @ LickError::Unspellable { .. }) => e.to_string(),
                Err(e) => return Err(e),
            };

            rejections += 1;
            debug!("rejected {phrase_type} in {tonic}: {reason}");
            let interval = self.config.rejection_warn_interval;
            if interval > 0 && rejections % interval == 0 {
                warn!("{rejections} consecutive rejections generating {phrase_type}");
            }
            if self.fixed_key.is_none() {
                tonic = self.keys.next_item();
            }
        }
    }

    /// Assemble, validate and transpose one candidate.
    fn build(&mut self, phrase_type: PhraseType, plan: &KeyPlan) -> LickResult<Vec<Note>> {
        let mut notes = assemble(
            phrase_type,
            &mut self.cells,
            &mut self.rng,
            self.config.max_chain_attempts,
        )?;

        let resolution = phrase_type.resolution_set();
        if let (true, Some(set)) = (phrase_type.validates_on_assembly(), resolution) {
            notes = validate_resolution(&notes, cell_set(set))?.0;
        }

        let notes = transpose_notes(&notes, plan.semitones, plan.spelling_key);
        match resolution {
            Some(set) => {
                let canonical = transposed_set(set, plan);
                Ok(validate_resolution(&notes, &canonical)?.0)
            }
            None => Ok(notes),
        }
    }
}

/// Canonical cells moved into the phrase's target key.
fn transposed_set(set: CellSetId, plan: &KeyPlan) -> Vec<Cell> {
    cell_set(set)
        .iter()
        .map(|c| c.transposed(plan.semitones, plan.spelling_key))
        .collect()
}
