//! Generate command implementation
//!
//! Builds phrases with a [`PhraseSession`] and prints them, optionally
//! writing LilyPond source and engraving it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use licksmith_engine::{
    render_lilypond, ColorMode, Key, Phrase, PhraseSession, PhraseType, ScoreView,
};
use log::info;
use serde::Serialize;

use super::ConfigArgs;

/// Options of `licksmith generate`.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Phrase type id, e.g. `long_25_major`
    pub phrase_type: String,
    /// Pinned tonic; `None` cycles through all keys
    pub key: Option<String>,
    pub count: u32,
    pub cycle_colors: bool,
    pub json: bool,
    /// Where to write LilyPond source
    pub ly: Option<String>,
    pub partial: bool,
    pub engrave: bool,
}

/// One phrase as printed by `--json`.
#[derive(Debug, Serialize)]
struct PhraseReport<'a> {
    #[serde(flatten)]
    phrase: &'a Phrase,
    length: usize,
    label: String,
}

#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    seed: u64,
    phrases: Vec<PhraseReport<'a>>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(args: &GenerateArgs, config: &ConfigArgs) -> Result<ExitCode> {
    let phrase_type: PhraseType = args
        .phrase_type
        .parse()
        .with_context(|| format!("Invalid phrase type: {}", args.phrase_type))?;
    let key = args
        .key
        .as_deref()
        .map(str::parse::<Key>)
        .transpose()
        .context("Invalid key")?;

    let (seed, phrases) = generate(phrase_type, key, args, config)?;

    if args.json {
        let report = GenerateReport {
            seed,
            phrases: phrases
                .iter()
                .map(|phrase| PhraseReport {
                    phrase,
                    length: phrase.len(),
                    label: phrase.label(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_phrases(seed, &phrases);
    }

    if let Some(ly) = &args.ly {
        let view = if args.partial {
            ScoreView::Partial
        } else {
            ScoreView::Full
        };
        let paths = write_scores(Path::new(ly), &phrases, view)?;
        if args.engrave {
            let lilypond = find_lilypond()?;
            for path in &paths {
                engrave(&lilypond, path)?;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Generate `args.count` phrases from one session, returning its seed.
pub fn generate(
    phrase_type: PhraseType,
    key: Option<Key>,
    args: &GenerateArgs,
    config: &ConfigArgs,
) -> Result<(u64, Vec<Phrase>)> {
    let config = config.load()?;
    let mode = if args.cycle_colors {
        ColorMode::Cycle
    } else {
        ColorMode::Fixed
    };
    let mut session = PhraseSession::new(phrase_type, key, config)?.with_color_mode(mode);
    info!("generating {} x {} with seed {}", args.count, phrase_type, session.seed());

    let phrases = (0..args.count)
        .map(|_| session.next_phrase())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to generate {}", phrase_type))?;
    Ok((session.seed(), phrases))
}

fn print_phrases(seed: u64, phrases: &[Phrase]) {
    println!("{}", format!("seed {}", seed).dimmed());
    for phrase in phrases {
        println!();
        println!("{}  {}", phrase.phrase_type.id().cyan().bold(), phrase.label().bold());
        println!("  {}", phrase.tokens().join(" "));
        println!(
            "  {} {} ({} notes, generated in {}, {} regenerations)",
            "->".green(),
            phrase.tonic,
            phrase.len(),
            phrase.generation_key,
            phrase.regenerations
        );
    }
}

/// Path of score `index` out of `count`: `base` itself for a single score,
/// `<stem>-<n>.ly` otherwise.
pub fn score_path(base: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "phrase".to_string());
    base.with_file_name(format!("{}-{}.ly", stem, index + 1))
}

/// Write one `.ly` file per phrase.
pub fn write_scores(base: &Path, phrases: &[Phrase], view: ScoreView) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(phrases.len());
    for (i, phrase) in phrases.iter().enumerate() {
        let path = score_path(base, i, phrases.len());
        fs::write(&path, render_lilypond(&phrase.notes, view))
            .with_context(|| format!("Failed to write score: {}", path.display()))?;
        info!("wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

/// Locate the `lilypond` executable: `LILYPOND_PATH` first, then `PATH`.
fn find_lilypond() -> Result<PathBuf> {
    if let Ok(path) = env::var("LILYPOND_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
    }
    match which::which("lilypond") {
        Ok(path) => Ok(path),
        Err(_) => bail!("lilypond not found in PATH (set LILYPOND_PATH to override)"),
    }
}

/// Engrave `score` to a PNG next to it.
fn engrave(lilypond: &Path, score: &Path) -> Result<()> {
    let output = score.with_extension("");
    let status = Command::new(lilypond)
        .arg("--png")
        .arg("-o")
        .arg(&output)
        .arg(score)
        .status()
        .with_context(|| format!("Failed to run {}", lilypond.display()))?;
    if !status.success() {
        bail!("lilypond failed on {} ({})", score.display(), status);
    }
    let mut png = output.into_os_string();
    png.push(".png");
    let png = PathBuf::from(png);
    if !png.exists() {
        bail!("lilypond exited cleanly but wrote no {}", png.display());
    }
    info!("engraved {}", png.display());
    Ok(())
}
