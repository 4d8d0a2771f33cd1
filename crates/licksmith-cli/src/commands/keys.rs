//! Keys command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use licksmith_engine::keymap::sus4_roots;
use licksmith_engine::Key;

/// Run the keys command
///
/// Prints each key with its offset from C, its spelling preference and the
/// chords its 7sus4 material covers.
pub fn run() -> Result<ExitCode> {
    println!("{}", "Keys".cyan().bold());
    for key in Key::ALL {
        println!("  {}", describe(key));
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(key: Key) -> String {
    let spelling = if key.is_sharp_context() { "sharps" } else { "flats" };
    let [minor, dominant, half_dim, altered] = sus4_roots(key);
    format!(
        "{:<3} {:>2}  {:<6} 7sus4 over {}m {}7 {}ø7 {}7Alt",
        key.name(),
        key.semitones(),
        spelling,
        minor,
        dominant,
        half_dim,
        altered
    )
}
