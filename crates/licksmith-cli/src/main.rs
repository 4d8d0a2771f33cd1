//! Licksmith CLI - Command-line interface for jazz phrase practice
//!
//! This binary generates practice phrases, lists the cell library and the
//! key table, and writes LilyPond scores.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use licksmith_cli::commands::{self, generate::GenerateArgs, ConfigArgs};
use licksmith_cli::logger;

/// Licksmith - Jazz Phrase Assembly
#[derive(Parser)]
#[command(name = "licksmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a generator config file (JSON)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Session seed (default: drawn from OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Chaining attempts per phrase before giving up
    #[arg(long, global = true)]
    max_attempts: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate phrases of one type
    Generate {
        /// Phrase type id (e.g. 7sus4, long_25_major, turnaround)
        #[arg(short = 't', long = "type")]
        phrase_type: String,

        /// Pin the tonic (default: cycle through all 12 keys)
        #[arg(short, long)]
        key: Option<String>,

        /// Number of phrases to generate
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Draw a fresh 7sus4 chord colour for every phrase
        #[arg(long)]
        cycle_colors: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Write LilyPond source to this path
        #[arg(long)]
        ly: Option<String>,

        /// Engrave only the join points
        #[arg(long, requires = "ly")]
        partial: bool,

        /// Run lilypond on the written source
        #[arg(long, requires = "ly")]
        engrave: bool,
    },

    /// List cell sets, or the cells of one set
    Cells {
        /// Cell set name (e.g. dominant, minor_c)
        #[arg(short, long)]
        set: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the key table
    Keys,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));

    let config = ConfigArgs {
        config: cli.config,
        seed: cli.seed,
        max_attempts: cli.max_attempts,
    };

    let result = match cli.command {
        Commands::Generate {
            phrase_type,
            key,
            count,
            cycle_colors,
            json,
            ly,
            partial,
            engrave,
        } => commands::generate::run(
            &GenerateArgs {
                phrase_type,
                key,
                count,
                cycle_colors,
                json,
                ly,
                partial,
                engrave,
            },
            &config,
        ),
        Commands::Cells { set, json } => commands::cells::run(set.as_deref(), json),
        Commands::Keys => commands::keys::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
