//! Cells command implementation
//!
//! Lists the cell library: every set with its size, or the cells of one set.

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use colored::Colorize;
use licksmith_engine::{library, Cell, CellSetId};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SetSummary {
    name: CellSetId,
    size: usize,
}

/// Run the cells command
///
/// # Arguments
/// * `set` - Name of one set to list in full (default: summary of all sets)
/// * `json` - Whether to output JSON
pub fn run(set: Option<&str>, json: bool) -> Result<ExitCode> {
    match set {
        Some(name) => {
            let id = parse_set(name)?;
            let cells = library().get(id);
            if json {
                println!("{}", serde_json::to_string_pretty(cells)?);
            } else {
                println!("{} ({} cells)", id.as_str().cyan().bold(), cells.len());
                print_cells(cells);
            }
        }
        None => {
            let summary = summarize();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for entry in &summary {
                    println!("  {:<28} {:>3}", entry.name.as_str(), entry.size);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_set(name: &str) -> Result<CellSetId> {
    CellSetId::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = CellSetId::ALL.iter().map(|id| id.as_str()).collect();
        anyhow!("Unknown cell set '{}' (expected one of: {})", name, known.join(", "))
    })
}

fn summarize() -> Vec<SetSummary> {
    library()
        .iter()
        .map(|(name, cells)| SetSummary {
            name,
            size: cells.len(),
        })
        .collect()
}

fn print_cells(cells: &[Cell]) {
    for (i, cell) in cells.iter().enumerate() {
        println!("  {:>3}  {}", i, cell);
    }
}
