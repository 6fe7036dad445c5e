//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use cql_splice_engine::ChangeStatus;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {
            // Auto-detect based on terminal
            if std::env::var("TERM").is_ok() {
                colored::control::set_override(true);
            } else {
                colored::control::set_override(false);
            }
        }
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format an apply outcome for display
pub fn format_status(status: ChangeStatus, message: &str) -> String {
    let label = match status {
        ChangeStatus::Success => "Success:".green().bold(),
        ChangeStatus::Info => "Info:".yellow().bold(),
        ChangeStatus::Danger => "Danger:".red().bold(),
    };
    format!("{label} {message}")
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
    } else {
        println!("{content}");
    }
    Ok(())
}
