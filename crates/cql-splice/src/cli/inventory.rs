//! Inventory command implementation

use super::output;
use anyhow::{Context, Result};
use colored::Colorize;
use cql_splice_parser::Declarations;
use std::fs;
use std::path::PathBuf;

/// Configuration for the inventory command
pub struct InventoryConfig {
    pub files: Vec<PathBuf>,
    pub as_json: bool,
    pub output_file: Option<PathBuf>,
}

/// Scan CQL files and print their declaration inventories
///
/// Doubles as a syntax check for the terminology header: a malformed
/// declaration fails the scan and the command exits nonzero.
pub fn inventory(config: InventoryConfig) -> Result<()> {
    if config.files.is_empty() {
        anyhow::bail!("No files specified");
    }

    for file in &config.files {
        let source = fs::read_to_string(file)
            .with_context(|| format!("Failed to read CQL file: {}", file.display()))?;
        let decls = cql_splice_parser::scan(&source)
            .with_context(|| format!("Failed to scan: {}", file.display()))?;

        if config.as_json {
            output::write_output(
                &serde_json::to_string_pretty(&decls)?,
                config.output_file.as_deref(),
            )?;
        } else {
            print_inventory(file, &decls);
        }
    }

    Ok(())
}

fn print_inventory(file: &PathBuf, decls: &Declarations) {
    println!("{}", file.display().to_string().cyan());

    if let Some(library) = &decls.library {
        println!("  {:>4}  library {}", library.span.start.line, library.name);
    }
    if let Some(using) = &decls.using {
        println!("  {:>4}  using {}", using.span.start.line, using.model);
    }
    for include in &decls.includes {
        println!("  {:>4}  include {}", include.span.start.line, include.library);
    }
    for cs in &decls.code_systems {
        println!("  {:>4}  codesystem {}", cs.span.start.line, cs.name);
    }
    for vs in &decls.value_sets {
        println!("  {:>4}  valueset {}", vs.span.start.line, vs.name);
    }
    for code in &decls.codes {
        println!("  {:>4}  code {}", code.span.start.line, code.name);
    }

    if decls.is_empty() {
        println!("  (no declarations)");
    }
}
