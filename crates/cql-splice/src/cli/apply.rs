//! Apply command implementations

use super::output;
use anyhow::{Context, Result};
use cql_splice_engine::{ChangeResult, ChangeStatus, Code, ValueSetForSearch};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Configuration for the apply-code command
pub struct ApplyCodeConfig {
    pub file: PathBuf,
    pub code: PathBuf,
    pub in_place: bool,
    pub as_json: bool,
    pub output_file: Option<PathBuf>,
}

/// Configuration for the apply-valueset command
pub struct ApplyValuesetConfig {
    pub file: PathBuf,
    pub valueset: PathBuf,
    pub previous: Option<PathBuf>,
    pub in_place: bool,
    pub as_json: bool,
    pub output_file: Option<PathBuf>,
}

/// Apply a code descriptor to a CQL file
pub fn apply_code(config: ApplyCodeConfig) -> Result<()> {
    let cql = read_cql(&config.file)?;
    let code: Code = read_descriptor(&config.code)?;

    let result = cql_splice_engine::apply_code(&cql, &code)
        .with_context(|| format!("Failed to apply code {}", code.name))?;

    finish(
        result,
        &config.file,
        config.in_place,
        config.as_json,
        config.output_file.as_deref(),
    )
}

/// Apply a valueset descriptor to a CQL file
pub fn apply_valueset(config: ApplyValuesetConfig) -> Result<()> {
    let cql = read_cql(&config.file)?;
    let valueset: ValueSetForSearch = read_descriptor(&config.valueset)?;
    let previous: Option<ValueSetForSearch> = config
        .previous
        .as_ref()
        .map(|path| read_descriptor(path))
        .transpose()?;

    let result = cql_splice_engine::apply_valueset(&cql, &valueset, previous.as_ref())
        .with_context(|| format!("Failed to apply valueset {}", valueset.title))?;

    finish(
        result,
        &config.file,
        config.in_place,
        config.as_json,
        config.output_file.as_deref(),
    )
}

fn read_cql(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read CQL file: {}", path.display()))
}

fn read_descriptor<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse descriptor: {}", path.display()))
}

fn finish(
    result: ChangeResult,
    file: &PathBuf,
    in_place: bool,
    as_json: bool,
    output_file: Option<&std::path::Path>,
) -> Result<()> {
    eprintln!("{}", output::format_status(result.status, &result.message));

    if as_json {
        let value = json!({
            "cql": result.cql,
            "status": result.status,
            "message": result.message,
        });
        output::write_output(&serde_json::to_string_pretty(&value)?, output_file)?;
    } else if in_place {
        if result.is_change() {
            fs::write(file, &result.cql)
                .with_context(|| format!("Failed to write CQL file: {}", file.display()))?;
        }
    } else {
        output::write_output(&result.cql, output_file)?;
    }

    if result.status == ChangeStatus::Danger {
        std::process::exit(1);
    }
    Ok(())
}
