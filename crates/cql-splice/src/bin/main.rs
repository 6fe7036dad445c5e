//! CQL splice command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use cql_splice::cli::{apply, inventory, output};
use std::path::PathBuf;

/// CQL terminology splice tool
#[derive(Parser)]
#[command(name = "cql-splice")]
#[command(author, version, about = "Terminology declaration splicing for CQL documents", long_about = None)]
struct Cli {
    /// Emit the full result as JSON instead of plain CQL
    #[arg(short = 'j', long, global = true)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure a code and its codesystem are declared in a CQL file
    ApplyCode {
        /// CQL file to modify
        file: PathBuf,

        /// Code descriptor (JSON file with camelCase fields)
        #[arg(short, long)]
        code: PathBuf,

        /// Rewrite the CQL file instead of printing the result
        #[arg(short = 'i', long)]
        in_place: bool,
    },

    /// Ensure a valueset is declared in a CQL file
    ApplyValueset {
        /// CQL file to modify
        file: PathBuf,

        /// Valueset descriptor (JSON file with camelCase fields)
        #[arg(short, long)]
        valueset: PathBuf,

        /// Prior identity of the valueset when renaming or re-suffixing
        #[arg(short, long)]
        previous: Option<PathBuf>,

        /// Rewrite the CQL file instead of printing the result
        #[arg(short = 'i', long)]
        in_place: bool,
    },

    /// Scan CQL files and list their terminology declarations
    Inventory {
        /// CQL files to scan
        files: Vec<PathBuf>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Set up color output
    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::ApplyCode {
            file,
            code,
            in_place,
        } => {
            let config = apply::ApplyCodeConfig {
                file,
                code,
                in_place,
                as_json: cli.json,
                output_file: cli.output.clone(),
            };
            apply::apply_code(config)
        }

        Commands::ApplyValueset {
            file,
            valueset,
            previous,
            in_place,
        } => {
            let config = apply::ApplyValuesetConfig {
                file,
                valueset,
                previous,
                in_place,
                as_json: cli.json,
                output_file: cli.output.clone(),
            };
            apply::apply_valueset(config)
        }

        Commands::Inventory { files } => {
            let config = inventory::InventoryConfig {
                files,
                as_json: cli.json,
                output_file: cli.output.clone(),
            };
            inventory::inventory(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
