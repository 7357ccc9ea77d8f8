//! `dup` CLI — copy, inspect, and query JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Structurally copy a JSON document (stdin → stdout)
//! echo '{"name":"a","data":[]}' | dup copy
//!
//! # Copy from file to file, pretty-printed
//! dup copy -i data.json -o copy.json --pretty
//!
//! # Use the explicit-stack cloner for deeply nested documents
//! dup copy --iterative -i deep.json
//!
//! # Show node counts and nesting depth
//! dup stats -i data.json
//! dup stats --json -i data.json
//!
//! # Extract a field from every element of a top-level array
//! echo '[{"title":"a"},{"title":"b"}]' | dup pluck --key title
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dup_core::{from_json, seq, to_json, to_json_pretty, Value};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "dup",
    version,
    about = "Structural copy and query tool for JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Structurally copy a JSON document (parse, clone, print)
    Copy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Use the explicit-stack cloner (bounded call-stack use)
        #[arg(long)]
        iterative: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show node counts and maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract a field from every element of a top-level array
    Pluck {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Field name to extract
        #[arg(short, long)]
        key: String,
    },
}

/// Node counts by kind plus the maximum nesting depth (root = 1). The
/// depth is the number that decides between the recursive and the
/// explicit-stack cloner.
#[derive(Default, Serialize)]
struct StatsReport {
    nodes: usize,
    scalars: usize,
    sequences: usize,
    mappings: usize,
    max_depth: usize,
}

fn collect_stats(value: &Value, depth: usize, report: &mut StatsReport) {
    report.nodes += 1;
    report.max_depth = report.max_depth.max(depth);
    match value {
        Value::Sequence(items) => {
            report.sequences += 1;
            for item in items {
                collect_stats(item, depth + 1, report);
            }
        }
        Value::Mapping(entries) => {
            report.mappings += 1;
            for (_, child) in entries {
                collect_stats(child, depth + 1, report);
            }
        }
        _ => report.scalars += 1,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // If no subcommand was provided, print help and exit.
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            Cli::parse_from(["dup", "--help"]);
            unreachable!();
        }
    };

    match command {
        Commands::Copy {
            input,
            output,
            iterative,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let value = from_json(&raw).context("Failed to parse JSON input")?;
            let copy = if iterative {
                value.deep_clone_iterative()
            } else {
                value.clone()
            };
            let rendered = if pretty {
                to_json_pretty(&copy)
            } else {
                to_json(&copy)
            }
            .context("Failed to serialize the copy")?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Stats { input, json } => {
            let raw = read_input(input.as_deref())?;
            let value = from_json(&raw).context("Failed to parse JSON input")?;
            let mut report = StatsReport::default();
            collect_stats(&value, 1, &mut report);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Nodes:      {}", report.nodes);
                println!("Scalars:    {}", report.scalars);
                println!("Sequences:  {}", report.sequences);
                println!("Mappings:   {}", report.mappings);
                println!("Max depth:  {}", report.max_depth);
            }
        }
        Commands::Pluck { input, output, key } => {
            let raw = read_input(input.as_deref())?;
            let value = from_json(&raw).context("Failed to parse JSON input")?;
            let items = value
                .as_sequence()
                .context("Input must be a top-level JSON array")?;
            let plucked = Value::Sequence(seq::pluck(items, &key));
            let rendered = to_json(&plucked).context("Failed to serialize the result")?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
