// ABOUTME: Portioner CLI - interactive recipe-scaling calculator for the terminal
// ABOUTME: Loads ingredient rows, drives a scaling session, exports text/JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portioner Project
//!
//! Usage:
//! ```bash
//! # Rows from the command line
//! portioner-cli --ingredient "Flour:200:g" --ingredient "Sugar:50:g"
//!
//! # Rows from a JSON file, with a title for export filenames
//! portioner-cli --input rows.json --title "Apple Pie"
//!
//! # Inside the loop:
//! #   show              print the current fields
//! #   set cid_0 400     change one amount, rescaling the rest
//! #   reset             return to the original amounts
//! #   export [path]     write the text export
//! #   json [path]       write the JSON export
//! #   quit              leave
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing::debug;

use portioner::config::AppConfig;
use portioner::export;
use portioner::intake::{IntakeForm, RawRow};
use portioner::logging::LoggingConfig;
use portioner::session::ScalingSession;
use portioner_core::format::display_amount;
use portioner_core::models::Recipe;

#[derive(Parser)]
#[command(
    name = "portioner-cli",
    about = "Interactive recipe-scaling calculator",
    long_about = "Loads ingredient rows, snapshots them as a recipe, and rescales every \
                  amount proportionally when any single amount changes. The current state \
                  can be exported as text or JSON at any point."
)]
struct Cli {
    /// JSON file with an array of `{name, value, measure}` rows
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Ingredient spec `name:amount[:measure]` (repeatable)
    #[arg(long = "ingredient", value_name = "SPEC")]
    ingredient: Vec<String>,

    /// Recipe title used to derive export filenames
    #[arg(long)]
    title: Option<String>,

    /// Directory export files are written into
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }
    let title = cli.title.unwrap_or_else(|| config.export_name.clone());

    let mut form = IntakeForm::new();
    if let Some(path) = &cli.input {
        for row in load_rows(path)? {
            form.add_row(row);
        }
    }
    for spec in &cli.ingredient {
        form.add_row(parse_ingredient_spec(spec)?);
    }
    if form.is_empty() {
        bail!("no ingredients given; use --input or --ingredient");
    }

    let recipe = form
        .build()
        .map_err(|err| anyhow!("[{}] {err}", err.code().as_str()))?;
    debug!(ingredients = recipe.len(), "recipe built from intake rows");

    let mut session = ScalingSession::new(recipe);
    run_loop(&mut session, &config, &title)
}

/// Read intake rows from a JSON array file.
fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let rows: Vec<RawRow> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(rows)
}

/// Parse one `name:amount[:measure]` spec into a raw intake row.
fn parse_ingredient_spec(spec: &str) -> Result<RawRow> {
    let parts: Vec<&str> = spec.splitn(3, ':').collect();
    match parts.as_slice() {
        [name, amount] => Ok(RawRow::new(*name, *amount, "")),
        [name, amount, measure] => Ok(RawRow::new(*name, *amount, *measure)),
        _ => bail!("ingredient spec '{spec}' is not in name:amount[:measure] form"),
    }
}

/// Interactive command loop. Command failures are printed and the loop keeps
/// going; only I/O failures on stdin/stdout end it early.
fn run_loop(session: &mut ScalingSession, config: &AppConfig, title: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    print_fields(session);

    loop {
        print!("portioner> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        let mut words = input.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "show" => print_fields(session),
            "set" => match (words.next(), words.next()) {
                (Some(cid), Some(amount)) => set_amount(session, cid, amount),
                _ => println!("usage: set <cid> <amount>"),
            },
            "reset" => match session.reset() {
                Ok(()) => print_fields(session),
                Err(err) => println!("error: {err}"),
            },
            "export" => export_command(session.recipe(), words.next(), config, title, false),
            "json" => export_command(session.recipe(), words.next(), config, title, true),
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("unknown command '{command}'; try help"),
        }
    }

    Ok(())
}

/// Apply a changed amount to the session, echoing the applied ratio.
fn set_amount(session: &mut ScalingSession, cid: &str, amount: &str) {
    let Ok(value) = amount.replace(',', ".").parse::<f64>() else {
        println!("'{amount}' is not a number");
        return;
    };

    match session.apply_change(cid, value) {
        Ok(ratio) => {
            println!("applied ratio {}", display_amount(ratio));
            print_fields(session);
        }
        Err(err) => println!("error: {err}"),
    }
}

/// Write the text or JSON export, defaulting the path from config and title.
fn export_command(
    recipe: &Recipe,
    path_arg: Option<&str>,
    config: &AppConfig,
    title: &str,
    as_json: bool,
) {
    let extension = if as_json { "json" } else { "txt" };
    let path = path_arg.map_or_else(
        || config.export_path(export::suggested_filename(title, extension)),
        PathBuf::from,
    );

    let result = if as_json {
        export::export_json(recipe, &path)
    } else {
        export::export_text(recipe, &path)
    };

    match result {
        Ok(report) => println!(
            "wrote {} bytes to {}",
            report.bytes_written,
            report.path.display()
        ),
        Err(err) => println!("error: {err}"),
    }
}

/// Print the current field table, one row per ingredient.
fn print_fields(session: &ScalingSession) {
    for field in session.fields() {
        println!("{:<8} {:<28} {}", field.cid, field.label, field.amount);
    }
    if !session.is_pristine() {
        println!("(scaled)");
    }
}

fn print_help() {
    println!("commands:");
    println!("  show              print the current fields");
    println!("  set <cid> <amt>   change one amount, rescaling the rest");
    println!("  reset             return to the original amounts");
    println!("  export [path]     write the text export");
    println!("  json [path]       write the JSON export");
    println!("  quit              leave");
}
