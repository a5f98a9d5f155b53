//! # tableview
//!
//! Render a JSON dataset as an HTML table from the command line.
//!
//! ## Overview
//!
//! tableview is a thin wrapper over tableviewlib. It reads a dataset (a JSON
//! object of label → values, or an array of rows), applies render options
//! from an optional JSON config file and from flags, and prints the markup.
//!
//! ## Usage
//!
//! ```bash
//! # Rows with leading label headers
//! tableview data.json --headers front
//!
//! # Entries as columns, labels in thead and tfoot
//! echo '{"x": [1, 2], "y": [3, 4]}' | tableview -o horizontal -H both
//!
//! # Custom order, promote a row to headers, per-cell classes
//! tableview data.json --sort y,x -x total --label-classes --class-prefix col-
//!
//! # Options from a file, flags still win
//! tableview data.json --config table.json --id report
//!
//! # Only report the table's shape
//! tableview data.json --shape
//! ```

mod config;

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tableviewlib::TableView;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tableview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a JSON dataset as an HTML table")
        .arg(
            Arg::new("input")
                .help("JSON dataset to read (defaults to stdin, or use '-')"),
        )
        .arg(
            Arg::new("orientation")
                .short('o')
                .long("orientation")
                .value_parser(["horizontal", "vertical"])
                .help("Lay entries out as columns (horizontal) or rows (vertical)"),
        )
        .arg(
            Arg::new("headers")
                .short('H')
                .long("headers")
                .value_parser(["none", "front", "back", "both"])
                .help("Where to show labels as header cells"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_delimiter(',')
                .help("Explicit label order (comma-separated, must list every label once)"),
        )
        .arg(
            Arg::new("extra-header")
                .short('x')
                .long("extra-header")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Render this label's cells as th (can be specified multiple times)"),
        )
        .arg(
            Arg::new("label-classes")
                .long("label-classes")
                .action(ArgAction::SetTrue)
                .help("Add a class named after each cell's label"),
        )
        .arg(
            Arg::new("class-prefix")
                .long("class-prefix")
                .help("Prefix for label-derived class names (default: data)"),
        )
        .arg(Arg::new("id").long("id").help("id attribute of the table"))
        .arg(
            Arg::new("class")
                .long("class")
                .help("Extra class on the table, after the orientation class"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON file with render options; flags override it"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail instead of printing an empty table on an invalid sort order"),
        )
        .arg(
            Arg::new("shape")
                .long("shape")
                .action(ArgAction::SetTrue)
                .help("Print 'ROWS x COLUMNS' instead of markup"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

/// Read the dataset text from a file, or stdin for `-`/no argument
fn read_input(matches: &ArgMatches) -> anyhow::Result<String> {
    match matches.get_one::<String>("input").map(|s| s.as_str()) {
        None | Some("-") => {
            log::debug!("reading dataset from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read dataset from stdin")?;
            Ok(text)
        }
        Some(path) => {
            log::debug!("reading dataset from {}", path);
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset '{}'", path))
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = config::build_options(matches)?;
    let text = read_input(matches)?;
    let value: serde_json::Value =
        serde_json::from_str(&text).context("dataset is not valid JSON")?;

    let view = TableView::from_json(&value, options)?;
    log::debug!("dataset is {} x {}", view.rows(), view.columns());

    if matches.get_flag("shape") {
        println!("{} x {}", view.rows(), view.columns());
        return Ok(());
    }

    let html = if matches.get_flag("strict") {
        view.try_render()?
    } else {
        view.render()
    };
    println!("{}", html);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_input_defaults_to_stdin() {
        let matches = build_command().get_matches_from(["tableview"]);
        assert!(matches.get_one::<String>("input").is_none());
    }
}
