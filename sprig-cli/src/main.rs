//! Sprig CLI
//!
//! Builds a selector from fragment tokens and prints it.
//!
//! Usage:
//!   sprig el:a 'attr:href$=".png"' pc:focus      a[href$=".png"]:focus
//!   sprig el:div id:main + el:table id:data      div#main + table#data
//!   sprig --json el:ul '>' el:li                 selector structure as JSON

mod tokens;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use sprig_common::warning;

/// Build order-checked CSS selectors.
#[derive(Parser, Debug)]
#[command(name = "sprig", version, about)]
struct Args {
    /// Print the selector structure as JSON instead of the selector string
    #[arg(short, long)]
    json: bool,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,

    /// Fragments (`element:`, `id:`, `class:`, `attr:`, `pseudo-class:`,
    /// `pseudo-element:`) and combinators (`+`, `~`, `>`, `descendant`)
    #[arg(required = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn run(args: &Args) -> Result<()> {
    warning::set_quiet(args.quiet);

    let selector = tokens::build(args.tokens.as_slice())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&selector)?);
    } else {
        println!("{}", selector.stringify());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
