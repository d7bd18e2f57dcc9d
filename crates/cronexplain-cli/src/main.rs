//! cronexplain - explain a crontab expression
//!
//! This binary parses a five-field crontab expression and prints the
//! concrete values each field matches, one line per field.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use cronexplain_cli::render;

/// Expand a crontab expression into the values each field matches
#[derive(Parser)]
#[command(name = "cronexplain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A crontab expression, e.g. "*/15 0 1,15 * 1-5 /usr/bin/find"
    /// (quote it so the shell passes it as one argument)
    expression: String,

    /// Output machine-readable JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn run(expression: &str, json: bool) -> anyhow::Result<()> {
    let schedule = cronexplain_expr::parse(expression)
        .with_context(|| format!("failed to parse crontab expression {:?}", expression))?;

    if json {
        println!(
            "{}",
            render::render_json(&schedule).context("failed to serialize schedule")?
        );
    } else {
        println!("{}", render::render_table(&schedule));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli.expression, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
