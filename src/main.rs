mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::app::App;
use std::fs;
use std::path::{Path, PathBuf};
use txkv::{CommandOutcome, KvDatabase};

#[derive(Parser)]
#[command(name = "txkv")]
#[command(about = "In-memory key-value store with nested transactions")]
struct Cli {
    /// Run commands from a file and print outcomes, instead of starting
    /// the interactive shell
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.script {
        Some(path) => run_script(&path),
        None => {
            let mut app = App::new();
            app.run().context("terminal session failed")?;
            Ok(())
        }
    }
}

fn run_script(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut db = KvDatabase::new();
    for line in text.lines() {
        println!("> {}", line);
        match db.execute(line) {
            None => {}
            Some(CommandOutcome::Success { payload }) if payload.is_empty() => println!("OK"),
            Some(CommandOutcome::Success { payload }) => println!("{}", payload),
            Some(CommandOutcome::Failure { message }) => println!("{}", message),
        }
    }
    Ok(())
}
