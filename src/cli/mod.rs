pub mod colorize;
pub mod completions;
pub mod palette;
pub mod strip;

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::output::Printer;

/// chromatext - colour markup for plain strings
#[derive(Parser, Debug)]
#[command(name = "chromatext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./chromatext.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace markup with style codes
    Colorize(colorize::ColorizeArgs),

    /// Remove markup, keeping the text
    Strip(strip::StripArgs),

    /// List the legacy palette or find the nearest entry
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load config from `--config` or the working directory.
pub fn load_config(path: Option<&std::path::Path>, printer: &Printer) -> Result<EngineConfig> {
    let cwd = std::env::current_dir()?;
    let (config, loaded) = EngineConfig::discover(path, &cwd)?;
    if let Some(loaded) = loaded {
        printer.info("Loaded", &loaded.display().to_string());
    }
    Ok(config)
}

/// Input lines: the joined `text` arguments, or stdin when there are none.
pub fn input_lines(text: &[String]) -> Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(vec![text.join(" ")]);
    }

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }
    Ok(lines)
}
