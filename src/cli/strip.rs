use clap::Args;

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::output::{plural, Printer};

/// Remove markup, keeping the text
#[derive(Args, Debug)]
pub struct StripArgs {
    /// Text to strip (reads stdin lines when omitted)
    pub text: Vec<String>,

    /// Also remove already-encoded style codes
    #[arg(long)]
    pub codes: bool,
}

pub fn run(args: StripArgs, config: EngineConfig, printer: &Printer) -> Result<()> {
    let engine = Engine::from_config(&config)?;

    let lines = super::input_lines(&args.text)?;
    if lines.is_empty() {
        printer.warning("Skipped", "no input");
        return Ok(());
    }
    for line in &lines {
        let stripped = engine.strip_markup(line);
        if args.codes {
            println!("{}", engine.strip_codes(&stripped));
        } else {
            println!("{stripped}");
        }
    }

    printer.status("Stripped", &plural(lines.len(), "line", "lines"));
    Ok(())
}
