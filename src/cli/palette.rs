use clap::Args;
use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{ChromaError, Result};
use crate::math::nearest_legacy;
use crate::output::{plural, Printer};
use crate::types::{Colour, LegacyPalette, PaletteEntry};

/// List the legacy palette or find the nearest entry
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print only the entry nearest to this colour (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub nearest: Option<String>,

    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct NearestReport<'a> {
    input: String,
    nearest: &'a PaletteEntry,
    distance: u32,
}

/// One `CODE NAME #RRGGBB` line per entry.
pub fn format_entries(palette: &LegacyPalette) -> Vec<String> {
    palette
        .entries()
        .iter()
        .map(|e| format!("{} {:<14} {}", e.code, e.name, e.colour))
        .collect()
}

pub fn run(args: PaletteArgs, config: EngineConfig, printer: &Printer) -> Result<()> {
    let palette = config.legacy_palette()?;

    if let Some(hex) = &args.nearest {
        let colour = Colour::from_hex(hex)?;
        let entry = nearest_legacy(&palette, colour);

        if args.json {
            let report = NearestReport {
                input: colour.to_string(),
                nearest: entry,
                distance: entry.colour.distance_squared(colour),
            };
            println!("{}", to_json(&report)?);
        } else {
            println!("{} {} {}", entry.code, entry.name, entry.colour);
        }
        return Ok(());
    }

    if args.json {
        println!("{}", to_json(&palette.entries())?);
    } else {
        for line in format_entries(&palette) {
            println!("{line}");
        }
    }

    printer.status("Listed", &plural(palette.len(), "entry", "entries"));
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| ChromaError::Usage {
        message: format!("Failed to serialize JSON: {}", e),
        help: None,
    })
}
