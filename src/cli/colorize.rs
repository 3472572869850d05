//! Colorize command implementation.
//!
//! Each input line runs through a prioritized pipeline: placeholder
//! substitution first, markup resolution next, optional reset last.

use std::sync::Arc;

use clap::Args;

use crate::config::EngineConfig;
use crate::encode::EncoderKind;
use crate::engine::Engine;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::pipeline::{Applier, Operation, Priority, PriorityApplier};

/// Replace markup with style codes
#[derive(Args, Debug)]
pub struct ColorizeArgs {
    /// Text to colorize (reads stdin lines when omitted)
    pub text: Vec<String>,

    /// Quantize to the 16-colour legacy palette
    #[arg(long)]
    pub legacy: bool,

    /// Output encoding (overrides config)
    #[arg(long, value_enum)]
    pub encoder: Option<EncoderKind>,

    /// Substitute `{key}` with `value` before colorizing
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_placeholder)]
    pub placeholders: Vec<(String, String)>,

    /// Append a style reset to each line
    #[arg(long)]
    pub reset: bool,
}

fn parse_placeholder(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err("placeholder key must not be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

/// Operations shared by every line, built once.
pub struct LinePipeline {
    substitute: Option<Operation>,
    colorize: Operation,
    reset: Option<Operation>,
}

impl LinePipeline {
    pub fn new(engine: Arc<Engine>, full_colour: bool, args: &ColorizeArgs) -> Self {
        let substitute = (!args.placeholders.is_empty()).then(|| {
            let placeholders = args.placeholders.clone();
            Operation::new(move |s| {
                placeholders
                    .iter()
                    .fold(s.to_string(), |acc, (k, v)| acc.replace(&format!("{{{k}}}"), v))
            })
        });

        let reset = args.reset.then(|| {
            let code = engine.reset();
            Operation::new(move |s| format!("{s}{code}"))
        });

        let colorize = Operation::new(move |s| engine.colorize(s, full_colour));

        Self {
            substitute,
            colorize,
            reset,
        }
    }

    /// Run one line through the pipeline.
    pub fn run(&self, line: &str) -> Result<String> {
        let mut pipeline = PriorityApplier::new(line);
        pipeline.apply(self.colorize.clone());
        if let Some(op) = &self.reset {
            pipeline.try_apply(Some(Priority::Lowest), Some(op.clone()))?;
        }
        if let Some(op) = &self.substitute {
            pipeline.try_apply(Some(Priority::Highest), Some(op.clone()))?;
        }
        Ok(pipeline.resolve())
    }
}

pub fn run(args: ColorizeArgs, config: EngineConfig, printer: &Printer) -> Result<()> {
    let config = EngineConfig {
        encoder: args.encoder.unwrap_or(config.encoder),
        ..config
    };
    let full_colour = config.full_colour && !args.legacy;
    let engine = Arc::new(Engine::from_config(&config)?);
    let pipeline = LinePipeline::new(engine, full_colour, &args);

    let lines = super::input_lines(&args.text)?;
    if lines.is_empty() {
        printer.warning("Skipped", "no input");
        return Ok(());
    }
    for line in &lines {
        println!("{}", pipeline.run(line)?);
    }

    printer.status(
        "Colorized",
        &format!(
            "{} ({}, {})",
            plural(lines.len(), "line", "lines"),
            config.encoder,
            if full_colour { "rgb" } else { "legacy" }
        ),
    );
    Ok(())
}
