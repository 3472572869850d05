use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use chromatext::cli::{load_config, Cli, Commands};
use chromatext::output::Printer;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "chromatext=debug",
        _ => "chromatext=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Completions(args) => chromatext::cli::completions::run(args)?,
        Commands::Colorize(args) => {
            let config = load_config(cli.config.as_deref(), &printer)?;
            chromatext::cli::colorize::run(args, config, &printer)?
        }
        Commands::Strip(args) => {
            let config = load_config(cli.config.as_deref(), &printer)?;
            chromatext::cli::strip::run(args, config, &printer)?
        }
        Commands::Palette(args) => {
            let config = load_config(cli.config.as_deref(), &printer)?;
            chromatext::cli::palette::run(args, config, &printer)?
        }
    }

    Ok(())
}
