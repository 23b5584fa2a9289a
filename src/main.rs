use std::fs;

use anyhow::Result;
use clap::Parser;

use csvconv::cli::{handle_error, Args, CliConfig, CliUtils, Target};
use csvconv::conversion::ConversionEngine;
use csvconv::error::{ConversionError, ConversionResult};

fn main() -> Result<()> {
    let args = Args::parse();
    match run(args) {
        Ok(()) => Ok(()),
        Err(error) => {
            handle_error(&error);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> ConversionResult<()> {
    let cli = CliConfig::from_args(args)?;
    let input = cli.source()?.read()?;
    let engine = ConversionEngine::new(cli.conversion_config.clone());

    let result = match cli.args.to {
        Target::Csv => engine.json_to_csv(&input)?,
        Target::Json => engine.csv_to_json(&input)?,
    };

    if cli.want_stats() {
        eprintln!("{}", result.stats.summary());
    }

    match &cli.args.output {
        Some(path) => {
            fs::write(path, &result.content).map_err(|e| {
                ConversionError::io(format!("failed to write output: {e}"), Some(path.clone()))
            })?;
            CliUtils::show_success(&format!("wrote {}", path.display()), cli.is_quiet());
        }
        None => println!("{}", result.content),
    }

    Ok(())
}
