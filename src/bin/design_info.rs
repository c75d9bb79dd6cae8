// Stitchkit - Embroidery design batch tools
// Copyright (c) 2025 Stitchkit Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use stitchkit::adapters::default_engine;
use stitchkit::cli::DesignInfoCli;
use stitchkit::config::ToolSettings;
use stitchkit::logging::init_logging;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = DesignInfoCli::parse();

    let mut settings = match ToolSettings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    if let Some(level) = &cli.log_level {
        settings.logging.level = level.to_lowercase();
        if let Err(e) = settings.validate() {
            eprintln!("{e}");
            process::exit(2);
        }
    }

    let guard = match init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    let engine = default_engine();
    let exit_code = match cli.summarize.execute(engine.as_ref()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    drop(engine);
    drop(guard);
    process::exit(exit_code);
}
