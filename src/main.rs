// Stitchkit - Embroidery design batch tools
// Copyright (c) 2025 Stitchkit Contributors
// Licensed under the MIT License

use std::process;
use stitchkit::adapters::default_engine;
use stitchkit::cli::commands::get_design;
use stitchkit::config::ToolSettings;
use stitchkit::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let settings = match ToolSettings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let _guard = match init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "librarian-util");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let engine = default_engine();

    let exit_code = match get_design::execute(&args, engine.as_ref(), &settings) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // Release the engine session before exiting
    drop(engine);
    drop(_guard);
    process::exit(exit_code);
}
