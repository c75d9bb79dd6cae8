//! GetDesign command implementation
//!
//! Validates the command line, then runs the library export and prints a
//! summary. Exit codes: 0 success or no matches, 1 export failure, 2 usage
//! error, 4 connection failure.

use crate::cli::dispatcher::dispatch;
use crate::config::ToolSettings;
use crate::core::export::{ExportReport, ExportSettings, ExportStatus, LibraryExportPipeline};
use crate::engine::DesignEngine;
use std::io;

/// Execute `GetDesign` for raw arguments (program name excluded)
pub fn execute(
    args: &[String],
    engine: &dyn DesignEngine,
    settings: &ToolSettings,
) -> anyhow::Result<i32> {
    let command = {
        let mut stdout = io::stdout().lock();
        match dispatch(args, &mut stdout)? {
            Some(command) => command,
            None => return Ok(2),
        }
    };

    let export_settings = ExportSettings::default().with_error_policy(settings.error_policy);
    let pipeline = LibraryExportPipeline::new(engine, export_settings);
    let report = pipeline.run(&command);

    for line in outcome_lines(&report) {
        println!("{line}");
    }

    Ok(report.exit_code())
}

/// Closing lines printed after the pipeline's own progress output
fn outcome_lines(report: &ExportReport) -> Vec<String> {
    match &report.status {
        ExportStatus::Completed => {
            let mut lines = vec![
                String::new(),
                "Export Summary:".to_string(),
                format!(
                    "  Started:  {}",
                    report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
                ),
                format!("  Matched:  {}", report.matched),
                format!("  Exported: {}", report.exported.len()),
                format!("  Failed:   {}", report.failures.len()),
                format!("  Duration: {:.2}s", report.duration.as_secs_f64()),
            ];
            lines.extend(
                report
                    .failures
                    .iter()
                    .map(|failure| format!("  - {}: {}", failure.design, failure.message)),
            );
            lines
        }
        ExportStatus::Aborted { .. } => vec![format!(
            "Exported {} of {} design(s) before stopping.",
            report.exported.len(),
            report.matched
        )],
        // The pipeline has already reported why nothing was exported.
        ExportStatus::NoMatches | ExportStatus::ConnectionFailed { .. } => Vec::new(),
    }
}
