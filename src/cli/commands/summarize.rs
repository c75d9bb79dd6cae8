//! Summary command implementation
//!
//! Writes the design summary CSV for a folder. Exit codes: 0 success, 5 when
//! the run stops on a file-system or engine error.

use crate::core::summary::{BatchSummaryPipeline, HeightColumn};
use crate::engine::DesignEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Folder searched recursively for .pcf and .pxf files
    pub input: PathBuf,

    /// CSV file to write (replaced if it exists)
    pub output: PathBuf,

    /// Write the real design height instead of repeating the width
    #[arg(long)]
    pub true_height: bool,
}

impl SummarizeArgs {
    fn height_column(&self) -> HeightColumn {
        if self.true_height {
            HeightColumn::Actual
        } else {
            HeightColumn::RepeatWidth
        }
    }

    /// Execute the summary command
    pub fn execute(&self, engine: &dyn DesignEngine) -> anyhow::Result<i32> {
        tracing::info!(
            input = %self.input.display(),
            output = %self.output.display(),
            true_height = self.true_height,
            "Starting design summary"
        );

        let pipeline = BatchSummaryPipeline::new(engine).with_height_column(self.height_column());

        match pipeline.run(&self.input, &self.output) {
            Ok(report) => {
                println!(
                    "Wrote {} row(s) for {} design(s) to {}",
                    report.rows,
                    report.designs,
                    report.output.display()
                );
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Design summary failed");
                println!("Summary failed: {e}");
                Ok(5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::JsonEngine;
    use tempfile::TempDir;

    #[test]
    fn test_height_column_selection() {
        let mut args = SummarizeArgs {
            input: PathBuf::from("in"),
            output: PathBuf::from("out.csv"),
            true_height: false,
        };
        assert_eq!(args.height_column(), HeightColumn::RepeatWidth);

        args.true_height = true;
        assert_eq!(args.height_column(), HeightColumn::Actual);
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let args = SummarizeArgs {
            input: dir.path().join("missing"),
            output: dir.path().join("out.csv"),
            true_height: false,
        };

        assert_eq!(args.execute(&JsonEngine::new()).unwrap(), 5);
    }
}
