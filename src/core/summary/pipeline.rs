//! Batch summary pipeline
//!
//! Walks a folder of design files and writes one CSV row per palette. Rows for
//! a design are buffered until the whole design has been read, then appended
//! to the output file, so a failure never leaves a half-written design behind
//! and never touches rows already flushed.

use super::discovery::discover_designs;
use super::row::{DesignRow, HeightColumn, CSV_HEADER};
use crate::domain::Result;
use crate::engine::{DesignEngine, FileFormat};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Summary of a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub output: PathBuf,
    pub designs: usize,
    pub rows: usize,
    pub duration: Duration,
}

/// Append-only CSV output
#[derive(Debug)]
pub struct CsvSink {
    path: PathBuf,
    height_column: HeightColumn,
}

impl CsvSink {
    /// Replace any existing file at `path` with a file holding only the header
    pub fn create(path: &Path, height_column: HeightColumn) -> Result<Self> {
        if path.exists() {
            fs::remove_file(path)?;
            tracing::debug!(path = %path.display(), "Removed previous summary");
        }

        let sink = Self {
            path: path.to_path_buf(),
            height_column,
        };
        sink.append_lines(std::iter::once(CSV_HEADER.to_string()))?;
        Ok(sink)
    }

    /// Append rows, each terminated by a newline
    pub fn append(&self, rows: &[DesignRow]) -> Result<()> {
        self.append_lines(rows.iter().map(|row| row.to_csv_line(self.height_column)))
    }

    fn append_lines(&self, lines: impl Iterator<Item = String>) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Produces a design summary CSV for a folder
pub struct BatchSummaryPipeline<'a> {
    engine: &'a dyn DesignEngine,
    height_column: HeightColumn,
}

impl<'a> BatchSummaryPipeline<'a> {
    pub fn new(engine: &'a dyn DesignEngine) -> Self {
        Self {
            engine,
            height_column: HeightColumn::default(),
        }
    }

    pub fn with_height_column(mut self, height_column: HeightColumn) -> Self {
        self.height_column = height_column;
        self
    }

    /// Summarise every design under `input_folder` into `output_csv`
    ///
    /// # Errors
    ///
    /// File-system and engine errors end the run. Designs completed before the
    /// failure stay in the output file.
    pub fn run(&self, input_folder: &Path, output_csv: &Path) -> Result<SummaryReport> {
        let start_time = Instant::now();
        let sink = CsvSink::create(output_csv, self.height_column)?;
        let files = discover_designs(input_folder)?;

        let mut designs = 0;
        let mut rows_written = 0;
        for file in &files {
            let rows = self.summarize_design(file)?;
            sink.append(&rows)?;
            designs += 1;
            rows_written += rows.len();
        }

        let report = SummaryReport {
            output: output_csv.to_path_buf(),
            designs,
            rows: rows_written,
            duration: start_time.elapsed(),
        };
        tracing::info!(
            designs = report.designs,
            rows = report.rows,
            output = %output_csv.display(),
            duration_ms = report.duration.as_millis() as u64,
            "Summary written"
        );
        Ok(report)
    }

    /// Build the rows for one design, one per palette
    pub fn summarize_design(&self, path: &Path) -> Result<Vec<DesignRow>> {
        let design = self.engine.open_design(path, FileFormat::Auto)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let statistics = design.statistics()?;

        let mut rows = Vec::with_capacity(design.thread_palettes().len());
        for palette in design.thread_palettes() {
            println!("Design: {file_name} Palette: {}", palette.name);

            let threads = design
                .needle_sequence()
                .iter()
                .map(|&needle| match palette.get(needle) {
                    Some(thread) => thread.clone(),
                    None => {
                        tracing::warn!(
                            design = %file_name,
                            palette = %palette.name,
                            needle,
                            "Palette has no thread for needle"
                        );
                        Default::default()
                    }
                })
                .collect();

            rows.push(DesignRow {
                design: file_name.clone(),
                width: design.width(),
                height: design.height(),
                stitches: design.num_stitches(),
                num_colors: statistics.num_colors(),
                palette: palette.name.clone(),
                threads,
            });
        }

        if rows.is_empty() {
            tracing::warn!(design = %file_name, "Design has no thread palettes");
        }
        Ok(rows)
    }
}
