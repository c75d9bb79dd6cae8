//! Library export pipeline
//!
//! Connects to a design library, searches for designs whose id contains the
//! requested pattern and exports every match. Each engine handle is owned by
//! the scope that acquired it, so on any exit path the handles drop in reverse
//! order: surface, design, result entry, result set, connection.

use super::report::{ExportReport, ExportStatus};
use crate::config::ErrorPolicy;
use crate::domain::{Command, FileType, Result, StitchError};
use crate::engine::{
    ClientType, DesignEngine, FileFormat, ImageFormat, LibraryConnection, RenderBounds,
    SearchQuery, SearchResults,
};
use std::path::PathBuf;
use std::time::Instant;

/// Port the library server listens on
pub const LIBRARY_PORT: u16 = 9000;

/// Cap on designs returned by one search
pub const MAX_SEARCH_RESULTS: usize = 1000;

/// Fixed parameters of an export run
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub port: u16,
    pub client_type: ClientType,
    pub max_results: usize,
    /// Raster size for PNG exports
    pub image_width: u32,
    pub image_height: u32,
    /// Where the design is drawn on the raster
    pub render_bounds: RenderBounds,
    pub error_policy: ErrorPolicy,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            port: LIBRARY_PORT,
            client_type: ClientType::PdlClient,
            max_results: MAX_SEARCH_RESULTS,
            image_width: 300,
            image_height: 300,
            render_bounds: RenderBounds::new(0, 0, 290, 290),
            error_policy: ErrorPolicy::FailFast,
        }
    }
}

impl ExportSettings {
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}

/// Runs one `GetDesign` command against a library
pub struct LibraryExportPipeline<'a> {
    engine: &'a dyn DesignEngine,
    settings: ExportSettings,
}

impl<'a> LibraryExportPipeline<'a> {
    pub fn new(engine: &'a dyn DesignEngine, settings: ExportSettings) -> Self {
        Self { engine, settings }
    }

    /// Execute the export
    ///
    /// Never returns an error: connection-scope failures and aborted batches
    /// are reported through [`ExportReport::status`].
    pub fn run(&self, command: &Command) -> ExportReport {
        let start_time = Instant::now();
        let mut report = ExportReport::new(command.server_name());

        tracing::info!(
            server = %command.server_name(),
            database = %command.database(),
            pattern = %command.design_pattern(),
            file_type = %command.file_type(),
            policy = %self.settings.error_policy,
            "Starting library export"
        );

        if let Err(e) = self.run_connected(command, &mut report) {
            match e {
                StitchError::Export { design, message } => {
                    println!("Export of design {design} failed: {message}");
                    tracing::error!(design = %design, error = %message, "Export aborted");
                    report.status = ExportStatus::Aborted { design, message };
                }
                other => {
                    println!("Unable to connect to server: {}", command.server_name());
                    println!("{other}");
                    tracing::error!(
                        server = %command.server_name(),
                        error = %other,
                        "Library connection failed"
                    );
                    report.status = ExportStatus::ConnectionFailed {
                        message: other.to_string(),
                    };
                }
            }
        }

        let report = report.with_duration(start_time.elapsed());
        report.log_summary();
        report
    }

    /// Connection scope: connect, open the database, search, export
    fn run_connected(&self, command: &Command, report: &mut ExportReport) -> Result<()> {
        let mut connection = self.engine.new_library_connection()?;
        connection.connect(
            command.server_name(),
            self.settings.port,
            command.user(),
            command.password(),
            self.settings.client_type,
        )?;
        connection.open_database(command.database())?;

        let query = SearchQuery::design_id_like(command.design_pattern());
        tracing::debug!(query = %query, max_results = self.settings.max_results, "Searching library");

        let results = match connection.search(&query, self.settings.max_results)? {
            Some(results) if !results.is_empty() => results,
            _ => {
                println!(
                    "No designs found matching '{}'.",
                    command.design_pattern()
                );
                tracing::info!(query = %query, "Search returned no designs");
                report.status = ExportStatus::NoMatches;
                return Ok(());
            }
        };

        report.matched = results.len();
        println!("Found {} design(s) matching the criteria.", results.len());

        self.export_all(connection.as_mut(), results.as_ref(), command, report)
    }

    /// Result-set scope: one iteration per match, strictly in order
    fn export_all(
        &self,
        connection: &mut dyn LibraryConnection,
        results: &dyn SearchResults,
        command: &Command,
        report: &mut ExportReport,
    ) -> Result<()> {
        for index in 0..results.len() {
            // The entry is released before its outcome is recorded.
            let (name, outcome) = match results.entry(index) {
                Ok(entry) => {
                    let name = entry.name().to_string();
                    println!("Exporting design: {name}");
                    let outcome = self.export_design(connection, command, &name);
                    (name, outcome)
                }
                Err(e) => (format!("#{index}"), Err(e)),
            };

            match outcome {
                Ok(path) => {
                    tracing::info!(design = %name, path = %path.display(), "Exported design");
                    report.record_export(path);
                }
                Err(e) => match self.settings.error_policy {
                    ErrorPolicy::FailFast => {
                        return Err(StitchError::Export {
                            design: name,
                            message: e.to_string(),
                        });
                    }
                    ErrorPolicy::ContinueOnError => {
                        println!("Failed to export design {name}: {e}");
                        tracing::warn!(design = %name, error = %e, "Skipping design");
                        report.record_failure(name, e.to_string());
                    }
                },
            }
        }
        Ok(())
    }

    /// Design scope: open, write in the requested format, release
    fn export_design(
        &self,
        connection: &mut dyn LibraryConnection,
        command: &Command,
        name: &str,
    ) -> Result<PathBuf> {
        let design = connection.open_design(name)?;
        let target = command.export_target(name);

        match command.file_type() {
            FileType::Png => {
                let mut surface = self
                    .engine
                    .new_image(self.settings.image_width, self.settings.image_height)?;
                design.render(surface.as_mut(), self.settings.render_bounds)?;
                surface.save(&target, ImageFormat::Png)?;
                drop(surface);
            }
            FileType::Pcf => design.save(&target, FileFormat::Pcf)?,
            FileType::Pxf => design.save(&target, FileFormat::Pxf)?,
        }

        Ok(target)
    }
}
