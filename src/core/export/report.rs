//! Export report
//!
//! Records what one library export run did and how it ended.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// How an export run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Every matched design was processed
    Completed,
    /// The search returned no designs
    NoMatches,
    /// Connecting, opening the database or searching failed
    ConnectionFailed { message: String },
    /// A design failed under the fail-fast policy and the loop stopped
    Aborted { design: String, message: String },
}

/// A design that failed while the loop carried on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignFailure {
    pub design: String,
    pub message: String,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Server the run connected to
    pub server: String,

    /// Number of designs the search returned
    pub matched: usize,

    /// Files written, in export order
    pub exported: Vec<PathBuf>,

    /// Designs skipped under the continue-on-error policy
    pub failures: Vec<DesignFailure>,

    pub status: ExportStatus,

    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,

    pub duration: Duration,
}

impl ExportReport {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            matched: 0,
            exported: Vec::new(),
            failures: Vec::new(),
            status: ExportStatus::Completed,
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn record_export(&mut self, path: PathBuf) {
        self.exported.push(path);
    }

    pub fn record_failure(&mut self, design: impl Into<String>, message: impl Into<String>) {
        self.failures.push(DesignFailure {
            design: design.into(),
            message: message.into(),
        });
    }

    /// True when nothing failed
    pub fn is_successful(&self) -> bool {
        matches!(
            self.status,
            ExportStatus::Completed | ExportStatus::NoMatches
        ) && self.failures.is_empty()
    }

    /// Process exit code for this outcome
    ///
    /// 0 success or no matches, 1 export failure, 4 connection failure.
    pub fn exit_code(&self) -> i32 {
        match &self.status {
            ExportStatus::ConnectionFailed { .. } => 4,
            ExportStatus::Aborted { .. } => 1,
            ExportStatus::Completed | ExportStatus::NoMatches => {
                if self.failures.is_empty() {
                    0
                } else {
                    1
                }
            }
        }
    }

    /// Log the report
    pub fn log_summary(&self) {
        tracing::info!(
            server = %self.server,
            matched = self.matched,
            exported = self.exported.len(),
            failed = self.failures.len(),
            status = ?self.status,
            started_at = %self.started_at.to_rfc3339(),
            duration_ms = self.duration.as_millis() as u64,
            "Export finished"
        );

        for failure in &self.failures {
            tracing::warn!(design = %failure.design, message = %failure.message, "Design not exported");
        }
    }
}
