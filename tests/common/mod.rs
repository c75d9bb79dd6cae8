//! Recording engine used by the pipeline integration tests
//!
//! Every handle writes an `acquire <kind>` event when created and a
//! `release <kind>` event when dropped, so tests can check ordering and
//! exactly-once release on every exit path.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use stitchkit::adapters::json::DesignDocument;
use stitchkit::config::SecretString;
use stitchkit::domain::{Command, EngineError, Result};
use stitchkit::engine::{
    BitmapSurface, ClientType, DesignEngine, DesignStatistics, EmbDesign, FileFormat,
    ImageFormat, LibraryConnection, LibraryDesign, RenderBounds, SearchQuery, SearchResults,
    ThreadEntry, ThreadPalette,
};

pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Which engine call should fail
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub new_connection: bool,
    pub connect: bool,
    pub open_database: bool,
    pub search: bool,
    pub search_returns_none: bool,
    pub entry: Option<usize>,
    pub open_design: Option<String>,
    pub render: bool,
    pub save: bool,
}

pub struct RecordingEngine {
    designs: Vec<String>,
    faults: Faults,
    log: EventLog,
}

impl RecordingEngine {
    pub fn new(designs: &[&str]) -> Self {
        Self::with_faults(designs, Faults::default())
    }

    pub fn with_faults(designs: &[&str], faults: Faults) -> Self {
        Self {
            designs: designs.iter().map(|d| d.to_string()).collect(),
            faults,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Every acquired handle was released exactly once
    pub fn assert_balanced(&self) {
        let events = self.events();
        for event in &events {
            if let Some(kind) = event.strip_prefix("acquire ") {
                let acquired = events.iter().filter(|e| *e == event).count();
                let released = events
                    .iter()
                    .filter(|e| **e == format!("release {kind}"))
                    .count();
                assert_eq!(acquired, released, "unbalanced handle {kind}: {events:?}");
            }
        }
    }
}

fn record(log: &EventLog, event: String) {
    log.borrow_mut().push(event);
}

struct Tracked {
    kind: String,
    log: EventLog,
}

impl Tracked {
    fn acquire(log: &EventLog, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        record(log, format!("acquire {kind}"));
        Self {
            kind,
            log: log.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        record(&self.log, format!("release {}", self.kind));
    }
}

impl DesignEngine for RecordingEngine {
    fn open_design(&self, path: &Path, _format: FileFormat) -> Result<Box<dyn EmbDesign>> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Box::new(RecordingDesign {
            name: name.clone(),
            faults: self.faults.clone(),
            _tracked: Tracked::acquire(&self.log, format!("design:{name}")),
        }))
    }

    fn new_image(&self, width: u32, height: u32) -> Result<Box<dyn BitmapSurface>> {
        Ok(Box::new(RecordingSurface {
            width,
            height,
            faults: self.faults.clone(),
            _tracked: Tracked::acquire(&self.log, "surface"),
        }))
    }

    fn new_library_connection(&self) -> Result<Box<dyn LibraryConnection>> {
        if self.faults.new_connection {
            return Err(EngineError::NotConnected("engine unavailable".to_string()).into());
        }
        Ok(Box::new(RecordingConnection {
            designs: self.designs.clone(),
            faults: self.faults.clone(),
            log: self.log.clone(),
            _tracked: Tracked::acquire(&self.log, "connection"),
        }))
    }
}

struct RecordingConnection {
    designs: Vec<String>,
    faults: Faults,
    log: EventLog,
    _tracked: Tracked,
}

impl LibraryConnection for RecordingConnection {
    fn connect(
        &mut self,
        server: &str,
        port: u16,
        _user: &str,
        _password: &SecretString,
        _client_type: ClientType,
    ) -> Result<()> {
        if self.faults.connect {
            return Err(EngineError::ConnectionFailed {
                server: server.to_string(),
                port,
                message: "refused".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn open_database(&mut self, name: &str) -> Result<()> {
        if self.faults.open_database {
            return Err(EngineError::DatabaseNotFound(name.to_string()).into());
        }
        Ok(())
    }

    fn search(
        &mut self,
        query: &SearchQuery,
        _max_results: usize,
    ) -> Result<Option<Box<dyn SearchResults>>> {
        if self.faults.search {
            return Err(EngineError::QueryFailed(query.to_string()).into());
        }
        if self.faults.search_returns_none {
            return Ok(None);
        }
        Ok(Some(Box::new(RecordingResults {
            designs: self.designs.clone(),
            faults: self.faults.clone(),
            log: self.log.clone(),
            _tracked: Tracked::acquire(&self.log, "results"),
        })))
    }

    fn open_design(&mut self, name: &str) -> Result<Box<dyn EmbDesign>> {
        if self.faults.open_design.as_deref() == Some(name) {
            return Err(EngineError::DesignNotFound(name.to_string()).into());
        }
        Ok(Box::new(RecordingDesign {
            name: name.to_string(),
            faults: self.faults.clone(),
            _tracked: Tracked::acquire(&self.log, format!("design:{name}")),
        }))
    }
}

struct RecordingResults {
    designs: Vec<String>,
    faults: Faults,
    log: EventLog,
    _tracked: Tracked,
}

impl SearchResults for RecordingResults {
    fn len(&self) -> usize {
        self.designs.len()
    }

    fn entry(&self, index: usize) -> Result<Box<dyn LibraryDesign>> {
        if self.faults.entry == Some(index) {
            return Err(EngineError::QueryFailed(format!("entry {index} gone")).into());
        }
        let name = self
            .designs
            .get(index)
            .ok_or(EngineError::ResultOutOfRange {
                index,
                len: self.designs.len(),
            })?
            .clone();
        Ok(Box::new(RecordingEntry {
            _tracked: Tracked::acquire(&self.log, format!("entry:{name}")),
            name,
        }))
    }
}

struct RecordingEntry {
    name: String,
    _tracked: Tracked,
}

impl LibraryDesign for RecordingEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

struct RecordingDesign {
    name: String,
    faults: Faults,
    _tracked: Tracked,
}

impl EmbDesign for RecordingDesign {
    fn width(&self) -> i32 {
        2540
    }

    fn height(&self) -> i32 {
        1270
    }

    fn num_stitches(&self) -> u32 {
        100
    }

    fn needle_sequence(&self) -> &[u16] {
        &[]
    }

    fn thread_palettes(&self) -> &[ThreadPalette] {
        &[]
    }

    fn statistics(&self) -> Result<DesignStatistics> {
        Ok(DesignStatistics::default())
    }

    fn render(&self, _surface: &mut dyn BitmapSurface, _bounds: RenderBounds) -> Result<()> {
        if self.faults.render {
            return Err(EngineError::RenderFailed(self.name.clone()).into());
        }
        Ok(())
    }

    fn save(&self, path: &Path, _format: FileFormat) -> Result<()> {
        if self.faults.save {
            return Err(EngineError::SaveFailed {
                path: path.display().to_string(),
                message: "disk full".to_string(),
            }
            .into());
        }
        fs::write(path, self.name.as_bytes())?;
        Ok(())
    }
}

struct RecordingSurface {
    width: u32,
    height: u32,
    faults: Faults,
    _tracked: Tracked,
}

impl BitmapSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn save(&self, path: &Path, _format: ImageFormat) -> Result<()> {
        if self.faults.save {
            return Err(EngineError::SaveFailed {
                path: path.display().to_string(),
                message: "disk full".to_string(),
            }
            .into());
        }
        fs::write(path, b"raster")?;
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Parse a `GetDesign` command line for the given library and export folder
pub fn get_design(server: &Path, export: &Path, file_type: &str, pattern: &str) -> Command {
    let server = server.to_str().unwrap();
    let export = export.to_str().unwrap();
    let args = [
        "GetDesign", server, "-d", "designs", "-u", "bob", "-p", "secret", "-x", export, "-f",
        file_type, "-s", pattern,
    ];
    stitchkit::cli::parse(&args[..]).unwrap()
}

/// A design document with `palettes` palettes of `threads` threads each
pub fn design_document(palettes: usize, threads: usize, needles: &[u16]) -> DesignDocument {
    DesignDocument {
        width: 2540,
        height: 1270,
        stitches: 4200,
        color_changes: needles.len().saturating_sub(1) as u32,
        needle_sequence: needles.to_vec(),
        palettes: (0..palettes)
            .map(|p| {
                ThreadPalette::new(
                    format!("Palette {p}"),
                    (0..threads)
                        .map(|t| ThreadEntry::new(format!("Thread {t}"), format!("{p}{t:03}")))
                        .collect(),
                )
            })
            .collect(),
        path: vec![[0, 0], [2540, 0], [2540, 1270], [0, 1270], [0, 0]],
    }
}
