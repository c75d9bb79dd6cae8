//! Directory-backed design library
//!
//! The server name resolves to a library root directory. Each database is a
//! sub-directory and each `*.pcf`/`*.pxf` document in it is a design whose id
//! is the file stem. The port and client type are accepted for interface
//! parity and only logged.

use super::engine::JsonDesign;
use super::models::DesignDocument;
use crate::config::SecretString;
use crate::domain::{EngineError, Result};
use crate::engine::{
    ClientType, EmbDesign, FileFormat, LibraryConnection, LibraryDesign, SearchQuery,
    SearchResults,
};
use crate::log_release;
use regex::{Regex, RegexBuilder};
use secrecy::ExposeSecret;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
struct Session {
    server: String,
    root: PathBuf,
    database: Option<PathBuf>,
}

/// Connection to a directory-backed library
#[derive(Debug, Default)]
pub struct JsonLibraryConnection {
    session: Option<Session>,
}

impl JsonLibraryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    fn database_dir(&self) -> Result<&Path> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| EngineError::NotConnected("connect first".to_string()))?;
        let database = session
            .database
            .as_deref()
            .ok_or_else(|| EngineError::NotConnected("no database open".to_string()))?;
        Ok(database)
    }
}

impl LibraryConnection for JsonLibraryConnection {
    fn connect(
        &mut self,
        server: &str,
        port: u16,
        user: &str,
        password: &SecretString,
        client_type: ClientType,
    ) -> Result<()> {
        let root = PathBuf::from(server);
        if !root.is_dir() {
            return Err(EngineError::ConnectionFailed {
                server: server.to_string(),
                port,
                message: "library root not found".to_string(),
            }
            .into());
        }
        if user.trim().is_empty() || password.expose_secret().is_blank() {
            return Err(EngineError::AuthenticationFailed(user.to_string()).into());
        }

        tracing::info!(server = %server, port, user = %user, ?client_type, "Connected to library");
        self.session = Some(Session {
            server: server.to_string(),
            root,
            database: None,
        });
        Ok(())
    }

    fn open_database(&mut self, name: &str) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| EngineError::NotConnected("connect first".to_string()))?;

        let dir = session.root.join(name);
        if name.trim().is_empty() || !dir.is_dir() {
            return Err(EngineError::DatabaseNotFound(name.to_string()).into());
        }

        tracing::debug!(server = %session.server, database = %name, "Opened database");
        session.database = Some(dir);
        Ok(())
    }

    fn search(
        &mut self,
        query: &SearchQuery,
        max_results: usize,
    ) -> Result<Option<Box<dyn SearchResults>>> {
        let database = self.database_dir()?;
        let matcher = compile_query(query)?;

        let mut names = Vec::new();
        for entry in fs::read_dir(database)? {
            let path = entry?.path();
            if !is_design_file(&path) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if matcher.is_match(stem) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        names.dedup();
        names.truncate(max_results);

        tracing::debug!(query = %query, matches = names.len(), "Search finished");
        Ok(Some(Box::new(JsonSearchResults { names })))
    }

    fn open_design(&mut self, name: &str) -> Result<Box<dyn EmbDesign>> {
        let database = self.database_dir()?;

        let path = ["pcf", "pxf"]
            .iter()
            .map(|ext| database.join(format!("{name}.{ext}")))
            .find(|p| p.is_file())
            .ok_or_else(|| EngineError::DesignNotFound(name.to_string()))?;

        let document = DesignDocument::load(&path)?;
        Ok(Box::new(JsonDesign::new(name.to_string(), document)))
    }
}

impl Drop for JsonLibraryConnection {
    fn drop(&mut self) {
        if let Some(session) = &self.session {
            log_release!("connection", session.server);
        }
    }
}

fn is_design_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(FileFormat::from_extension)
            .is_some()
}

/// Turn `[design_id] LIKE '<wildcards>'` into an anchored, case-insensitive regex
fn compile_query(query: &SearchQuery) -> Result<Regex> {
    let grammar = RegexBuilder::new(r"^\s*\[design_id\]\s+LIKE\s+'([^']*)'\s*$")
        .case_insensitive(true)
        .build()
        .map_err(|e| EngineError::QueryFailed(e.to_string()))?;

    let pattern = grammar
        .captures(query.as_str())
        .and_then(|c| c.get(1))
        .ok_or_else(|| EngineError::QueryFailed(format!("unsupported query: {query}")))?
        .as_str();

    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    RegexBuilder::new(&format!("^{body}$"))
        .case_insensitive(true)
        .build()
        .map_err(|e| EngineError::QueryFailed(e.to_string()).into())
}

/// Search matches held as design ids
#[derive(Debug)]
pub struct JsonSearchResults {
    names: Vec<String>,
}

impl SearchResults for JsonSearchResults {
    fn len(&self) -> usize {
        self.names.len()
    }

    fn entry(&self, index: usize) -> Result<Box<dyn LibraryDesign>> {
        let name = self
            .names
            .get(index)
            .ok_or(EngineError::ResultOutOfRange {
                index,
                len: self.names.len(),
            })?;
        Ok(Box::new(JsonLibraryDesign { name: name.clone() }))
    }
}

#[derive(Debug)]
struct JsonLibraryDesign {
    name: String,
}

impl LibraryDesign for JsonLibraryDesign {
    fn name(&self) -> &str {
        &self.name
    }
}
