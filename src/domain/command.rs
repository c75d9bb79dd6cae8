//! Validated library export command
//!
//! A [`Command`] can only be built by the command dispatcher in [`crate::cli`],
//! after every required flag has been checked.

use crate::config::SecretString;
use crate::domain::ValidationError;
use secrecy::ExposeSecret;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output format requested with the `-f` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Rendered raster image
    Png,
    /// Native design file
    Pcf,
    /// Native design file, extended format
    Pxf,
}

impl FileType {
    /// Accepted `-f` values, in the order shown to users
    pub const ALLOWED: [&'static str; 3] = ["pxf", "pcf", "png"];

    /// Lower-case file extension used for exported files
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Png => "png",
            FileType::Pcf => "pcf",
            FileType::Pxf => "pxf",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for FileType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(FileType::Png),
            "pcf" => Ok(FileType::Pcf),
            "pxf" => Ok(FileType::Pxf),
            other => Err(ValidationError::InvalidFileType {
                value: other.to_string(),
                allowed: Self::ALLOWED.join(", "),
            }),
        }
    }
}

/// A validated `GetDesign` request
#[derive(Debug, Clone)]
pub struct Command {
    server_name: String,
    database: String,
    user: String,
    password: SecretString,
    export_path: PathBuf,
    file_type: FileType,
    design_pattern: String,
}

impl Command {
    pub(crate) fn new(
        server_name: String,
        database: String,
        user: String,
        password: SecretString,
        export_path: PathBuf,
        file_type: FileType,
        design_pattern: String,
    ) -> Self {
        Self {
            server_name,
            database,
            user,
            password,
            export_path,
            file_type,
            design_pattern,
        }
    }

    /// Library server host name
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Database opened on the library server
    pub fn database(&self) -> &str {
        &self.database
    }

    /// User name for the library connection
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Library password, kept behind [`secrecy::Secret`]
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Directory exported files are written to
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Design id fragment, already upper-cased
    pub fn design_pattern(&self) -> &str {
        &self.design_pattern
    }

    /// Destination for an exported design: `<export_path>/<name>.<ext>`
    pub fn export_target(&self, design_name: &str) -> PathBuf {
        self.export_path
            .join(format!("{design_name}.{}", self.file_type.extension()))
    }

    /// Lines echoed to the console before the export starts.
    ///
    /// The password is printed as typed.
    pub fn echo_lines(&self, command_token: &str) -> Vec<String> {
        vec![
            "Running command with parameters:".to_string(),
            format!("  Command:     {command_token}"),
            format!("  Server:      {}", self.server_name),
            format!("  Database:    {}", self.database),
            format!("  User:        {}", self.user),
            format!("  Password:    {}", self.password.expose_secret()),
            format!("  Design:      {}", self.design_pattern),
            format!("  Export Path: {}", self.export_path.display()),
            format!("  File Type:   {}", self.file_type),
        ]
    }
}
