//! Design file discovery

use crate::domain::{Result, StitchError};
use crate::engine::FileFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect `.pcf`/`.pxf` files under `input`
///
/// Entries are visited in file-name order within each directory so repeated
/// runs see the same sequence.
///
/// # Errors
///
/// Returns an error if `input` is not a directory or a directory cannot be read.
pub fn discover_designs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Err(StitchError::Io(format!(
            "Input folder not found: {}",
            input.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_design_file(entry.path()) {
            tracing::debug!(path = %entry.path().display(), "Discovered design");
            files.push(entry.into_path());
        }
    }

    tracing::info!(count = files.len(), input = %input.display(), "Discovered design files");
    Ok(files)
}

fn is_design_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(FileFormat::from_extension)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discovers_nested_designs_case_insensitively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("spring/roses")).unwrap();
        fs::write(dir.path().join("b.PXF"), "{}").unwrap();
        fs::write(dir.path().join("a.pcf"), "{}").unwrap();
        fs::write(dir.path().join("spring/roses/c.pcf"), "{}").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();
        fs::write(dir.path().join("spring/pcf"), "").unwrap();

        let files = discover_designs(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.pcf", "b.PXF", "c.pcf"]);
    }

    #[test]
    fn test_missing_input_folder() {
        let dir = TempDir::new().unwrap();
        let result = discover_designs(&dir.path().join("missing"));
        assert!(matches!(result, Err(StitchError::Io(_))));
    }
}
