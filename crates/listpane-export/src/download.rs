//! Delivery of finished exports.
//!
//! The exporter only produces a [`CsvExport`]; where the bytes end up is up
//! to a [`Download`] implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};
use crate::writer::CsvExport;

/// Hands a finished export to its destination.
pub trait Download {
    fn deliver(&mut self, export: &CsvExport) -> Result<()>;
}

/// Writes each export as `<dir>/<filename>`, replacing any existing file.
#[derive(Debug, Clone)]
pub struct DirectoryDownload {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryDownload {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Target path for `filename`. Anything but a bare file name is rejected.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf> {
        let name = Path::new(filename);
        match name.file_name() {
            Some(base) if base == name.as_os_str() => Ok(self.dir.join(base)),
            _ => Err(ExportError::InvalidFilename(filename.to_string())),
        }
    }
}

impl Download for DirectoryDownload {
    fn deliver(&mut self, export: &CsvExport) -> Result<()> {
        let path = self.path_for(&export.filename)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, export.contents.as_bytes())?;
        log::debug!("wrote {} bytes to {}", export.contents.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps exports in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDownload {
    exports: Vec<CsvExport>,
}

impl MemoryDownload {
    pub fn new() -> Self {
        MemoryDownload::default()
    }

    pub fn exports(&self) -> &[CsvExport] {
        &self.exports
    }

    pub fn last(&self) -> Option<&CsvExport> {
        self.exports.last()
    }

    pub fn into_exports(self) -> Vec<CsvExport> {
        self.exports
    }
}

impl Download for MemoryDownload {
    fn deliver(&mut self, export: &CsvExport) -> Result<()> {
        self.exports.push(export.clone());
        Ok(())
    }
}
