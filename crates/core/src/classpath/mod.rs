//! Classpath assembly.
//!
//! A classpath is an ordered list of directories and archives. Each entry is
//! turned into a [`ClassSource`] and every class it yields is parsed into a
//! [`ParsedClass`].

use crate::classfile::ParsedClass;
use crate::error::{Result, ScanError};
use plugin_scanner_api::ClassSource;
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod directory;
mod jar;

pub use directory::DirectorySource;
pub use jar::JarSource;

#[derive(Debug, Default, Clone)]
pub struct Classpath {
    entries: Vec<PathBuf>,
}

impl Classpath {
    pub fn new(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a platform path list (`:`-separated on Unix, `;` on Windows)
    pub fn from_path_list(list: &OsStr) -> Self {
        Self::new(std::env::split_paths(list).filter(|p| !p.as_os_str().is_empty()))
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One source per existing entry; missing entries are skipped
    pub fn sources(&self) -> Vec<Box<dyn ClassSource>> {
        let mut sources: Vec<Box<dyn ClassSource>> = Vec::new();
        for entry in &self.entries {
            if entry.is_dir() {
                sources.push(Box::new(DirectorySource::new(entry.clone())));
            } else if entry.is_file() {
                sources.push(Box::new(JarSource::new(entry.clone())));
            } else {
                warn!("Skipping missing classpath entry {}", entry.display());
            }
        }
        sources
    }

    /// Read and parse every class reachable from this classpath
    pub fn load(&self) -> Result<Vec<ParsedClass>> {
        let mut parsed = Vec::new();

        for source in self.sources() {
            let name = source.name();
            let classes = source.classes().map_err(|e| ScanError::ClassFormat {
                origin: name.clone(),
                message: e.to_string(),
            })?;
            debug!("Read {} classes from {}", classes.len(), name);

            for class in classes {
                parsed.push(ParsedClass::parse(class)?);
            }
        }

        info!(
            "Loaded {} classes from {} classpath entries",
            parsed.len(),
            self.entries.len()
        );
        Ok(parsed)
    }
}
