//! Persistence of the component registry.
//!
//! The registry is written as a compact JSON object:
//! `{"<extensible class>": {"<component name>": "<component class>"}}`.

use crate::error::Result;
use plugin_scanner_api::ComponentRegistry;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub struct RegistryWriter;

impl RegistryWriter {
    /// Write the registry to `output_file`, creating its parent directory first.
    pub fn write_to_file(registry: &ComponentRegistry, output_file: &Path) -> Result<()> {
        if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(output_file)?;
        Self::write_to(registry, BufWriter::new(file))?;

        info!(
            "Wrote {} extensible types to {}",
            registry.len(),
            output_file.display()
        );
        Ok(())
    }

    pub fn write_to<W: Write>(registry: &ComponentRegistry, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, registry)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from_file(input_file: &Path) -> Result<ComponentRegistry> {
        let file = File::open(input_file)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
