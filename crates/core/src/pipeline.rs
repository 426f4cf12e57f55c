//! End-to-end run: classpath -> two scanner passes -> registry file.

use crate::classpath::Classpath;
use crate::error::{Result, ScanError};
use crate::registry::RegistryWriter;
use crate::scanner::NamedComponentScanner;
use plugin_scanner_api::{AnnotationId, ComponentRegistry};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub classpath: Classpath,
    pub extensible_annotation: AnnotationId,
    pub named_annotation: AnnotationId,
    pub output: PathBuf,
}

impl ScannerConfig {
    /// Config using the default plugin API annotations
    pub fn new(classpath: Classpath, output: PathBuf) -> Self {
        Self {
            classpath,
            extensible_annotation: AnnotationId::of_class(crate::scanner::EXTENSIBLE_ANNOTATION),
            named_annotation: AnnotationId::of_class(crate::scanner::NAMED_COMPONENT_ANNOTATION),
            output,
        }
    }
}

/// Scan the configured classpath without touching the output file.
pub fn scan(config: &ScannerConfig) -> Result<ComponentRegistry> {
    info!(
        "Scanning {} classpath entries for @{} components",
        config.classpath.entries().len(),
        config.named_annotation
    );

    let classes = config.classpath.load()?;
    let scanner = NamedComponentScanner::with_annotations(
        config.extensible_annotation.clone(),
        config.named_annotation.clone(),
    );
    scanner.scan_for_named_classes(&classes)
}

/// Scan the configured classpath and write the registry.
///
/// Nothing is written unless every class parsed and every component validated.
pub fn scan_to_file(config: &ScannerConfig) -> Result<ComponentRegistry> {
    let registry = scan(config)?;
    RegistryWriter::write_to_file(&registry, &config.output)?;
    Ok(registry)
}

/// Scan and compare against the registry already stored at the output path.
///
/// Fails with `OutOfDate` when the stored registry differs from a fresh scan.
pub fn check_file(config: &ScannerConfig) -> Result<ComponentRegistry> {
    let registry = scan(config)?;
    let stored = RegistryWriter::read_from_file(&config.output)?;
    if stored != registry {
        return Err(ScanError::OutOfDate {
            path: config.output.display().to_string(),
        });
    }
    info!("Registry at {} is up to date", config.output.display());
    Ok(registry)
}
