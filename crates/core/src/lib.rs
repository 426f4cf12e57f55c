pub mod classfile;
pub mod classpath;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod scanner;

pub use classfile::ParsedClass;
pub use classpath::Classpath;
pub use error::{Result, ScanError};
pub use pipeline::{ScannerConfig, check_file, scan, scan_to_file};
pub use registry::RegistryWriter;
pub use scanner::{AnnotationMemberVisitor, ClassScanner, FoundClasses, NamedComponentScanner};
