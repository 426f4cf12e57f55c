//! Shared abstractions for the plugin scanner.
//!
//! The scanner never talks to a class-file parser directly. It works against
//! the [`ClassDescriptor`] capability defined here, and receives raw class
//! bytes from [`ClassSource`] implementations.

pub mod descriptor;
pub mod registry;
pub mod source;

pub use descriptor::{AnnotationId, AnnotationInfo, ClassDescriptor, ClassStub, ElementValue};
pub use registry::ComponentRegistry;
pub use source::{ClassBytes, ClassSource};

/// Error type returned by descriptor and source implementations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
