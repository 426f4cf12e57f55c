//! Class source abstraction.
//!
//! A source knows where compiled classes live (a directory tree, a jar) and
//! hands out their raw bytes. Parsing happens elsewhere.

use crate::BoxError;

/// Raw bytes of one `.class` file plus where they were read from
#[derive(Debug, Clone)]
pub struct ClassBytes {
    pub origin: String,
    pub bytes: Vec<u8>,
}

impl ClassBytes {
    pub fn new(origin: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            origin: origin.into(),
            bytes,
        }
    }
}

/// Supplier of compiled classes for one classpath entry
pub trait ClassSource {
    /// Source name (for logging/debugging)
    fn name(&self) -> String;

    /// Read every class file this source holds
    fn classes(&self) -> Result<Vec<ClassBytes>, BoxError>;
}
