//! `ClassDescriptor` implementation backed by `ristretto_classfile`.

use crate::error::{Result, ScanError};
use plugin_scanner_api::{AnnotationInfo, BoxError, ClassBytes, ClassDescriptor};
use ristretto_classfile::ClassFile;
use ristretto_classfile::attributes::Attribute;
use std::io::Cursor;

mod converter;
use converter::AnnotationConverter;

/// A parsed class file together with the location it was read from
#[derive(Debug)]
pub struct ParsedClass {
    origin: String,
    class_file: ClassFile,
}

impl ParsedClass {
    pub fn parse(class: ClassBytes) -> Result<Self> {
        let ClassBytes { origin, bytes } = class;
        let class_file =
            ClassFile::from_bytes(&mut Cursor::new(bytes)).map_err(|e| ScanError::ClassFormat {
                origin: origin.clone(),
                message: format!("{e:?}"),
            })?;
        Ok(Self { origin, class_file })
    }

    pub fn class_file(&self) -> &ClassFile {
        &self.class_file
    }
}

impl ClassDescriptor for ParsedClass {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn class_name(&self) -> std::result::Result<String, BoxError> {
        let name = self
            .class_file
            .class_name()
            .map_err(|e| format!("Failed to resolve class name: {e:?}"))?;
        Ok(name.to_string())
    }

    fn class_annotations(&self) -> std::result::Result<Vec<AnnotationInfo>, BoxError> {
        let constant_pool = &self.class_file.constant_pool;
        let mut found = Vec::new();

        // Only attributes of the class itself; field and method attributes live elsewhere
        for attribute in &self.class_file.attributes {
            match attribute {
                Attribute::RuntimeVisibleAnnotations { annotations, .. }
                | Attribute::RuntimeInvisibleAnnotations { annotations, .. } => {
                    for annotation in annotations {
                        found.push(AnnotationConverter::convert(constant_pool, annotation)?);
                    }
                }
                _ => {}
            }
        }

        Ok(found)
    }
}
