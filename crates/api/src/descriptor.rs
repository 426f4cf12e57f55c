//! Read-only view over one compiled class.

use crate::BoxError;
use std::fmt;

// ==================== Annotation Identity ====================

/// Binary identity of an annotation type, e.g. `Lorg/acme/Extensible;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationId(String);

impl AnnotationId {
    /// Build the identity from a class name in dotted or slashed form.
    pub fn of_class(class_name: &str) -> Self {
        Self(format!("L{};", class_name.replace('.', "/")))
    }

    /// Wrap a raw type descriptor as found in the class file.
    pub fn from_descriptor(descriptor: impl Into<String>) -> Self {
        Self(descriptor.into())
    }

    pub fn descriptor(&self) -> &str {
        &self.0
    }

    /// Class name in dotted form, or the raw descriptor when it is not an object type.
    pub fn class_name(&self) -> String {
        self.0
            .strip_prefix('L')
            .and_then(|s| s.strip_suffix(';'))
            .map(|s| s.replace('/', "."))
            .unwrap_or_else(|| self.0.clone())
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name())
    }
}

// ==================== Annotation Data ====================

/// Value of a single annotation member.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Byte(i8),
    Char(char),
    Short(i16),
    Boolean(bool),
    Enum { type_name: String, const_name: String },
    /// Class literal, kept as its return descriptor (`Ljava/lang/String;`, `V`, ...)
    Class(String),
    Annotation(AnnotationInfo),
    Array(Vec<ElementValue>),
}

impl ElementValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ElementValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short tag used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ElementValue::String(_) => "string",
            ElementValue::Int(_) => "int",
            ElementValue::Long(_) => "long",
            ElementValue::Float(_) => "float",
            ElementValue::Double(_) => "double",
            ElementValue::Byte(_) => "byte",
            ElementValue::Char(_) => "char",
            ElementValue::Short(_) => "short",
            ElementValue::Boolean(_) => "boolean",
            ElementValue::Enum { .. } => "enum",
            ElementValue::Class(_) => "class",
            ElementValue::Annotation(_) => "annotation",
            ElementValue::Array(_) => "array",
        }
    }
}

/// A class-level annotation together with its explicitly given members.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationInfo {
    pub id: AnnotationId,
    pub members: Vec<(String, ElementValue)>,
}

impl AnnotationInfo {
    pub fn marker(id: AnnotationId) -> Self {
        Self {
            id,
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, value: ElementValue) -> Self {
        self.members.push((name.into(), value));
        self
    }
}

// ==================== Descriptor Capability ====================

/// Structural view of a compiled class.
///
/// Class names use the internal slash-qualified form (`org/acme/Foo`).
/// Only class-level annotations are reported; method and field annotations
/// are never visible through this trait.
pub trait ClassDescriptor {
    /// Where the class came from (file path, `jar!/entry`), for diagnostics.
    fn origin(&self) -> &str;

    fn class_name(&self) -> Result<String, BoxError>;

    fn class_annotations(&self) -> Result<Vec<AnnotationInfo>, BoxError>;
}

/// In-memory descriptor, for callers that already know the class structure.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStub {
    pub name: String,
    pub annotations: Vec<AnnotationInfo>,
}

impl ClassStub {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: AnnotationInfo) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl ClassDescriptor for ClassStub {
    fn origin(&self) -> &str {
        &self.name
    }

    fn class_name(&self) -> Result<String, BoxError> {
        Ok(self.name.clone())
    }

    fn class_annotations(&self) -> Result<Vec<AnnotationInfo>, BoxError> {
        Ok(self.annotations.clone())
    }
}
