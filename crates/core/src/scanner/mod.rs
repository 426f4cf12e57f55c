//! Annotation-driven discovery of extensible types and named components.

mod class_scanner;
mod named;

pub use class_scanner::{AnnotationMemberVisitor, ClassScanner, FoundClasses};
pub use named::{EXTENSIBLE_ANNOTATION, NAMED_COMPONENT_ANNOTATION, NamedComponentScanner};

/// `org/acme/Foo` -> `org.acme.Foo`
pub(crate) fn path_to_class_name(class_with_slashes: &str) -> String {
    class_with_slashes.replace('/', ".")
}
