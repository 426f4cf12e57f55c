use crate::error::{Result, ScanError};
use plugin_scanner_api::{AnnotationId, BoxError, ClassDescriptor, ElementValue};
use std::collections::HashMap;
use tracing::{debug, info};

/// Accumulator filled by a single scanner pass
pub type FoundClasses = HashMap<String, String>;

/// Receives the members of one matched annotation, in declaration order.
pub trait AnnotationMemberVisitor {
    fn visit(&mut self, key: &str, value: &ElementValue, found: &mut FoundClasses) -> Result<()>;

    /// Called once after the last member.
    fn visit_end(&mut self, _found: &mut FoundClasses) -> Result<()> {
        Ok(())
    }
}

type MatchHandler =
    Box<dyn FnMut(&str, &mut FoundClasses) -> Option<Box<dyn AnnotationMemberVisitor>>>;

/// Single pass over a set of classes looking for one class-level annotation.
///
/// For each class carrying the annotation the match handler is called with the
/// class name (slash form) and the accumulator. The handler either records the
/// class itself, or returns a visitor that reads the annotation members and
/// records what it finds.
pub struct ClassScanner {
    annotation: AnnotationId,
    on_match: MatchHandler,
    found: FoundClasses,
}

impl ClassScanner {
    pub fn new<F>(annotation: AnnotationId, on_match: F) -> Self
    where
        F: FnMut(&str, &mut FoundClasses) -> Option<Box<dyn AnnotationMemberVisitor>> + 'static,
    {
        Self {
            annotation,
            on_match: Box::new(on_match),
            found: FoundClasses::new(),
        }
    }

    pub fn annotation(&self) -> &AnnotationId {
        &self.annotation
    }

    pub fn visit<D: ClassDescriptor>(&mut self, classes: &[D]) -> Result<()> {
        let mut matched = 0usize;

        for class in classes {
            let annotations = class
                .class_annotations()
                .map_err(|e| class_format(class, e))?;

            for annotation in annotations.iter().filter(|a| a.id == self.annotation) {
                let class_name = class.class_name().map_err(|e| class_format(class, e))?;
                debug!("{} carries @{}", class_name, self.annotation);
                matched += 1;

                if let Some(mut visitor) = (self.on_match)(&class_name, &mut self.found) {
                    for (key, value) in &annotation.members {
                        visitor.visit(key, value, &mut self.found)?;
                    }
                    visitor.visit_end(&mut self.found)?;
                }
            }
        }

        info!(
            "Scanned {} classes for @{}: {} matches",
            classes.len(),
            self.annotation,
            matched
        );
        Ok(())
    }

    pub fn found_classes(&self) -> &FoundClasses {
        &self.found
    }

    pub fn into_found_classes(self) -> FoundClasses {
        self.found
    }
}

fn class_format<D: ClassDescriptor>(class: &D, error: BoxError) -> ScanError {
    ScanError::ClassFormat {
        origin: class.origin().to_string(),
        message: error.to_string(),
    }
}
