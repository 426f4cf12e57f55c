use super::class_scanner::{AnnotationMemberVisitor, ClassScanner, FoundClasses};
use super::path_to_class_name;
use crate::error::{Result, ScanError};
use plugin_scanner_api::{AnnotationId, ClassDescriptor, ComponentRegistry, ElementValue};
use tracing::{info, warn};

/// Marker placed on extension point types
pub const EXTENSIBLE_ANNOTATION: &str = "org.elasticsearch.plugin.Extensible";
/// Carries the registered name of a component in its `value` member
pub const NAMED_COMPONENT_ANNOTATION: &str = "org.elasticsearch.plugin.NamedComponent";

/// Builds the component registry from two annotation passes.
#[derive(Debug, Clone)]
pub struct NamedComponentScanner {
    extensible: AnnotationId,
    named: AnnotationId,
}

impl NamedComponentScanner {
    pub fn new() -> Self {
        Self::with_annotations(
            AnnotationId::of_class(EXTENSIBLE_ANNOTATION),
            AnnotationId::of_class(NAMED_COMPONENT_ANNOTATION),
        )
    }

    pub fn with_annotations(extensible: AnnotationId, named: AnnotationId) -> Self {
        Self { extensible, named }
    }

    /// Returns extensible class name -> { component name -> component class name }.
    ///
    /// A component is accepted only when its own class was recorded as
    /// extensible. No superclass or interface walk is performed.
    pub fn scan_for_named_classes<D: ClassDescriptor>(
        &self,
        classes: &[D],
    ) -> Result<ComponentRegistry> {
        let mut extensible_scanner = ClassScanner::new(self.extensible.clone(), |class_name, found| {
            found.insert(class_name.to_string(), class_name.to_string());
            None
        });
        extensible_scanner.visit(classes)?;
        let extensible_classes = extensible_scanner.into_found_classes();

        let named = self.named.clone();
        let mut named_scanner = ClassScanner::new(self.named.clone(), move |class_name, _| {
            let visitor = NamedValueVisitor::new(class_name, named.clone());
            Some(Box::new(visitor) as Box<dyn AnnotationMemberVisitor>)
        });
        named_scanner.visit(classes)?;

        let mut components: Vec<(String, String)> =
            named_scanner.into_found_classes().into_iter().collect();
        components.sort();

        let mut registry = ComponentRegistry::new();
        for (name, class_with_slashes) in components {
            let Some(extensible_with_slashes) = extensible_classes.get(&class_with_slashes) else {
                return Err(ScanError::Validation {
                    name,
                    class: path_to_class_name(&class_with_slashes),
                });
            };
            registry
                .entry(path_to_class_name(extensible_with_slashes))
                .or_default()
                .insert(name, path_to_class_name(&class_with_slashes));
        }

        info!(
            "Resolved {} named components across {} extensible types",
            registry.values().map(|c| c.len()).sum::<usize>(),
            registry.len()
        );
        Ok(registry)
    }
}

impl Default for NamedComponentScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Expects exactly one `value` member holding a string.
struct NamedValueVisitor {
    class_name: String,
    annotation: AnnotationId,
    seen_value: bool,
}

impl NamedValueVisitor {
    fn new(class_name: &str, annotation: AnnotationId) -> Self {
        Self {
            class_name: class_name.to_string(),
            annotation,
            seen_value: false,
        }
    }

    fn malformed(&self, reason: String) -> ScanError {
        ScanError::MalformedAnnotation {
            class: path_to_class_name(&self.class_name),
            annotation: self.annotation.class_name(),
            reason,
        }
    }
}

impl AnnotationMemberVisitor for NamedValueVisitor {
    fn visit(&mut self, key: &str, value: &ElementValue, found: &mut FoundClasses) -> Result<()> {
        if self.seen_value {
            return Err(self.malformed(format!("unexpected extra member '{key}'")));
        }
        if key != "value" {
            return Err(self.malformed(format!("expected member 'value', found '{key}'")));
        }
        let Some(name) = value.as_str() else {
            return Err(self.malformed(format!("expected a string value, found {}", value.kind())));
        };
        self.seen_value = true;

        if let Some(previous) = found.insert(name.to_string(), self.class_name.clone()) {
            warn!(
                "Component name '{}' declared by both {} and {}; keeping {}",
                name,
                path_to_class_name(&previous),
                path_to_class_name(&self.class_name),
                path_to_class_name(&self.class_name)
            );
        }
        Ok(())
    }

    fn visit_end(&mut self, _found: &mut FoundClasses) -> Result<()> {
        if self.seen_value {
            Ok(())
        } else {
            Err(self.malformed("missing member 'value'".to_string()))
        }
    }
}
