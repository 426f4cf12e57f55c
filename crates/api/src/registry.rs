use std::collections::BTreeMap;

/// Extensible type -> (component name -> implementing class), all in dotted form.
pub type ComponentRegistry = BTreeMap<String, BTreeMap<String, String>>;

/// Flatten a registry into `(extensible, name, class)` triples.
pub fn triples(registry: &ComponentRegistry) -> Vec<(&str, &str, &str)> {
    registry
        .iter()
        .flat_map(|(extensible, components)| {
            components
                .iter()
                .map(move |(name, class)| (extensible.as_str(), name.as_str(), class.as_str()))
        })
        .collect()
}
