//! Pure derivation helpers: which parameters are active, and what value a
//! parameter contributes to a snippet when the user has not typed one.
//!
//! Operates on plain data (spec slices and the enabled-parameter map) with no
//! I/O, so every rule is testable with synthetic inputs.

use std::collections::BTreeMap;

use crate::types::{AttributeSpec, AttributeType, EnabledParameter};

/// Resolve the default value for `name` against its spec.
///
/// With exactly one matching spec the default is type-directed:
/// integers fall back to `"0"`, strings to `""`, booleans use their declared
/// default when they have one. Every other case (zero matches, duplicate
/// names, untyped attributes, booleans without a default) resolves to the
/// global default `"true"`. The permissive fallback is deliberate: a rendered
/// (if semantically odd) snippet beats a hard stop.
pub fn default_for(specs: &[AttributeSpec], name: &str) -> String {
    let mut matching = specs.iter().filter(|s| s.name == name);
    if let (Some(spec), None) = (matching.next(), matching.next()) {
        match spec.kind {
            Some(AttributeType::Integer) => {
                return spec.default_value.clone().unwrap_or_else(|| "0".into());
            }
            Some(AttributeType::String) => {
                return spec.default_value.clone().unwrap_or_default();
            }
            Some(AttributeType::Boolean) => {
                if let Some(default) = &spec.default_value {
                    return default.clone();
                }
            }
            None => {}
        }
    }
    "true".into()
}

/// Names of the checked parameters, in ascending lexicographic order.
///
/// The ordering is load-bearing: it fixes the attribute order in generated
/// XML and Java. `BTreeMap` iteration already yields it.
pub fn active_params(enabled: &BTreeMap<String, EnabledParameter>) -> Vec<String> {
    enabled
        .iter()
        .filter(|(_, entry)| entry.checked)
        .map(|(name, _)| name.clone())
        .collect()
}

/// The value a parameter contributes to a snippet: the user's explicit value
/// if one was typed (even an empty one), else the type-directed default.
pub fn resolved_value(
    enabled: &BTreeMap<String, EnabledParameter>,
    specs: &[AttributeSpec],
    name: &str,
) -> String {
    match enabled.get(name).and_then(|entry| entry.value.clone()) {
        Some(value) => value,
        None => default_for(specs, name),
    }
}
