//! XML snippet generation.
//!
//! One attribute per line, two-space indent, self-closing tag. Values are the
//! user's text verbatim (no validation, no escaping; the snippet is display
//! material, not a parsed document) or the type-directed default.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::resolve::{active_params, resolved_value};
use crate::types::{AttributeSpec, ConnectorKind, EnabledParameter};

/// Render a `<Connector>` element for the selected connector type.
///
/// `protocol` always comes first. When `port` is not among the active
/// parameters a literal `port="8080"` line is injected after it; an active
/// `port` is instead listed with the other parameters in lexicographic order.
pub fn connector_xml(
    connector: &ConnectorKind,
    enabled: &BTreeMap<String, EnabledParameter>,
    specs: &[AttributeSpec],
) -> String {
    let active = active_params(enabled);
    let mut lines = vec![
        "<Connector".to_string(),
        format!("  protocol=\"{}\"", connector.protocol),
    ];
    if !active.iter().any(|p| p == "port") {
        lines.push("  port=\"8080\"".to_string());
    }
    for param in &active {
        lines.push(format!(
            "  {param}=\"{}\"",
            resolved_value(enabled, specs, param)
        ));
    }
    lines.push("/>".to_string());
    lines.join("\n")
}

/// Render a `<Valve>` element.
///
/// `className` is forced to the front when active; the remaining parameters
/// follow in lexicographic order.
pub fn valve_xml(enabled: &BTreeMap<String, EnabledParameter>, specs: &[AttributeSpec]) -> String {
    let mut active = active_params(enabled);
    active.sort_by(|a, b| class_name_first(a, b));

    let mut lines = vec!["<Valve".to_string()];
    for param in &active {
        lines.push(format!(
            "  {param}=\"{}\"",
            resolved_value(enabled, specs, param)
        ));
    }
    lines.push("/>".to_string());
    lines.join("\n")
}

fn class_name_first(a: &str, b: &str) -> Ordering {
    if a == "className" {
        return Ordering::Less;
    }
    if b == "className" {
        return Ordering::Greater;
    }
    a.cmp(b)
}
