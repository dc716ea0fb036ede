//! Valve attribute inheritance.
//!
//! The Tomcat documentation lists the Extended Access Log Valve with only the
//! handful of attributes it adds over the Access Log Valve; the rest are
//! documented once on the donor. This preprocessor copies the donor's
//! attributes onto the extended valve so its rendered attribute list is
//! complete. Runs once at catalog load time.

use crate::types::ValveKind;

const TARGET: &str = "Extended Access Log Valve";
const DONOR: &str = "Access Log Valve";

/// Attribute count above which the target is considered already merged.
/// Guards against appending the donor attributes twice if a catalog is
/// preprocessed more than once.
const MERGED_THRESHOLD: usize = 5;

/// Copy every donor attribute whose name is not already present onto the
/// target valve. Appended attributes keep donor order (donor valves in
/// catalog order, then their own attribute order). All other valves pass
/// through unchanged.
pub fn merge_inherited(valves: Vec<ValveKind>) -> Vec<ValveKind> {
    let donated: Vec<_> = valves
        .iter()
        .filter(|v| v.name == DONOR)
        .flat_map(|v| v.attributes.iter().cloned())
        .collect();

    valves
        .into_iter()
        .map(|mut valve| {
            if valve.name == TARGET && valve.attributes.len() <= MERGED_THRESHOLD {
                // Duplicates are checked against the pre-merge attribute
                // names only.
                let existing: Vec<String> =
                    valve.attributes.iter().map(|a| a.name.clone()).collect();
                valve.attributes.extend(
                    donated
                        .iter()
                        .filter(|a| !existing.contains(&a.name))
                        .cloned(),
                );
            }
            valve
        })
        .collect()
}
