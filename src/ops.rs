//! Snippet operations: the framework-agnostic dispatch behind the CLI
//! adapter, and the result type callers display.

use std::fmt;

use crate::catalog::Catalog;
use crate::error::TomfigError;
use crate::session::{Session, SnippetPair};
use crate::types::{SnippetAction, TargetKind, CONNECTOR_TYPES};

/// Result of a snippet operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Name/description pairs for a listing action.
    Listing { entries: Vec<(String, String)> },
    /// One snippet, when a single language was requested.
    Snippet(String),
    /// Both snippets for the selection.
    Pair(SnippetPair),
}

impl fmt::Display for RenderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderOutcome::Listing { entries } => {
                for (i, (name, description)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name}: {description}")?;
                }
                Ok(())
            }
            RenderOutcome::Snippet(snippet) => write!(f, "{snippet}"),
            RenderOutcome::Pair(pair) => write!(f, "{}\n\n{}", pair.xml, pair.java),
        }
    }
}

/// Handle a [`SnippetAction`] against a loaded catalog.
pub fn handle(catalog: &Catalog, action: &SnippetAction) -> Result<RenderOutcome, TomfigError> {
    match action {
        SnippetAction::Connectors => Ok(RenderOutcome::Listing {
            entries: CONNECTOR_TYPES
                .iter()
                .map(|c| (c.name.to_string(), format!("{} - {}", c.protocol, c.description)))
                .collect(),
        }),
        SnippetAction::Valves => Ok(RenderOutcome::Listing {
            entries: catalog
                .valves
                .iter()
                .map(|v| {
                    (
                        v.name.clone(),
                        v.description.clone().unwrap_or_default(),
                    )
                })
                .collect(),
        }),
        SnippetAction::Render {
            kind,
            name,
            enable,
            values,
            lang,
        } => {
            let mut session = Session::new(catalog);
            match kind {
                TargetKind::Connector => session.select_connector(name)?,
                TargetKind::Valve => session.select_valve(name)?,
            }
            for parameter in enable {
                session.check(parameter);
            }
            for (parameter, value) in values {
                session.check(parameter);
                session.set_value(parameter, value.clone());
            }
            match lang {
                Some(language) => Ok(RenderOutcome::Snippet(session.snippet(*language)?)),
                None => Ok(RenderOutcome::Pair(session.snippets()?)),
            }
        }
    }
}
