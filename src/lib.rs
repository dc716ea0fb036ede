//! Snippet configurator core for Tomcat connectors and valves. Load a
//! catalog, pick an element, toggle attributes, and get matching XML and
//! Java/CDI snippets.
//!
//! ```ignore
//! let catalog = Catalog::from_path("tomcat-attributes.json")?;
//! let mut session = Session::new(&catalog);
//! session.select_connector("NIO")?;
//! session.check("maxThreads");
//! let SnippetPair { xml, java } = session.snippets()?;
//! ```
//!
//! That sequence yields a `<Connector>` fragment for `server.xml` and the
//! equivalent CDI producer class, both reflecting the enabled attributes.
//!
//! # Why tomfig
//!
//! Tomcat's configuration reference documents hundreds of attributes across
//! connectors and valves; hand-assembling a consistent `server.xml` fragment
//! and the matching embedded-Tomcat wiring means cross-referencing defaults,
//! types, and protocol names by eye. Tomfig is the engine behind an
//! interactive configurator: the caller (a web UI, a CLI, a test) owns the
//! widgets, tomfig owns the rules: which attributes a selection exposes,
//! and what each enabled attribute contributes to the generated output when
//! no value was typed.
//!
//! # Design: catalog as source of truth
//!
//! The attribute catalog, one JSON document scraped from the Tomcat
//! documentation, is the schema for everything:
//!
//! - **Sections** group connector attributes; each of the two built-in
//!   connector types ([`CONNECTOR_TYPES`]) declares which sections feed its
//!   attribute list via [`SectionMatcher`] data, not code.
//! - **Valves** each carry their own attribute list. The Extended Access Log
//!   Valve inherits the Access Log Valve's attributes at load time (the
//!   documentation lists shared attributes only once).
//! - **Attribute types** (`string`, `integer`, `boolean`, or untyped) direct
//!   default substitution and Java setter quoting.
//!
//! There is no second registry to keep in sync: point tomfig at a newer
//! catalog and the derived parameter lists, defaults, and snippets follow.
//!
//! # Core library: no CLI framework required
//!
//! The core has no dependency on any CLI framework. Catalog loading, session
//! state, derivation, and snippet generation all work through [`Catalog`],
//! [`Session`], and [`handle`]. For [clap](https://docs.rs/clap) users,
//! an optional adapter (the `cli` module, behind the `clap` Cargo feature, on
//! by default) provides drop-in derive types for
//! `connectors|valves|connector|valve` subcommands. To use tomfig without
//! clap:
//!
//! ```toml
//! tomfig = { version = "...", default-features = false }
//! ```
//!
//! # Derivation rules
//!
//! Every generator draws on the same three rules:
//!
//! - **Active parameters** are the checked entries of the session's
//!   enabled-parameter map, in ascending lexicographic order. The order is
//!   part of the output contract, not a display nicety.
//! - **Value resolution** prefers the user's explicit text (even when empty)
//!   and otherwise substitutes a type-directed default: declared default if
//!   present, else `"0"` for integers, `""` for strings; booleans without a
//!   default (like every unmatched or untyped lookup) resolve to the
//!   global default `"true"`. The permissive fallback is deliberate: a
//!   rendered snippet beats a hard stop.
//! - **No validation.** Whatever the user typed is echoed verbatim into the
//!   snippet; the generators are a formatting layer, not a validator.
//!
//! The single designed hard failure is valve class-name resolution: when the
//! `className` parameter has neither a value nor a spec default there is no
//! class to instantiate, and snippet generation returns
//! [`TomfigError::MissingRequiredParameter`] instead of fabricating a
//! reference.
//!
//! # Sessions
//!
//! A [`Session`] holds one user's selection and enabled-parameter map
//! against a read-only [`Catalog`]. Selecting a connector starts with an
//! empty map; selecting a valve pre-enables every required attribute that
//! has a non-empty default (`className`, typically). Toggles and value edits
//! mutate the map; [`Session::snippets`] recomputes both snippets from
//! scratch on every call. All of it is synchronous and allocation-light;
//! the original UI recomputes on every keystroke and so can you.
//!
//! # Highlighting
//!
//! Consumers that display HTML pass a [`Highlighter`] implementation to
//! [`Session::highlighted_snippets`]; the engine treats it as an opaque pure
//! function from code and language id (`"xml"` / `"java"`) to markup.
//! [`PlainHighlighter`] passes text through untouched.
//!
//! # Strict catalogs
//!
//! Catalog parsing is strict by default: a key that doesn't belong to the
//! catalog shape fails loading with the offending path:
//!
//! ```text
//! Unknown key 'connectors.0.attributes.2.defautValue' in catalog.json
//! ```
//!
//! Typos in a hand-edited catalog surface immediately instead of silently
//! dropping an attribute. Use the `*_lenient` constructors to share catalog
//! files with tools that add their own keys.
//!
//! # Error handling
//!
//! All fallible operations return [`TomfigError`]. Errors are designed to be
//! user-facing: unknown selections name the kind and the name that missed,
//! parse and I/O errors carry the file path, and the missing-class condition
//! names the parameter to fill in. With the `rich-errors` feature the enum
//! derives `miette::Diagnostic` for fancy terminal reports.

pub mod error;
pub mod types;

mod catalog;
#[cfg(feature = "clap")]
mod cli;
mod highlight;
mod inherit;
mod java;
mod ops;
mod resolve;
mod session;
mod xml;

#[cfg(test)]
mod fixtures;

pub use catalog::Catalog;
#[cfg(feature = "clap")]
pub use cli::{SnippetArgs, SnippetSubcommand};
pub use error::TomfigError;
pub use highlight::{Highlighter, PlainHighlighter};
pub use inherit::merge_inherited;
pub use java::{connector_java, valve_java, JavaClass, JavaMethod};
pub use ops::{handle, RenderOutcome};
pub use resolve::{active_params, default_for, resolved_value};
pub use session::{Selection, Session, SnippetPair};
pub use types::{
    default_connector, find_connector, AttributeSpec, AttributeType, ConnectorKind,
    EnabledParameter, Section, SectionMatcher, SnippetAction, SnippetLanguage, TargetKind,
    ValveKind, CONNECTOR_TYPES,
};
pub use xml::{connector_xml, valve_xml};
