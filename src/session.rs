//! Session state: the user's current selection and enabled parameters.
//!
//! The UI owns one [`Session`] per configurer and forwards three kinds of
//! events into it: selection changes, checkbox toggles, and value edits.
//! Snippets are recomputed from scratch on every [`Session::snippets`] call;
//! derivation is cheap, synchronous, and pure, so there is nothing to cache
//! or invalidate.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::TomfigError;
use crate::highlight::Highlighter;
use crate::types::{
    find_connector, AttributeSpec, ConnectorKind, EnabledParameter, SnippetLanguage,
};
use crate::{java, xml};

/// The XML fragment and the equivalent Java/CDI wiring for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetPair {
    pub xml: String,
    pub java: String,
}

/// What the session currently points at.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Connector(&'static ConnectorKind),
    Valve(String),
}

/// One user's configurator state against a loaded catalog.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    selection: Option<Selection>,
    parameters: Vec<AttributeSpec>,
    enabled: BTreeMap<String, EnabledParameter>,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Session {
            catalog,
            selection: None,
            parameters: Vec::new(),
            enabled: BTreeMap::new(),
        }
    }

    /// Select a connector type by name. Resets the enabled-parameter map to
    /// empty and recomputes the attribute list from the matching sections.
    pub fn select_connector(&mut self, name: &str) -> Result<(), TomfigError> {
        let connector = find_connector(name).ok_or_else(|| TomfigError::UnknownSelection {
            kind: "connector",
            name: name.into(),
        })?;
        self.parameters = self.catalog.parameters_for(connector);
        self.selection = Some(Selection::Connector(connector));
        self.enabled = BTreeMap::new();
        Ok(())
    }

    /// Select a valve by name. Pre-populates the enabled-parameter map with
    /// every required attribute that has a non-empty default.
    pub fn select_valve(&mut self, name: &str) -> Result<(), TomfigError> {
        let valve = self
            .catalog
            .valve(name)
            .ok_or_else(|| TomfigError::UnknownSelection {
                kind: "valve",
                name: name.into(),
            })?;
        self.parameters = valve.attributes.clone();
        self.selection = Some(Selection::Valve(valve.name.clone()));
        self.enabled = BTreeMap::new();
        for attribute in &self.parameters {
            if !attribute.required {
                continue;
            }
            if let Some(default) = &attribute.default_value
                && !default.is_empty()
            {
                self.enabled.insert(
                    attribute.name.clone(),
                    EnabledParameter {
                        checked: true,
                        value: Some(default.clone()),
                    },
                );
            }
        }
        Ok(())
    }

    /// Opt an attribute into the generated configuration.
    pub fn check(&mut self, name: &str) {
        self.enabled.entry(name.to_string()).or_default().checked = true;
    }

    /// Opt an attribute out again. The entry (and any typed value) is kept,
    /// matching the UI where unchecking preserves the text field content.
    pub fn uncheck(&mut self, name: &str) {
        self.enabled.entry(name.to_string()).or_default().checked = false;
    }

    /// Record a typed value. Does not change the checked state.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.enabled.entry(name.to_string()).or_default().value = Some(value.into());
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Human-readable description of the current selection.
    pub fn description(&self) -> Option<&str> {
        match self.selection.as_ref()? {
            Selection::Connector(connector) => Some(connector.description),
            Selection::Valve(name) => self.catalog.valve(name)?.description.as_deref(),
        }
    }

    /// The attribute list for the current selection, in display order.
    pub fn parameters(&self) -> &[AttributeSpec] {
        &self.parameters
    }

    /// The enabled-parameter map (for rendering form state).
    pub fn enabled(&self) -> &BTreeMap<String, EnabledParameter> {
        &self.enabled
    }

    /// Derive both snippets from the current state.
    pub fn snippets(&self) -> Result<SnippetPair, TomfigError> {
        match self.selection.as_ref().ok_or(TomfigError::NoSelection)? {
            Selection::Connector(connector) => Ok(SnippetPair {
                xml: xml::connector_xml(connector, &self.enabled, &self.parameters),
                java: java::connector_java(connector, &self.enabled, &self.parameters),
            }),
            Selection::Valve(_) => Ok(SnippetPair {
                xml: xml::valve_xml(&self.enabled, &self.parameters),
                java: java::valve_java(&self.enabled, &self.parameters)?,
            }),
        }
    }

    /// Derive one snippet in the requested language.
    pub fn snippet(&self, language: SnippetLanguage) -> Result<String, TomfigError> {
        let pair = self.snippets()?;
        Ok(match language {
            SnippetLanguage::Xml => pair.xml,
            SnippetLanguage::Java => pair.java,
        })
    }

    /// Derive both snippets and run each through the highlighter, the way the
    /// page pipes them through hljs before display.
    pub fn highlighted_snippets(
        &self,
        highlighter: &impl Highlighter,
    ) -> Result<SnippetPair, TomfigError> {
        let pair = self.snippets()?;
        Ok(SnippetPair {
            xml: highlighter.highlight(&pair.xml, SnippetLanguage::Xml),
            java: highlighter.highlight(&pair.java, SnippetLanguage::Java),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::full_catalog;

    #[test]
    fn no_selection_yields_error() {
        let catalog = full_catalog();
        let session = Session::new(&catalog);
        assert!(matches!(
            session.snippets(),
            Err(TomfigError::NoSelection)
        ));
    }

    #[test]
    fn unknown_connector_rejected() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        let err = session.select_connector("NIO2").unwrap_err();
        assert!(matches!(err, TomfigError::UnknownSelection { kind: "connector", .. }));
    }

    #[test]
    fn unknown_valve_rejected() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        let err = session.select_valve("Nope Valve").unwrap_err();
        assert!(matches!(err, TomfigError::UnknownSelection { kind: "valve", .. }));
    }

    #[test]
    fn connector_selection_starts_empty() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_connector("NIO").unwrap();
        assert!(session.enabled().is_empty());
        assert!(!session.parameters().is_empty());
    }

    #[test]
    fn valve_selection_pre_populates_required_defaults() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_valve("Access Log Valve").unwrap();
        let class_name = session.enabled().get("className").unwrap();
        assert!(class_name.checked);
        assert_eq!(
            class_name.value.as_deref(),
            Some("org.apache.catalina.valves.AccessLogValve")
        );
        // Optional attributes start unchecked.
        assert!(!session.enabled().contains_key("directory"));
    }

    #[test]
    fn reselecting_clears_previous_choices() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_connector("NIO").unwrap();
        session.check("maxThreads");
        session.select_connector("APR").unwrap();
        assert!(session.enabled().is_empty());
    }

    #[test]
    fn check_set_value_uncheck_cycle() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_connector("NIO").unwrap();
        session.check("maxThreads");
        session.set_value("maxThreads", "512");
        session.uncheck("maxThreads");
        let entry = session.enabled().get("maxThreads").unwrap();
        assert!(!entry.checked);
        // The typed value survives the uncheck.
        assert_eq!(entry.value.as_deref(), Some("512"));
    }

    #[test]
    fn set_value_alone_does_not_enable() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_connector("NIO").unwrap();
        session.set_value("maxThreads", "512");
        let snippets = session.snippets().unwrap();
        assert!(!snippets.xml.contains("maxThreads"));
    }

    #[test]
    fn connector_round_trip() {
        // The scenario from the original tool: NIO, explicit port, enabled
        // maxThreads falling back to its spec default.
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_connector("NIO").unwrap();
        session.check("port");
        session.set_value("port", "9090");
        session.check("maxThreads");
        let snippets = session.snippets().unwrap();
        assert_eq!(
            snippets.xml,
            "<Connector\n  protocol=\"HTTP/1.1\"\n  maxThreads=\"200\"\n  port=\"9090\"\n/>"
        );
        assert!(snippets.java.contains("conf.setPort(9090);"));
        assert!(snippets.java.contains("connector.setProperty(\"maxThreads\", \"200\");"));
    }

    #[test]
    fn valve_round_trip() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_valve("Access Log Valve").unwrap();
        session.check("directory");
        let snippets = session.snippets().unwrap();
        assert_eq!(
            snippets.xml,
            "<Valve\n  className=\"org.apache.catalina.valves.AccessLogValve\"\n  directory=\"logs\"\n/>"
        );
        assert!(snippets.java.contains("final var valve = new AccessLogValve();"));
        assert!(snippets.java.contains("valve.setDirectory(\"logs\");"));
    }

    #[test]
    fn descriptions_follow_selection() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        assert!(session.description().is_none());
        session.select_connector("APR").unwrap();
        assert!(session.description().unwrap().contains("Apache Portable Runtime"));
        session.select_valve("Access Log Valve").unwrap();
        assert!(session.description().is_some());
    }

    #[test]
    fn snippet_picks_one_language() {
        let catalog = full_catalog();
        let mut session = Session::new(&catalog);
        session.select_connector("NIO").unwrap();
        let xml = session.snippet(SnippetLanguage::Xml).unwrap();
        assert!(xml.starts_with("<Connector"));
        let java = session.snippet(SnippetLanguage::Java).unwrap();
        assert!(java.starts_with("@ApplicationScoped"));
    }
}
