//! Clap adapter for tomfig.
//!
//! This module is the optional integration layer between tomfig's
//! framework-agnostic core and the [clap](https://docs.rs/clap) CLI parser.
//! It is compiled only when the `clap` Cargo feature is enabled (on by
//! default).
//!
//! The only bridge to the core is [`SnippetArgs::into_action()`], which
//! converts clap-parsed arguments into a [`SnippetAction`](crate::SnippetAction).
//! From there, all logic flows through the clap-free
//! [`ops::handle`](crate::ops::handle) API. If you use a different CLI parser
//! (or no CLI at all), skip this module and construct `SnippetAction` values
//! directly.

use clap::{Args, Subcommand};

use crate::types::{SnippetAction, SnippetLanguage, TargetKind};

/// Clap-derived args for the snippet subcommand group.
///
/// Embed this into your app's clap derive:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     snippets: SnippetArgs,
/// }
/// ```
#[derive(Debug, Args)]
pub struct SnippetArgs {
    #[command(subcommand)]
    pub action: SnippetSubcommand,
}

/// Available snippet subcommands.
#[derive(Debug, Subcommand)]
pub enum SnippetSubcommand {
    /// List the supported connector types.
    Connectors,
    /// List the valves available in the catalog.
    Valves,
    /// Render configuration snippets for a connector type.
    Connector {
        /// Connector name (e.g. "NIO").
        name: String,
        /// Enable an attribute with its type-directed default. Repeatable.
        #[arg(long = "enable", value_name = "NAME")]
        enable: Vec<String>,
        /// Enable an attribute with an explicit value. Repeatable.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_name_value)]
        set: Vec<(String, String)>,
        /// Output only one language instead of both.
        #[arg(long)]
        lang: Option<SnippetLanguage>,
    },
    /// Render configuration snippets for a valve.
    Valve {
        /// Valve name (e.g. "Access Log Valve").
        name: String,
        /// Enable an attribute with its type-directed default. Repeatable.
        #[arg(long = "enable", value_name = "NAME")]
        enable: Vec<String>,
        /// Enable an attribute with an explicit value. Repeatable.
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_name_value)]
        set: Vec<(String, String)>,
        /// Output only one language instead of both.
        #[arg(long)]
        lang: Option<SnippetLanguage>,
    },
}

/// Parse a `name=value` argument. The value may contain further `=` signs.
fn parse_name_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

impl SnippetArgs {
    /// Convert clap-parsed args into a framework-agnostic `SnippetAction`.
    pub fn into_action(self) -> SnippetAction {
        match self.action {
            SnippetSubcommand::Connectors => SnippetAction::Connectors,
            SnippetSubcommand::Valves => SnippetAction::Valves,
            SnippetSubcommand::Connector {
                name,
                enable,
                set,
                lang,
            } => SnippetAction::Render {
                kind: TargetKind::Connector,
                name,
                enable,
                values: set,
                lang,
            },
            SnippetSubcommand::Valve {
                name,
                enable,
                set,
                lang,
            } => SnippetAction::Render {
                kind: TargetKind::Valve,
                name,
                enable,
                values: set,
                lang,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Wrapper so we can use `try_parse_from` on the subcommand.
    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        snippets: SnippetArgs,
    }

    fn parse(args: &[&str]) -> SnippetArgs {
        TestCli::try_parse_from(args).unwrap().snippets
    }

    #[test]
    fn parse_connectors() {
        let action = parse(&["test", "connectors"]).into_action();
        assert_eq!(action, SnippetAction::Connectors);
    }

    #[test]
    fn parse_valves() {
        let action = parse(&["test", "valves"]).into_action();
        assert_eq!(action, SnippetAction::Valves);
    }

    #[test]
    fn parse_connector_render() {
        let action = parse(&[
            "test",
            "connector",
            "NIO",
            "--enable",
            "maxThreads",
            "--set",
            "port=9090",
        ])
        .into_action();
        assert_eq!(
            action,
            SnippetAction::Render {
                kind: TargetKind::Connector,
                name: "NIO".into(),
                enable: vec!["maxThreads".into()],
                values: vec![("port".into(), "9090".into())],
                lang: None,
            }
        );
    }

    #[test]
    fn parse_valve_render_with_lang() {
        let action = parse(&[
            "test",
            "valve",
            "Access Log Valve",
            "--lang",
            "xml",
        ])
        .into_action();
        assert_eq!(
            action,
            SnippetAction::Render {
                kind: TargetKind::Valve,
                name: "Access Log Valve".into(),
                enable: vec![],
                values: vec![],
                lang: Some(SnippetLanguage::Xml),
            }
        );
    }

    #[test]
    fn parse_set_value_with_equals_inside() {
        let action = parse(&["test", "valve", "V", "--set", "pattern=a=b"]).into_action();
        match action {
            SnippetAction::Render { values, .. } => {
                assert_eq!(values, vec![("pattern".into(), "a=b".into())]);
            }
            other => panic!("Expected Render, got {other:?}"),
        }
    }

    #[test]
    fn set_without_equals_errors() {
        let result = TestCli::try_parse_from(["test", "valve", "V", "--set", "pattern"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_subcommand_errors() {
        let result = TestCli::try_parse_from(["test", "nope"]);
        assert!(result.is_err());
    }
}
