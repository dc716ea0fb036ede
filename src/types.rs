//! Core data model: attribute specs, catalog sections, the built-in connector
//! table, and the framework-agnostic [`SnippetAction`] consumed by the CLI
//! adapter.
//!
//! Everything here is plain data. Predicate-like behavior (which catalog
//! sections a connector pulls its attributes from) is expressed as the
//! [`SectionMatcher`] enum rather than closures, so catalogs and selections
//! stay serializable and comparable.

use serde::{Deserialize, Deserializer, Serialize};

/// The declared type of a configurable attribute.
///
/// Catalogs spell these lowercase (`"string"`, `"integer"`, `"boolean"`).
/// An attribute may also carry no type at all; see [`AttributeSpec::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Integer,
    Boolean,
}

/// One configurable property of a connector or valve.
///
/// Field names mirror the catalog JSON produced by the Tomcat documentation
/// scraper (`defaultValue`, `allowedvalues`). `section` is not present in the
/// raw attribute objects; it is stamped on during section flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,

    /// Grouping label, inherited from the catalog section the attribute came
    /// from. Insertion order is display order.
    #[serde(default)]
    pub section: String,

    /// Declared type. `None` means untyped/opaque; unrecognized type strings
    /// in a catalog also land here so they take the global default path.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<AttributeType>,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "defaultValue", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// When present (and the type is string), restricts input to an
    /// enumerated choice.
    #[serde(rename = "allowedvalues", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Accept `"string"`/`"integer"`/`"boolean"`, map anything else (including
/// `null`) to `None` instead of failing the whole catalog parse.
fn lenient_type<'de, D>(deserializer: D) -> Result<Option<AttributeType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| match s {
        "string" => Some(AttributeType::String),
        "integer" => Some(AttributeType::Integer),
        "boolean" => Some(AttributeType::Boolean),
        _ => None,
    }))
}

/// A named group of attributes, as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

/// One valve catalog entry. Same JSON shape as [`Section`], kept as its own
/// type because valves are selected by name and carry inheritance semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValveKind {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

/// Section-name predicate used to decide which catalog sections feed a
/// connector's attribute list. A section is relevant if ANY matcher matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMatcher {
    /// Section name contains the needle.
    Contains(&'static str),
    /// Section name contains the needle but not the excluded substring
    /// (distinguishes "NIO" sections from "NIO2" ones).
    ContainsExcluding {
        needle: &'static str,
        unless: &'static str,
    },
}

impl SectionMatcher {
    pub fn matches(&self, section_name: &str) -> bool {
        match self {
            SectionMatcher::Contains(needle) => section_name.contains(needle),
            SectionMatcher::ContainsExcluding { needle, unless } => {
                section_name.contains(needle) && !section_name.contains(unless)
            }
        }
    }
}

/// A supported connector implementation.
///
/// The table is static and hard-coded; catalogs only contribute the attribute
/// sections. Matcher order determines visual grouping priority, not the
/// filtering outcome.
#[derive(Debug, PartialEq, Eq)]
pub struct ConnectorKind {
    pub name: &'static str,
    pub protocol: &'static str,
    pub description: &'static str,
    pub section_matchers: &'static [SectionMatcher],
}

/// Supported connector types, sorted by importance. The first entry is the
/// default: its protocol is the baseline the Java generator compares against.
pub static CONNECTOR_TYPES: &[ConnectorKind] = &[
    ConnectorKind {
        name: "NIO",
        protocol: "HTTP/1.1",
        description: "Default connector (use it when you are not sure about \
                      which one to pick). It uses Java NIO API.",
        section_matchers: &[
            SectionMatcher::Contains("Common"),
            SectionMatcher::Contains("Standard"),
            SectionMatcher::Contains("TCP"),
            SectionMatcher::ContainsExcluding {
                needle: "NIO",
                unless: "NIO2",
            },
        ],
    },
    ConnectorKind {
        name: "APR",
        protocol: "AJP/1.3",
        description: "Connector using Apache Portable Runtime (APR) to \
                      hopefully better scale behind httpd v2.",
        section_matchers: &[
            SectionMatcher::Contains("Common"),
            SectionMatcher::Contains("Standard"),
            SectionMatcher::Contains("APR"),
        ],
    },
];

/// Look up a connector type by exact name.
pub fn find_connector(name: &str) -> Option<&'static ConnectorKind> {
    CONNECTOR_TYPES.iter().find(|c| c.name == name)
}

/// The default connector type (first in the table).
pub fn default_connector() -> &'static ConnectorKind {
    &CONNECTOR_TYPES[0]
}

/// Per-attribute UI state: whether the user opted the attribute into the
/// generated configuration, and the value they typed (if any).
///
/// `value: None` means "use the type-directed default", distinct from an
/// explicit empty string, which is echoed into the snippet as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledParameter {
    pub checked: bool,
    pub value: Option<String>,
}

/// Language of a generated snippet, exposed with the external highlighter's
/// language ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SnippetLanguage {
    Xml,
    Java,
}

impl SnippetLanguage {
    /// The id the external highlighter understands (`"xml"` / `"java"`).
    pub fn id(self) -> &'static str {
        match self {
            SnippetLanguage::Xml => "xml",
            SnippetLanguage::Java => "java",
        }
    }
}

impl std::fmt::Display for SnippetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Which kind of catalog entry a render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TargetKind {
    Connector,
    Valve,
}

impl TargetKind {
    pub fn label(self) -> &'static str {
        match self {
            TargetKind::Connector => "connector",
            TargetKind::Valve => "valve",
        }
    }
}

/// A snippet operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum SnippetAction {
    /// List the supported connector types.
    Connectors,
    /// List the valves available in the catalog.
    Valves,
    /// Render snippets for one connector or valve.
    Render {
        kind: TargetKind,
        name: String,
        /// Attributes to enable without an explicit value (type-directed
        /// defaults apply).
        enable: Vec<String>,
        /// `(name, value)` pairs; setting a value also enables the attribute.
        values: Vec<(String, String)>,
        /// Restrict output to one language; `None` renders both.
        lang: Option<SnippetLanguage>,
    },
}
