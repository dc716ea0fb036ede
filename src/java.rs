//! Java/CDI snippet generation.
//!
//! Snippets are assembled as a small class skeleton ([`JavaClass`] holding
//! [`JavaMethod`]s) and rendered to exact text by [`JavaClass::render`].
//! Tests can assert on structure (which methods exist, which statements they
//! carry) or on the rendered string when byte-for-byte output matters.
//!
//! Values flow through the same resolution rule as the XML generator and are
//! never validated: malformed user text ends up in the snippet verbatim.

use std::collections::BTreeMap;

use crate::error::TomfigError;
use crate::resolve::{active_params, resolved_value};
use crate::types::{
    default_connector, AttributeSpec, AttributeType, ConnectorKind, EnabledParameter,
};

/// A generated top-level class: annotations, name, methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaClass {
    pub annotations: Vec<String>,
    pub name: String,
    pub methods: Vec<JavaMethod>,
}

/// One generated method: annotations, signature (without the trailing
/// brace), statement lines. Statement lines may carry extra leading spaces
/// for continuations of a multi-line statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    pub annotations: Vec<String>,
    pub signature: String,
    pub body: Vec<String>,
}

impl JavaClass {
    pub fn new(name: impl Into<String>) -> Self {
        JavaClass {
            annotations: Vec::new(),
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn method(mut self, method: JavaMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Render with two-space indentation, methods separated by a blank line.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.annotations.clone();
        lines.push(format!("public class {} {{", self.name));
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            for annotation in &method.annotations {
                lines.push(format!("  {annotation}"));
            }
            lines.push(format!("  {} {{", method.signature));
            for statement in &method.body {
                if statement.is_empty() {
                    lines.push(String::new());
                } else {
                    lines.push(format!("    {statement}"));
                }
            }
            lines.push("  }".to_string());
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl JavaMethod {
    pub fn new(signature: impl Into<String>) -> Self {
        JavaMethod {
            annotations: Vec::new(),
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn line(mut self, statement: impl Into<String>) -> Self {
        self.body.push(statement.into());
        self
    }
}

/// Port used when the `port` parameter has no usable value.
const DEFAULT_PORT: &str = "8080";

/// Render the CDI producer class configuring an embedded Tomcat connector.
///
/// The bare skeleton produces a `TomcatWebServerConfiguration` with just the
/// port. A `configure(Tomcat)` customizer is added when it would matter: some
/// non-port parameter is active, or the selected protocol differs from the
/// default connector's.
pub fn connector_java(
    connector: &ConnectorKind,
    enabled: &BTreeMap<String, EnabledParameter>,
    specs: &[AttributeSpec],
) -> String {
    let active = active_params(enabled);
    let port = enabled
        .get("port")
        .and_then(|entry| entry.value.as_deref())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_PORT);
    let needs_configure = active.iter().any(|p| p != "port")
        || connector.protocol != default_connector().protocol;

    let mut producer = JavaMethod::new("public TomcatWebServerConfiguration configuration()")
        .annotation("@Produces")
        .annotation("@ApplicationScoped")
        .line("final var conf = new TomcatWebServerConfiguration();")
        .line(format!("conf.setPort({port});"));
    if needs_configure {
        producer = producer
            .line("conf.setCompression(null); // use configure() instead")
            .line("conf.setTomcatCustomizers(List.of(this::configure));");
    }
    producer = producer.line("return conf;");

    let mut class = JavaClass::new("ServerConfiguration")
        .annotation("@ApplicationScoped")
        .method(producer);

    if needs_configure {
        let mut configure = JavaMethod::new("private void configure(final Tomcat tomcat)")
            .line(format!(
                "final var connector = new Connector(\"{}\");",
                connector.protocol
            ))
            .line(format!("connector.setPort({port});"));
        for param in active.iter().filter(|p| *p != "port") {
            configure = configure.line(format!(
                "connector.setProperty(\"{param}\", \"{}\");",
                resolved_value(enabled, specs, param)
            ));
        }
        configure = configure.line("tomcat.setConnector(connector);");
        class = class.method(configure);
    }

    class.render()
}

/// Render the CDI producer class registering a valve on the context pipeline.
///
/// The concrete class comes from the `className` parameter's value, or its
/// spec's default. When neither yields a usable (non-empty) class name this
/// fails with [`TomfigError::MissingRequiredParameter`], the one designed
/// hard-failure point of the generators.
pub fn valve_java(
    enabled: &BTreeMap<String, EnabledParameter>,
    specs: &[AttributeSpec],
) -> Result<String, TomfigError> {
    let active = active_params(enabled);

    let class_name = enabled
        .get("className")
        .and_then(|entry| entry.value.clone())
        .filter(|value| !value.is_empty())
        .or_else(|| {
            specs
                .iter()
                .find(|spec| spec.name == "className")
                .and_then(|spec| spec.default_value.clone())
        })
        .filter(|value| !value.is_empty())
        .ok_or_else(|| TomfigError::MissingRequiredParameter {
            name: "className".into(),
        })?;

    // Short identifier: text after the last '.'.
    let valve = class_name.rsplit('.').next().unwrap_or(&class_name);

    let producer = JavaMethod::new("public TomcatWebServerConfiguration configuration()")
        .annotation("@Produces")
        .annotation("@ApplicationScoped")
        .line("final var conf = new TomcatWebServerConfiguration();")
        .line("// connector configuration etc if needed")
        .line("")
        .line("conf.setContextCustomizers(List.of(")
        .line("    // enable the valve")
        .line(format!("    this::configure{valve}));"))
        .line("return conf;");

    let mut configure = JavaMethod::new(format!(
        "private void configure{valve}(final StandardContext context)"
    ))
    .line(format!("final var valve = new {valve}();"));
    for param in active.iter().filter(|p| *p != "className") {
        let mut value = resolved_value(enabled, specs, param);
        let is_string = specs
            .iter()
            .find(|spec| spec.name == *param)
            .is_some_and(|spec| spec.kind == Some(AttributeType::String));
        if is_string {
            value = format!("\"{value}\"");
        }
        configure = configure.line(format!("valve.set{}({value});", capitalize(param)));
    }
    configure = configure.line("context.getPipeline().addValve(valve);");

    Ok(JavaClass::new("ServerConfiguration")
        .annotation("@ApplicationScoped")
        .method(producer)
        .method(configure)
        .render())
}

/// Uppercase the first character, leave the rest alone (setter-name rule).
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
