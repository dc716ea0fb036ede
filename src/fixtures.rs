#[cfg(test)]
pub mod test {
    use crate::catalog::Catalog;
    use crate::types::{AttributeSpec, AttributeType, Section, ValveKind};

    pub fn attr(
        name: &str,
        kind: Option<AttributeType>,
        default: Option<&str>,
        required: bool,
    ) -> AttributeSpec {
        AttributeSpec {
            name: name.into(),
            section: String::new(),
            kind,
            required,
            default_value: default.map(Into::into),
            allowed_values: None,
            description: None,
        }
    }

    fn section(name: &str, attributes: Vec<AttributeSpec>) -> Section {
        Section {
            name: name.into(),
            description: None,
            attributes,
        }
    }

    /// A miniature version of the scraped Tomcat catalog: the section names
    /// are real, the attribute lists are trimmed to what the tests exercise.
    pub fn full_catalog() -> Catalog {
        use AttributeType::{Boolean, Integer, String as Str};
        Catalog::new(
            vec![
                section(
                    "Common Attributes",
                    vec![
                        attr("address", Some(Str), None, false),
                        attr("port", Some(Integer), None, true),
                        attr("discardFacades", Some(Boolean), Some("true"), false),
                    ],
                ),
                section(
                    "Standard Implementation",
                    vec![
                        attr("acceptCount", Some(Integer), Some("100"), false),
                        attr("compression", Some(Str), Some("off"), false),
                        attr("maxThreads", Some(Integer), Some("200"), false),
                    ],
                ),
                section(
                    "Java TCP socket attributes",
                    vec![
                        attr("socket.rxBufSize", Some(Integer), None, false),
                        attr("socket.tcpNoDelay", Some(Boolean), None, false),
                    ],
                ),
                section(
                    "NIO specific configuration",
                    vec![attr("useSendfile", Some(Boolean), Some("true"), false)],
                ),
                section(
                    "NIO2 specific configuration",
                    vec![attr("nio2Only", Some(Boolean), None, false)],
                ),
                section(
                    "APR/native specific configuration",
                    vec![attr("pollTime", Some(Integer), Some("2000"), false)],
                ),
            ],
            vec![
                ValveKind {
                    name: "Access Log Valve".into(),
                    description: Some(
                        "Logs requests in a configurable, extended form.".into(),
                    ),
                    attributes: vec![
                        attr(
                            "className",
                            Some(Str),
                            Some("org.apache.catalina.valves.AccessLogValve"),
                            true,
                        ),
                        attr("directory", Some(Str), Some("logs"), false),
                        attr("pattern", Some(Str), None, false),
                        attr("rotatable", Some(Boolean), Some("true"), false),
                        attr("maxDays", Some(Integer), Some("-1"), false),
                    ],
                },
                ValveKind {
                    name: "Extended Access Log Valve".into(),
                    description: Some(
                        "Access log following the W3C Extended Log File Format.".into(),
                    ),
                    attributes: vec![
                        attr(
                            "className",
                            Some(Str),
                            Some("org.apache.catalina.valves.ExtendedAccessLogValve"),
                            true,
                        ),
                        attr("checkExists", Some(Boolean), Some("false"), false),
                    ],
                },
            ],
        )
    }

    /// The same catalog as raw JSON, in the exact shape the documentation
    /// scraper emits (`tomcatVersion`, `defaultValue`, `allowedvalues`).
    pub fn connector_catalog_json() -> &'static str {
        r#"{
          "tomcatVersion": "10.0.21",
          "connectors": [
            {
              "name": "Common Attributes",
              "attributes": [
                {"name": "address", "type": "string", "description": "The IP address used to bind."},
                {"name": "port", "type": "integer", "required": true},
                {"name": "discardFacades", "type": "boolean", "defaultValue": "true"}
              ]
            },
            {
              "name": "Standard Implementation",
              "attributes": [
                {"name": "acceptCount", "type": "integer", "defaultValue": "100"},
                {"name": "compression", "type": "string", "defaultValue": "off", "allowedvalues": ["on", "off", "force"]},
                {"name": "maxThreads", "type": "integer", "defaultValue": "200"}
              ]
            },
            {
              "name": "Java TCP socket attributes",
              "attributes": [{"name": "socket.tcpNoDelay", "type": "boolean"}]
            },
            {
              "name": "NIO specific configuration",
              "attributes": [{"name": "useSendfile", "type": "boolean", "defaultValue": "true"}]
            },
            {
              "name": "APR/native specific configuration",
              "attributes": [{"name": "pollTime", "type": "integer", "defaultValue": "2000"}]
            }
          ],
          "valves": [
            {
              "name": "Access Log Valve",
              "description": "Logs requests.",
              "attributes": [
                {"name": "className", "type": "string", "defaultValue": "org.apache.catalina.valves.AccessLogValve", "required": true},
                {"name": "directory", "type": "string", "defaultValue": "logs"},
                {"name": "pattern", "type": "string"}
              ]
            },
            {
              "name": "Extended Access Log Valve",
              "description": "W3C extended log format.",
              "attributes": [
                {"name": "className", "type": "string", "defaultValue": "org.apache.catalina.valves.ExtendedAccessLogValve", "required": true},
                {"name": "checkExists", "type": "boolean", "defaultValue": "false"}
              ]
            }
          ]
        }"#
    }

    #[test]
    fn full_catalog_applied_inheritance() {
        let catalog = full_catalog();
        let extended = catalog.valve("Extended Access Log Valve").unwrap();
        // 2 own attributes + 4 inherited (className already present).
        assert_eq!(extended.attributes.len(), 6);
    }
}
