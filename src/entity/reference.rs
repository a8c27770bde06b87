//! Entity references and relation facts.
//!
//! Relations derived from MCP entities point at other catalog entities by
//! a (kind, namespace, name) triple. `dependsOn`/`consumedBy` entries use
//! a `"Kind:name"` shorthand resolved against the source entity's
//! namespace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind assumed for shorthand targets that omit the `Kind:` prefix.
pub const DEFAULT_TARGET_KIND: &str = "Component";

/// A full reference to a catalog entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

impl EntityRef {
    pub fn new(
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.kind, self.namespace, self.name)
    }
}

/// Kind of a derived relation edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationType {
    #[serde(rename = "ownedBy")]
    OwnedBy,
    #[serde(rename = "partOf")]
    PartOf,
    #[serde(rename = "dependsOn")]
    DependsOn,
    #[serde(rename = "providesApi")]
    ProvidesApi,
}

impl RelationType {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::OwnedBy => "ownedBy",
            RelationType::PartOf => "partOf",
            RelationType::DependsOn => "dependsOn",
            RelationType::ProvidesApi => "providesApi",
        }
    }

    /// Parse from the wire string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ownedBy" => Some(RelationType::OwnedBy),
            "partOf" => Some(RelationType::PartOf),
            "dependsOn" => Some(RelationType::DependsOn),
            "providesApi" => Some(RelationType::ProvidesApi),
            _ => None,
        }
    }
}

/// A directed, typed edge between two catalog entities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRelation {
    pub source: EntityRef,
    pub target: EntityRef,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
}

impl EntityRelation {
    pub fn new(source: EntityRef, target: EntityRef, relation_type: RelationType) -> Self {
        Self {
            source,
            target,
            relation_type,
        }
    }
}

/// Resolve a `dependsOn`/`consumedBy` shorthand into a full reference.
///
/// Splits on the first `:`; without one the whole string is the name and
/// the kind defaults to `Component`. The namespace is always the source
/// entity's namespace.
pub fn parse_target_ref(raw: &str, namespace: &str) -> EntityRef {
    match raw.split_once(':') {
        Some((kind, name)) => EntityRef::new(kind, namespace, name),
        None => EntityRef::new(DEFAULT_TARGET_KIND, namespace, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_with_kind_prefix() {
        let target = parse_target_ref("Resource:db", "default");
        assert_eq!(target, EntityRef::new("Resource", "default", "db"));
    }

    #[test]
    fn test_shorthand_without_prefix_defaults_to_component() {
        let target = parse_target_ref("agent-x", "prod");
        assert_eq!(target, EntityRef::new("Component", "prod", "agent-x"));
    }

    #[test]
    fn test_shorthand_splits_on_first_colon_only() {
        let target = parse_target_ref("API:payments:v2", "default");
        assert_eq!(target, EntityRef::new("API", "default", "payments:v2"));
    }

    #[test]
    fn test_ref_display() {
        let entity_ref = EntityRef::new("MCP", "default", "weather-mcp");
        assert_eq!(entity_ref.to_string(), "MCP:default/weather-mcp");
    }

    #[test]
    fn test_relation_wire_shape() {
        let relation = EntityRelation::new(
            EntityRef::new("MCP", "default", "weather-mcp"),
            EntityRef::new("Group", "default", "team-a"),
            RelationType::OwnedBy,
        );
        let json = serde_json::to_value(&relation).unwrap();
        assert_eq!(json["type"], "ownedBy");
        assert_eq!(json["source"]["kind"], "MCP");
        assert_eq!(json["target"]["name"], "team-a");
    }

    #[test]
    fn test_relation_type_strings() {
        for relation_type in [
            RelationType::OwnedBy,
            RelationType::PartOf,
            RelationType::DependsOn,
            RelationType::ProvidesApi,
        ] {
            assert_eq!(RelationType::parse(relation_type.as_str()), Some(relation_type));
        }
        assert_eq!(RelationType::parse("apiProvidedBy"), None);
    }
}
