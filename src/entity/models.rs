//! Catalog entity models for the MCP entity kind.
//!
//! The generic [`Entity`] mirrors the document shape catalog entities are
//! authored in; the kind discriminant gates all MCP-specific processing.
//! [`McpSpec`] is the typed view of an MCP entity's `spec` payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::ValidationError;

/// Kind discriminant for MCP entities.
pub const MCP_ENTITY_KIND: &str = "MCP";

/// API version MCP entity documents are authored against.
pub const MCP_API_VERSION: &str = "backstage.io/v1alpha1";

/// Namespace applied when an entity document omits one.
pub const DEFAULT_NAMESPACE: &str = "default";

// =============================================================================
// Generic catalog entity
// =============================================================================

/// A catalog entity document.
///
/// The `spec` payload stays opaque until the entity's kind is recognized;
/// [`Entity::mcp_spec`] produces the typed view for MCP entities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub api_version: String,
    pub kind: String,
    pub metadata: EntityMetadata,
    #[serde(default)]
    pub spec: Value,
}

/// Standard catalog metadata carried by every entity document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Entity {
    /// True iff this entity is of the MCP kind.
    pub fn is_mcp(&self) -> bool {
        self.kind == MCP_ENTITY_KIND
    }

    /// Typed view of the `spec` payload of an MCP entity.
    ///
    /// The view is lenient: fields required by the validation rules are
    /// optional here, so that validation rather than deserialization
    /// reports what is missing. Fails only when the payload's shape is
    /// incompatible (e.g. not an object).
    pub fn mcp_spec(&self) -> Result<McpSpec, ValidationError> {
        serde_json::from_value(self.spec.clone()).map_err(|e| ValidationError::InvalidSpec {
            entity: self.metadata.name.clone(),
            reason: e.to_string(),
        })
    }
}

impl EntityMetadata {
    /// Namespace this entity lives in, defaulting when absent.
    pub fn effective_namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Transport mechanism an MCP server communicates over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum McpTransport {
    Stdio,
    Sse,
    Websocket,
    Http,
}

impl McpTransport {
    /// Accepted document values, in declaration order.
    pub const ALL: &'static [&'static str] = &["stdio", "sse", "websocket", "http"];

    /// Parse from the document string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stdio" => Some(McpTransport::Stdio),
            "sse" => Some(McpTransport::Sse),
            "websocket" => Some(McpTransport::Websocket),
            "http" => Some(McpTransport::Http),
            _ => None,
        }
    }

    /// Convert to the document string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            McpTransport::Stdio => "stdio",
            McpTransport::Sse => "sse",
            McpTransport::Websocket => "websocket",
            McpTransport::Http => "http",
        }
    }
}

/// Runtime environment an MCP server is implemented in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum McpRuntime {
    Node,
    Python,
    Go,
    Csharp,
    Rust,
    Java,
}

impl McpRuntime {
    pub const ALL: &'static [&'static str] = &["node", "python", "go", "csharp", "rust", "java"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "node" => Some(McpRuntime::Node),
            "python" => Some(McpRuntime::Python),
            "go" => Some(McpRuntime::Go),
            "csharp" => Some(McpRuntime::Csharp),
            "rust" => Some(McpRuntime::Rust),
            "java" => Some(McpRuntime::Java),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            McpRuntime::Node => "node",
            McpRuntime::Python => "python",
            McpRuntime::Go => "go",
            McpRuntime::Csharp => "csharp",
            McpRuntime::Rust => "rust",
            McpRuntime::Java => "java",
        }
    }
}

/// Functional category of an MCP server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum McpServerType {
    DataConnector,
    ToolProvider,
    WorkflowAutomation,
    ApiIntegration,
    FileProcessor,
}

impl McpServerType {
    pub const ALL: &'static [&'static str] = &[
        "data-connector",
        "tool-provider",
        "workflow-automation",
        "api-integration",
        "file-processor",
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "data-connector" => Some(McpServerType::DataConnector),
            "tool-provider" => Some(McpServerType::ToolProvider),
            "workflow-automation" => Some(McpServerType::WorkflowAutomation),
            "api-integration" => Some(McpServerType::ApiIntegration),
            "file-processor" => Some(McpServerType::FileProcessor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            McpServerType::DataConnector => "data-connector",
            McpServerType::ToolProvider => "tool-provider",
            McpServerType::WorkflowAutomation => "workflow-automation",
            McpServerType::ApiIntegration => "api-integration",
            McpServerType::FileProcessor => "file-processor",
        }
    }
}

/// Maturity stage of an MCP server entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum McpLifecycle {
    Experimental,
    Production,
    Deprecated,
}

impl McpLifecycle {
    pub const ALL: &'static [&'static str] = &["experimental", "production", "deprecated"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "experimental" => Some(McpLifecycle::Experimental),
            "production" => Some(McpLifecycle::Production),
            "deprecated" => Some(McpLifecycle::Deprecated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            McpLifecycle::Experimental => "experimental",
            McpLifecycle::Production => "production",
            McpLifecycle::Deprecated => "deprecated",
        }
    }
}

/// Authentication scheme used to reach an MCP server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum McpAuthType {
    OAuth2,
    ApiKey,
    None,
    Basic,
    Bearer,
}

impl McpAuthType {
    pub const ALL: &'static [&'static str] = &["oauth2", "api-key", "none", "basic", "bearer"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "oauth2" => Some(McpAuthType::OAuth2),
            "api-key" => Some(McpAuthType::ApiKey),
            "none" => Some(McpAuthType::None),
            "basic" => Some(McpAuthType::Basic),
            "bearer" => Some(McpAuthType::Bearer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            McpAuthType::OAuth2 => "oauth2",
            McpAuthType::ApiKey => "api-key",
            McpAuthType::None => "none",
            McpAuthType::Basic => "basic",
            McpAuthType::Bearer => "bearer",
        }
    }
}

// =============================================================================
// MCP spec payload
// =============================================================================

/// Typed view of an MCP entity's `spec` payload.
///
/// Enumeration-valued fields are kept as the raw document strings so that
/// validation can report unknown values; the typed accessors parse them
/// on demand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub capabilities: McpCapabilities,
    #[serde(default)]
    pub configuration: McpConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<McpAuthentication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumed_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<McpMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration: Option<McpIntegration>,
}

impl McpSpec {
    /// Parsed transport, when present and recognized.
    pub fn transport(&self) -> Option<McpTransport> {
        self.transport.as_deref().and_then(McpTransport::parse)
    }

    /// Parsed runtime, when present and recognized.
    pub fn runtime(&self) -> Option<McpRuntime> {
        self.runtime.as_deref().and_then(McpRuntime::parse)
    }

    /// Parsed server type, when present and recognized.
    pub fn server_type(&self) -> Option<McpServerType> {
        self.server_type.as_deref().and_then(McpServerType::parse)
    }

    /// Parsed lifecycle, when present and recognized.
    pub fn lifecycle(&self) -> Option<McpLifecycle> {
        self.lifecycle.as_deref().and_then(McpLifecycle::parse)
    }
}

// =============================================================================
// Capabilities
// =============================================================================

/// Capabilities an MCP server exposes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct McpCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<PromptEntry>>,
}

impl McpCapabilities {
    /// True iff none of the three capability sequences is declared.
    ///
    /// A declared-but-empty sequence counts as present.
    pub fn is_empty(&self) -> bool {
        self.tools.is_none() && self.resources.is_none() && self.prompts.is_none()
    }
}

/// A tool capability entry: either a bare name or a detailed description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolEntry {
    Name(String),
    Detailed(McpTool),
}

impl ToolEntry {
    pub fn name(&self) -> &str {
        match self {
            ToolEntry::Name(name) => name,
            ToolEntry::Detailed(tool) => &tool.name,
        }
    }
}

/// A resource capability entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceEntry {
    Name(String),
    Detailed(McpResource),
}

impl ResourceEntry {
    pub fn name(&self) -> &str {
        match self {
            ResourceEntry::Name(name) => name,
            ResourceEntry::Detailed(resource) => &resource.name,
        }
    }
}

/// A prompt capability entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptEntry {
    Name(String),
    Detailed(McpPrompt),
}

impl PromptEntry {
    pub fn name(&self) -> &str {
        match self {
            PromptEntry::Name(name) => name,
            PromptEntry::Detailed(prompt) => &prompt.name,
        }
    }
}

/// Detailed tool declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<ToolRateLimit>,
}

/// Per-tool rate limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRateLimit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_hour: Option<u32>,
}

/// Detailed resource declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// Access permission on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourcePermission {
    Read,
    Write,
    Delete,
}

/// Detailed prompt declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpPrompt {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
}

// =============================================================================
// Connection configuration
// =============================================================================

/// Connection details for reaching an MCP server.
///
/// `command` applies to local-process (stdio) transport, `url` to remote
/// transports; which one is required is decided by validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct McpConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Environment variable passed to a local MCP server process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ValueSource>,
}

/// Indirect source of a configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Secret,
    Configmap,
}

// =============================================================================
// Authentication
// =============================================================================

/// Authentication block of an MCP spec.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpAuthentication {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<McpApiKeyAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<McpOAuth2Auth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<McpBasicAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer: Option<McpBearerAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl McpAuthentication {
    /// Parsed authentication type, when present and recognized.
    pub fn auth_type(&self) -> Option<McpAuthType> {
        self.auth_type.as_deref().and_then(McpAuthType::parse)
    }
}

/// API key placement and sourcing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpApiKeyAuth {
    pub key_location: KeyLocation,
    pub key_name: String,
    pub key_source: KeySource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_value: Option<String>,
}

/// Where an API key is placed on requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyLocation {
    Header,
    Query,
    Env,
}

/// Where an API key value comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySource {
    Secret,
    Env,
    Static,
}

/// OAuth2 client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpOAuth2Auth {
    pub provider: String,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
}

/// Basic auth configuration; the password is always indirect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpBasicAuth {
    pub username: String,
    pub password_source: SecretSource,
}

/// Bearer token configuration; the token is always indirect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpBearerAuth {
    pub token_source: SecretSource,
}

/// Indirect source of a credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretSource {
    Secret,
    Env,
}

// =============================================================================
// Rich metadata and integration guidance
// =============================================================================

/// Categorization and operational metadata. Descriptive only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct McpMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<McpPricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<McpLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<McpSupport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<McpMaturity>,
}

/// Pricing information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McpPricing {
    pub model: PricingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

/// Rate limits and quotas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_connections: Option<u32>,
}

/// Support and documentation links.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct McpSupport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
}

/// Maturity and maintenance indicators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpMaturity {
    pub stability: Stability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub maintenance_status: MaintenanceStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Alpha,
    Beta,
    Stable,
    Mature,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Active,
    Maintenance,
    Deprecated,
}

/// Setup guidance for integrating the described server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpIntegration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_instructions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<IntegrationExample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub troubleshooting: Option<Vec<TroubleshootingEntry>>,
}

/// A worked configuration example.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegrationExample {
    pub name: String,
    pub description: String,
    pub configuration: Value,
}

/// A known issue and its remedy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TroubleshootingEntry {
    pub issue: String,
    pub solution: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_str_roundtrips() {
        for s in McpTransport::ALL {
            assert_eq!(McpTransport::parse(s).unwrap().as_str(), *s);
        }
        for s in McpRuntime::ALL {
            assert_eq!(McpRuntime::parse(s).unwrap().as_str(), *s);
        }
        for s in McpServerType::ALL {
            assert_eq!(McpServerType::parse(s).unwrap().as_str(), *s);
        }
        for s in McpLifecycle::ALL {
            assert_eq!(McpLifecycle::parse(s).unwrap().as_str(), *s);
        }
        for s in McpAuthType::ALL {
            assert_eq!(McpAuthType::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn test_unknown_enum_values_do_not_parse() {
        assert_eq!(McpTransport::parse("grpc"), None);
        assert_eq!(McpRuntime::parse("ruby"), None);
        assert_eq!(McpLifecycle::parse("beta"), None);
        assert_eq!(McpServerType::parse("misc"), None);
    }

    #[test]
    fn test_is_mcp_checks_kind_literal() {
        let mut entity = make_entity(json!({}));
        assert!(entity.is_mcp());
        entity.kind = "Component".to_string();
        assert!(!entity.is_mcp());
        // Case sensitive
        entity.kind = "mcp".to_string();
        assert!(!entity.is_mcp());
    }

    #[test]
    fn test_effective_namespace_defaults() {
        let mut entity = make_entity(json!({}));
        assert_eq!(entity.metadata.effective_namespace(), "default");
        entity.metadata.namespace = Some("prod".to_string());
        assert_eq!(entity.metadata.effective_namespace(), "prod");
    }

    #[test]
    fn test_capability_entries_parse_both_shapes() {
        let caps: McpCapabilities = serde_json::from_value(json!({
            "tools": [
                "fetch-weather",
                { "name": "forecast", "description": "7 day forecast", "enabled": true }
            ],
            "resources": [{ "name": "stations", "permissions": ["read"] }],
            "prompts": ["summarize"]
        }))
        .unwrap();

        let tools = caps.tools.as_ref().unwrap();
        assert_eq!(tools[0].name(), "fetch-weather");
        assert_eq!(tools[1].name(), "forecast");
        assert!(matches!(tools[1], ToolEntry::Detailed(_)));
        assert_eq!(caps.resources.as_ref().unwrap()[0].name(), "stations");
        assert_eq!(caps.prompts.as_ref().unwrap()[0].name(), "summarize");
    }

    #[test]
    fn test_capabilities_is_empty() {
        assert!(McpCapabilities::default().is_empty());

        let declared_but_empty = McpCapabilities {
            tools: Some(vec![]),
            ..Default::default()
        };
        assert!(!declared_but_empty.is_empty());
    }

    #[test]
    fn test_mcp_spec_view_is_lenient_about_missing_fields() {
        let entity = make_entity(json!({ "owner": "team-a" }));
        let spec = entity.mcp_spec().unwrap();
        assert_eq!(spec.owner.as_deref(), Some("team-a"));
        assert!(spec.transport.is_none());
        assert!(spec.capabilities.is_empty());
    }

    #[test]
    fn test_mcp_spec_view_keeps_raw_enum_strings() {
        let entity = make_entity(json!({ "transport": "carrier-pigeon", "runtime": "rust" }));
        let spec = entity.mcp_spec().unwrap();
        assert_eq!(spec.transport.as_deref(), Some("carrier-pigeon"));
        assert_eq!(spec.transport(), None);
        assert_eq!(spec.runtime(), Some(McpRuntime::Rust));
    }

    #[test]
    fn test_mcp_spec_view_rejects_non_object_payload() {
        let entity = make_entity(json!(3));
        let err = entity.mcp_spec().unwrap_err();
        assert!(err.to_string().contains("weather-mcp"));
    }

    #[test]
    fn test_full_document_round_trip() {
        let doc = json!({
            "apiVersion": "backstage.io/v1alpha1",
            "kind": "MCP",
            "metadata": {
                "name": "weather-mcp",
                "description": "Weather data connector",
                "tags": ["weather"]
            },
            "spec": {
                "transport": "stdio",
                "runtime": "node",
                "type": "data-connector",
                "lifecycle": "production",
                "owner": "team-a",
                "capabilities": { "tools": ["fetch"] },
                "configuration": {
                    "command": "npx",
                    "args": ["-y", "weather-mcp"],
                    "env": [{ "name": "API_KEY", "valueFrom": "secret" }],
                    "timeout": 5000
                },
                "authentication": {
                    "type": "api-key",
                    "apiKey": {
                        "keyLocation": "header",
                        "keyName": "X-Api-Key",
                        "keySource": "secret"
                    }
                },
                "metadata": {
                    "pricing": { "model": "free" },
                    "maturity": { "stability": "stable", "maintenanceStatus": "active" }
                }
            }
        });

        let entity: Entity = serde_json::from_value(doc.clone()).unwrap();
        assert!(entity.is_mcp());
        let spec = entity.mcp_spec().unwrap();
        assert_eq!(spec.transport(), Some(McpTransport::Stdio));
        assert_eq!(spec.configuration.command.as_deref(), Some("npx"));
        assert_eq!(
            spec.authentication.as_ref().unwrap().auth_type(),
            Some(McpAuthType::ApiKey)
        );

        // The document shape survives a serialize pass
        assert_eq!(serde_json::to_value(&entity).unwrap(), doc);
    }

    fn make_entity(spec: Value) -> Entity {
        Entity {
            api_version: MCP_API_VERSION.to_string(),
            kind: MCP_ENTITY_KIND.to_string(),
            metadata: EntityMetadata {
                name: "weather-mcp".to_string(),
                namespace: None,
                title: None,
                description: None,
                labels: BTreeMap::new(),
                annotations: BTreeMap::new(),
                tags: vec![],
            },
            spec,
        }
    }
}
