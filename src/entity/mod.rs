//! The MCP catalog entity kind: model, references, and validation.

mod models;
mod reference;
mod validation;

pub use models::{
    Entity, EntityMetadata, EnvVar, IntegrationExample, KeyLocation, KeySource, MaintenanceStatus,
    McpApiKeyAuth, McpAuthType, McpAuthentication, McpBasicAuth, McpBearerAuth, McpCapabilities,
    McpConfiguration, McpIntegration, McpLifecycle, McpLimits, McpMaturity, McpMetadata,
    McpOAuth2Auth, McpPricing, McpPrompt, McpResource, McpRuntime, McpServerType, McpSpec,
    McpSupport, McpTool, McpTransport, PricingModel, PromptEntry, ResourceEntry,
    ResourcePermission, SecretSource, Stability, ToolEntry, ToolRateLimit, TroubleshootingEntry,
    ValueSource, DEFAULT_NAMESPACE, MCP_API_VERSION, MCP_ENTITY_KIND,
};
pub use reference::{
    parse_target_ref, EntityRef, EntityRelation, RelationType, DEFAULT_TARGET_KIND,
};
pub use validation::{validate_mcp_entity, ValidationError, ValidationResult};
