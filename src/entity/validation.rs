//! Validation for MCP catalog entities.
//!
//! Rules run in a fixed order and stop at the first violation; every
//! error names the entity and the offending field or rule.

use thiserror::Error;

use super::models::{
    Entity, McpLifecycle, McpRuntime, McpServerType, McpSpec, McpTransport,
};

/// Errors raised while validating an MCP entity.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("MCP entity '{entity}': required field '{field}' is missing")]
    MissingField { entity: String, field: &'static str },

    #[error("MCP entity '{entity}': stdio transport requires 'configuration.command'")]
    MissingCommand { entity: String },

    #[error("MCP entity '{entity}': {transport} transport requires 'configuration.url'")]
    MissingUrl { entity: String, transport: &'static str },

    #[error("MCP entity '{entity}': at least one capability (tools, resources, or prompts) is required")]
    NoCapabilities { entity: String },

    #[error("MCP entity '{entity}': {field} must be one of: {allowed}")]
    InvalidValue {
        entity: String,
        field: &'static str,
        allowed: String,
    },

    #[error("MCP entity '{entity}': malformed spec: {reason}")]
    InvalidSpec { entity: String, reason: String },
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate an MCP entity's spec payload.
///
/// Required fields first, then the transport-conditional configuration
/// rule, the capability rule, and finally the enumeration values.
pub fn validate_mcp_entity(entity: &Entity, spec: &McpSpec) -> ValidationResult<()> {
    let name = || entity.metadata.name.clone();

    for (value, field) in [
        (&spec.transport, "transport"),
        (&spec.runtime, "runtime"),
        (&spec.server_type, "type"),
        (&spec.owner, "owner"),
        (&spec.lifecycle, "lifecycle"),
    ] {
        if is_blank(value) {
            return Err(ValidationError::MissingField {
                entity: name(),
                field,
            });
        }
    }

    // Local-process servers need a command, remote ones a URL. An
    // unrecognized transport value skips this rule and is rejected by the
    // enumeration check below.
    match spec.transport() {
        Some(McpTransport::Stdio) => {
            if is_blank(&spec.configuration.command) {
                return Err(ValidationError::MissingCommand { entity: name() });
            }
        }
        Some(remote) => {
            if is_blank(&spec.configuration.url) {
                return Err(ValidationError::MissingUrl {
                    entity: name(),
                    transport: remote.as_str(),
                });
            }
        }
        None => {}
    }

    if spec.capabilities.is_empty() {
        return Err(ValidationError::NoCapabilities { entity: name() });
    }

    // Presence of these fields is guaranteed by the checks above; only
    // the values remain to be checked.
    for (parses, field, allowed) in [
        (spec.lifecycle().is_some(), "lifecycle", McpLifecycle::ALL),
        (spec.transport().is_some(), "transport", McpTransport::ALL),
        (spec.runtime().is_some(), "runtime", McpRuntime::ALL),
        (spec.server_type().is_some(), "type", McpServerType::ALL),
    ] {
        if !parses {
            return Err(ValidationError::InvalidValue {
                entity: name(),
                field,
                allowed: allowed.join(", "),
            });
        }
    }

    Ok(())
}

/// Absent or whitespace-only strings both count as missing.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
