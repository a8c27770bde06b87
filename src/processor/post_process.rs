//! Post-processing of MCP entities during catalog ingestion.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::relations::emit_mcp_relations;
use crate::entity::{validate_mcp_entity, Entity, EntityRelation, ValidationError};

/// Where an entity document came from. Carried through unchanged; this
/// processor never inspects it beyond logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSpec {
    #[serde(rename = "type")]
    pub location_type: String,
    pub target: String,
}

impl LocationSpec {
    pub fn new(location_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            location_type: location_type.into(),
            target: target.into(),
        }
    }
}

/// A processing step the catalog host runs every entity through once per
/// ingestion pass.
pub trait CatalogProcessor {
    /// Stable name identifying this processor in host diagnostics.
    fn processor_name(&self) -> &'static str;

    /// Whether this processor recognizes the entity's kind as one it
    /// defines.
    fn validate_entity_kind(&self, entity: &Entity) -> bool;

    /// Post-process one entity, emitting derived relations into `emit`.
    ///
    /// Entities of other kinds pass through unchanged. The entity itself
    /// is never rewritten: the result is either the input, identically,
    /// or a validation error.
    fn post_process(
        &self,
        entity: Entity,
        location: &LocationSpec,
        emit: &mut dyn FnMut(EntityRelation),
    ) -> Result<Entity, ValidationError>;
}

/// Processor for the MCP entity kind: derives relations, then validates.
#[derive(Clone, Copy, Debug, Default)]
pub struct McpEntityProcessor;

impl McpEntityProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogProcessor for McpEntityProcessor {
    fn processor_name(&self) -> &'static str {
        "McpEntityProcessor"
    }

    fn validate_entity_kind(&self, entity: &Entity) -> bool {
        entity.is_mcp()
    }

    fn post_process(
        &self,
        entity: Entity,
        location: &LocationSpec,
        emit: &mut dyn FnMut(EntityRelation),
    ) -> Result<Entity, ValidationError> {
        if !entity.is_mcp() {
            trace!(kind = %entity.kind, name = %entity.metadata.name, "not an MCP entity, passing through");
            return Ok(entity);
        }

        debug!(
            name = %entity.metadata.name,
            namespace = entity.metadata.effective_namespace(),
            location = %location.target,
            "post-processing MCP entity"
        );

        let spec = entity.mcp_spec()?;

        // Relations are derived before validation runs, so they reach the
        // sink even for an entity that is rejected below.
        emit_mcp_relations(&entity, &spec, emit);

        validate_mcp_entity(&entity, &spec)?;

        Ok(entity)
    }
}
