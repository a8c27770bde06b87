//! Relation derivation for MCP entities.
//!
//! Reads the optional ownership/system/dependency fields of an MCP spec
//! and emits one relation fact per applicable field. Derivation never
//! fails; absent fields simply produce no edge.

use tracing::debug;

use crate::entity::{
    parse_target_ref, Entity, EntityRef, EntityRelation, McpSpec, RelationType,
};

/// Derive and emit all relations declared by an MCP entity.
///
/// Emission order: ownedBy, partOf, dependsOn entries, consumedBy entries
/// (reversed), providesApi. Each applicable relation is emitted exactly
/// once per call.
pub fn emit_mcp_relations(entity: &Entity, spec: &McpSpec, emit: &mut dyn FnMut(EntityRelation)) {
    let namespace = entity.metadata.effective_namespace();
    let self_ref = EntityRef::new(&entity.kind, namespace, &entity.metadata.name);

    let mut emit_logged = |relation: EntityRelation| {
        debug!(
            source = %relation.source,
            target = %relation.target,
            relation_type = relation.relation_type.as_str(),
            "emitting relation"
        );
        emit(relation);
    };

    if let Some(owner) = non_blank(&spec.owner) {
        emit_logged(EntityRelation::new(
            self_ref.clone(),
            EntityRef::new("Group", namespace, owner),
            RelationType::OwnedBy,
        ));
    }

    if let Some(system) = non_blank(&spec.system) {
        emit_logged(EntityRelation::new(
            self_ref.clone(),
            EntityRef::new("System", namespace, system),
            RelationType::PartOf,
        ));
    }

    if let Some(dependencies) = &spec.depends_on {
        for dependency in dependencies {
            emit_logged(EntityRelation::new(
                self_ref.clone(),
                parse_target_ref(dependency, namespace),
                RelationType::DependsOn,
            ));
        }
    }

    // Consumers are recorded as depending on this entity, so the edge
    // direction is reversed.
    if let Some(consumers) = &spec.consumed_by {
        for consumer in consumers {
            emit_logged(EntityRelation::new(
                parse_target_ref(consumer, namespace),
                self_ref.clone(),
                RelationType::DependsOn,
            ));
        }
    }

    // A server exposing tools implicitly provides an API; the referenced
    // API entity is synthesized by name and resolved (or created)
    // elsewhere.
    if spec
        .capabilities
        .tools
        .as_ref()
        .is_some_and(|tools| !tools.is_empty())
    {
        let api_name = format!("{}-api", entity.metadata.name);
        emit_logged(EntityRelation::new(
            self_ref,
            EntityRef::new("API", namespace, api_name),
            RelationType::ProvidesApi,
        ));
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
