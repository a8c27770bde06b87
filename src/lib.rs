//! MCP Catalog Processor Library
//!
//! Adds an "MCP" (Model Context Protocol) server entity kind to a
//! software catalog. The entity model describes how to reach an MCP
//! server and what capabilities it offers; the processor derives relation
//! edges to other catalog entities (owner, system, dependencies,
//! consumers, provided APIs) and validates the entity's required
//! structure.
//!
//! The host catalog feeds every entity through
//! [`McpEntityProcessor::post_process`] once per ingestion pass; entities
//! of other kinds pass through untouched.
//!
//! ```
//! use mcp_catalog_processor::{CatalogProcessor, LocationSpec, McpEntityProcessor};
//!
//! let entity = serde_json::from_value(serde_json::json!({
//!     "apiVersion": "backstage.io/v1alpha1",
//!     "kind": "MCP",
//!     "metadata": { "name": "weather-mcp" },
//!     "spec": {
//!         "transport": "stdio",
//!         "runtime": "node",
//!         "type": "data-connector",
//!         "lifecycle": "production",
//!         "owner": "team-a",
//!         "capabilities": { "tools": ["fetch"] },
//!         "configuration": { "command": "npx" }
//!     }
//! }))
//! .unwrap();
//!
//! let location = LocationSpec::new("url", "https://example.com/catalog-info.yaml");
//! let mut relations = Vec::new();
//! let entity = McpEntityProcessor::new()
//!     .post_process(entity, &location, &mut |r| relations.push(r))
//!     .unwrap();
//!
//! assert_eq!(relations.len(), 2); // ownedBy + providesApi
//! assert!(entity.is_mcp());
//! ```

pub mod entity;
pub mod processor;

// Re-export commonly used types for convenience
pub use entity::{
    Entity, EntityMetadata, EntityRef, EntityRelation, McpSpec, RelationType, ValidationError,
    MCP_ENTITY_KIND,
};
pub use processor::{CatalogProcessor, LocationSpec, McpEntityProcessor};
