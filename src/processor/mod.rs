//! Catalog processing for MCP entities.

mod post_process;
mod relations;

pub use post_process::{CatalogProcessor, LocationSpec, McpEntityProcessor};
pub use relations::emit_mcp_relations;
