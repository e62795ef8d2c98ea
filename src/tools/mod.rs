//! MCP tools implementation

pub mod dedup;
pub mod load;
pub mod search;
