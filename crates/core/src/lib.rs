//! # tripdesk core
//!
//! The tool abstraction shared by every tripdesk crate: the `Tool` trait,
//! the name-keyed `ToolRegistry`, and the error types tools report.
//!
//! Tools take a single string input and hand back a single string output.
//! An agent layer (not part of this workspace) discovers them through
//! `ToolRegistry::definitions` and dispatches `ToolCall`s by name.

pub mod error;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result, ToolError};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
