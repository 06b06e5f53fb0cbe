//! tokenctl - design token resolution engine
//!
//! tokenctl reads a nested design-token JSON document, follows `{dotted.path}`
//! references to their final values, and sorts the resulting tokens into
//! colors, spacing, border radius, typography and effects. It ships as a
//! library, a CLI, and an MCP server.
//!
//! ## Module Structure
//!
//! - `apply`: Turning resolved tokens into style changes on host objects
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Token model, reference resolution, flattening and categorization
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic logging setup
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Reference checks over a token file

pub mod apply;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod mcp;
pub mod rules;
