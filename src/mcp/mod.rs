//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes token queries to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result DTOs

mod server;
pub mod types;

pub use server::{TokenMcpServer, run_server};
