//! Core token resolution engine.
//!
//! Data flows one way:
//!
//! 1. **Parse**: token JSON → `TokenDocument` (`parsers`)
//! 2. **Flatten**: document → catalog, resolving each leaf (`flatten`, `resolve`)
//! 3. **Categorize**: catalog → category buckets (`categorize`)
//!
//! `resolve::lookup` resolves a single dotted path without a flatten pass.
//! `TokenResolver` ties the steps together over one owned document, and
//! `ProjectContext` loads that document plus configuration from disk.

pub mod categorize;
pub mod context;
pub mod data;
pub mod flatten;
pub mod parsers;
pub mod resolve;
mod resolver;

pub use categorize::{categorize, classify};
pub use context::ProjectContext;
pub use data::*;
pub use flatten::{collect_leaves, flatten};
pub use resolve::{Resolution, ResolveError, lookup, resolve, resolve_leaf, resolve_raw};
pub use resolver::{DEFAULT_NAMESPACE, TokenResolver};
