//! Core data types shared by every resolution phase.
//!
//! This module defines the token tree, resolved values, and the flattened
//! catalog produced from them.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog entries and category buckets
//! - `token`: The token tree (TokenDocument, TokenNode, TokenLeaf, LeafValue)
//! - `value`: Resolved values (borrowed `Resolved`, owned `TokenValue`)

pub mod catalog;
pub mod token;
pub mod value;

pub use catalog::{CatalogEntry, Category, CategoryBuckets};
pub use token::{
    LeafValue, TYPE_KEY, TokenDocument, TokenGroup, TokenLeaf, TokenNode, UNKNOWN_TYPE, VALUE_KEY,
    reference_path,
};
pub use value::{Resolved, TokenValue};
