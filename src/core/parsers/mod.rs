//! Token file parsers.
//!
//! - `json`: Reads a design-token JSON file into a `TokenDocument`

pub mod json;
