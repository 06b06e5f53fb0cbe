//! Rule implementations for tokenctl.
//!
//! Pure functions over a parsed token file that return issues.
//!
//! ## Module Structure
//!
//! - `references`: Unresolved and circular reference detection

pub mod references;

pub use references::check_references;
