//! Reference resolution and path lookup.
//!
//! Both entry points share one root-to-node walk over the token tree:
//!
//! - `resolve` follows a leaf value through `{dotted.path}` references until a
//!   concrete value is reached.
//! - `lookup` starts from a plain dotted path instead of a reference string.
//!
//! Absence is not an error. A path that does not resolve yields `Ok(None)`;
//! the only failure is a reference chain that revisits a path.

use serde_json::Value;
use thiserror::Error;

use crate::core::data::{
    LeafValue, Resolved, TYPE_KEY, TokenDocument, TokenGroup, TokenLeaf, TokenNode, VALUE_KEY,
    reference_path,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Circular token reference: {}", .cycle.join(" -> "))]
    CircularReference { cycle: Vec<String> },
}

/// Result of following a value: resolved, absent (`None`), or circular.
pub type Resolution<'a> = Result<Option<Resolved<'a>>, ResolveError>;

/// Where a dotted-path walk stopped.
#[derive(Debug, Clone, Copy)]
enum Landing<'a> {
    Group(&'a TokenGroup),
    Leaf(&'a TokenLeaf),
    /// A leaf's raw `$value`, reached through an explicit `$value` segment.
    Value(&'a LeafValue),
    /// A leaf's `$type` tag.
    TypeTag(&'a str),
    /// A group attribute, or a position inside a composite `$value`.
    Json(&'a Value),
}

/// Resolve a raw leaf value against the whole document.
///
/// Numbers, literals and composite values come back unchanged; references
/// are followed until a concrete value, a group, or a dead end. A `null`
/// value counts as absent.
pub fn resolve<'a>(value: &'a LeafValue, document: &'a TokenDocument) -> Resolution<'a> {
    resolve_value(value, document, &mut Vec::new())
}

/// Resolve a raw JSON token value (number or string) against the document.
pub fn resolve_raw<'a>(value: &'a Value, document: &'a TokenDocument) -> Resolution<'a> {
    resolve_json(value, document, &mut Vec::new())
}

/// Resolve the value of `leaf`, which lives at `path`.
///
/// The leaf's own path seeds the cycle check, so a token referencing itself
/// is reported as circular.
pub fn resolve_leaf<'a>(
    path: &str,
    leaf: &'a TokenLeaf,
    document: &'a TokenDocument,
) -> Resolution<'a> {
    let mut chain = vec![path.to_string()];
    resolve_value(&leaf.value, document, &mut chain)
}

/// Resolve a plain dotted path (no braces) directly against the document.
///
/// A path landing on a leaf resolves that leaf's value; a path landing on a
/// group returns the group; a path that does not exist returns `None`.
pub fn lookup<'a>(path: &str, document: &'a TokenDocument) -> Resolution<'a> {
    let Some(landing) = walk(document, path) else {
        tracing::debug!("token path '{}' not found", path);
        return Ok(None);
    };
    let mut chain = vec![path.to_string()];
    resolve_landing(landing, document, &mut chain)
}

fn resolve_value<'a>(
    value: &'a LeafValue,
    document: &'a TokenDocument,
    chain: &mut Vec<String>,
) -> Resolution<'a> {
    match value {
        LeafValue::Number(n) => Ok(Some(Resolved::Number(n))),
        LeafValue::Literal(s) => Ok(Some(Resolved::Text(s))),
        LeafValue::Composite(Value::Null) => Ok(None),
        LeafValue::Composite(v) => Ok(Some(Resolved::Composite(v))),
        LeafValue::Reference(path) => follow(path, document, chain),
    }
}

fn resolve_json<'a>(
    value: &'a Value,
    document: &'a TokenDocument,
    chain: &mut Vec<String>,
) -> Resolution<'a> {
    match value {
        Value::Number(n) => Ok(Some(Resolved::Number(n))),
        Value::String(s) => match reference_path(s) {
            Some(path) => follow(path, document, chain),
            None => Ok(Some(Resolved::Text(s))),
        },
        other => Ok(verbatim(other)),
    }
}

/// A JSON value taken as it stands, without following references.
fn verbatim(value: &Value) -> Option<Resolved<'_>> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(Resolved::Number(n)),
        Value::String(s) => Some(Resolved::Text(s)),
        other => Some(Resolved::Composite(other)),
    }
}

fn follow<'a>(
    path: &str,
    document: &'a TokenDocument,
    chain: &mut Vec<String>,
) -> Resolution<'a> {
    if chain.iter().any(|visited| visited == path) {
        let mut cycle = chain.clone();
        cycle.push(path.to_string());
        return Err(ResolveError::CircularReference { cycle });
    }
    chain.push(path.to_string());

    match walk(document, path) {
        Some(landing) => resolve_landing(landing, document, chain),
        None => {
            tracing::debug!("reference '{{{}}}' does not resolve", path);
            Ok(None)
        }
    }
}

fn resolve_landing<'a>(
    landing: Landing<'a>,
    document: &'a TokenDocument,
    chain: &mut Vec<String>,
) -> Resolution<'a> {
    match landing {
        Landing::Group(group) => Ok(Some(Resolved::Group(group))),
        Landing::Leaf(leaf) => resolve_value(&leaf.value, document, chain),
        Landing::Value(value) => resolve_value(value, document, chain),
        Landing::TypeTag(tag) => Ok(Some(Resolved::Text(tag))),
        Landing::Json(value) => Ok(verbatim(value)),
    }
}

/// Walk `path` from the document root, one key per dot-separated segment.
///
/// On a group a segment names a child node, or failing that a group
/// attribute such as `$type`. On a leaf only `$value` and `$type` continue.
/// A walk may descend into a composite `$value`; whatever it lands on there,
/// or on a group attribute, is returned verbatim. Reference strings inside
/// composites are never followed, matching how a whole composite comes back
/// from `lookup`.
fn walk<'a>(document: &'a TokenDocument, path: &str) -> Option<Landing<'a>> {
    let mut current = Landing::Group(document.root());
    for segment in path.split('.') {
        current = match current {
            Landing::Group(group) => match group.get(segment) {
                Some(TokenNode::Group(child)) => Landing::Group(child),
                Some(TokenNode::Leaf(leaf)) => Landing::Leaf(leaf),
                None => Landing::Json(group.attribute(segment)?),
            },
            Landing::Leaf(leaf) => match segment {
                VALUE_KEY => Landing::Value(&leaf.value),
                TYPE_KEY => Landing::TypeTag(leaf.token_type.as_deref()?),
                _ => return None,
            },
            Landing::Value(LeafValue::Composite(value)) | Landing::Json(value) => {
                Landing::Json(value.as_object()?.get(segment)?)
            }
            Landing::Value(_) | Landing::TypeTag(_) => return None,
        };
    }
    Some(current)
}
