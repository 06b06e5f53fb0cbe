//! Flattening the token tree into a catalog.

use crate::core::data::{CatalogEntry, TokenDocument, TokenGroup, TokenLeaf, TokenNode};
use crate::core::resolve::resolve_leaf;

/// Flatten `subtree` into catalog entries, depth-first in document order.
///
/// `prefix` is the dotted path of `subtree` itself ("" for the root). Every
/// leaf's value is resolved against the full `document`, since reference
/// paths are always absolute. A reference that is dangling or circular
/// produces an entry with no value rather than an error.
pub fn flatten(
    subtree: &TokenGroup,
    prefix: &str,
    document: &TokenDocument,
) -> Vec<CatalogEntry> {
    collect_leaves(subtree, prefix)
        .into_iter()
        .map(|(path, leaf)| {
            let value = match resolve_leaf(&path, leaf, document) {
                Ok(resolved) => resolved.map(|r| r.to_value()),
                Err(err) => {
                    tracing::warn!("{} (at '{}')", err, path);
                    None
                }
            };
            if value.is_none() {
                tracing::debug!("token '{}' has no resolved value", path);
            }
            CatalogEntry::new(path, value, leaf.type_or_unknown())
        })
        .collect()
}

/// Every leaf under `group` with its full dotted path, in document order.
pub fn collect_leaves<'a>(group: &'a TokenGroup, prefix: &str) -> Vec<(String, &'a TokenLeaf)> {
    let mut result = Vec::new();
    collect_into(group, prefix, &mut result);
    result
}

fn collect_into<'a>(
    group: &'a TokenGroup,
    prefix: &str,
    result: &mut Vec<(String, &'a TokenLeaf)>,
) {
    for (key, node) in group.iter() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match node {
            TokenNode::Leaf(leaf) => result.push((path, leaf)),
            TokenNode::Group(child) => collect_into(child, &path, result),
        }
    }
}
