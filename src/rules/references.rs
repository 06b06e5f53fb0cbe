//! Reference checks.
//!
//! Detects tokens whose `{reference}` does not resolve, and tokens whose
//! reference chain is circular.

use crate::{
    core::{ResolveError, collect_leaves, parsers::json::TokenFile, resolve_leaf},
    issues::{CircularReferenceIssue, Issue, TokenLocation, UnresolvedReferenceIssue},
};

/// Check every reference in the token file.
///
/// The whole document is checked, not just the configured namespace, since
/// references may point anywhere. Issues come out in document order.
pub fn check_references(file: &TokenFile) -> Vec<Issue> {
    let document = &file.document;

    collect_leaves(document.root(), "")
        .into_iter()
        .filter_map(|(path, leaf)| {
            let reference = leaf.value.as_reference()?;
            let location = || TokenLocation::new(&file.file_path, file.line_of(&path));

            match resolve_leaf(&path, leaf, document) {
                Ok(Some(_)) => None,
                Ok(None) => Some(Issue::from(UnresolvedReferenceIssue {
                    location: location(),
                    reference: reference.to_string(),
                    path,
                })),
                Err(ResolveError::CircularReference { cycle }) => {
                    Some(Issue::from(CircularReferenceIssue {
                        location: location(),
                        path,
                        cycle,
                    }))
                }
            }
        })
        .collect()
}
