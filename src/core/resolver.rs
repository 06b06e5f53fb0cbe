use crate::core::categorize::categorize;
use crate::core::data::{CatalogEntry, CategoryBuckets, TokenDocument, TokenNode, TokenValue};
use crate::core::flatten::flatten;
use crate::core::resolve::{ResolveError, lookup};

/// Namespace group flattened by default.
pub const DEFAULT_NAMESPACE: &str = "ld";

/// Resolver over one token document.
///
/// Owns the document and the namespace key whose subtree feeds the catalog.
/// Every query recomputes from the document; nothing is cached.
#[derive(Debug, Clone)]
pub struct TokenResolver {
    document: TokenDocument,
    namespace: String,
}

impl TokenResolver {
    pub fn new(document: TokenDocument) -> Self {
        Self {
            document,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Use `namespace` as the catalog root. An empty string means the whole
    /// document.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn document(&self) -> &TokenDocument {
        &self.document
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Flatten the namespace subtree.
    ///
    /// Empty when the namespace key is missing or is itself a leaf.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        if self.namespace.is_empty() {
            return flatten(self.document.root(), "", &self.document);
        }
        match self.document.root().get(&self.namespace) {
            Some(TokenNode::Group(group)) => flatten(group, &self.namespace, &self.document),
            Some(TokenNode::Leaf(_)) | None => {
                tracing::debug!("namespace '{}' not found in token document", self.namespace);
                Vec::new()
            }
        }
    }

    pub fn categorized_tokens(&self) -> CategoryBuckets {
        categorize(&self.catalog())
    }

    /// Resolve a single dotted path to an owned value.
    pub fn resolve_path(&self, path: &str) -> Result<Option<TokenValue>, ResolveError> {
        Ok(lookup(path, &self.document)?.map(|resolved| resolved.to_value()))
    }
}
