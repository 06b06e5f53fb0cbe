use anyhow::Result;
use thiserror::Error;

use super::style::{Property, StyleChange, plan_style_changes};
use crate::core::{CategoryBuckets, ResolveError, TokenDocument, TokenResolver, TokenValue};

/// A host object that style changes can be written to.
///
/// Implemented by the host layer for whatever it treats as a selectable
/// object (a frame, a component, ...).
pub trait StyleTarget {
    /// Identifier used in failure reports.
    fn id(&self) -> &str;

    /// Apply one change. Properties the target does not have should be
    /// ignored and reported as `Ok`.
    fn apply_style(&mut self, change: &StyleChange) -> Result<()>;
}

/// What the caller wants applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyRequest {
    pub token_path: Option<String>,
    pub token_type: Option<String>,
    pub property: Option<Property>,
}

impl ApplyRequest {
    pub fn new(token_path: impl Into<String>) -> Self {
        Self {
            token_path: Some(token_path.into()),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.property = Some(property);
        self
    }
}

/// Why an apply action could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("Please select a component or frame first")]
    NoTargetSelected,
    #[error("No token selected")]
    NoTokenSpecified,
    #[error("Tokens not loaded")]
    DocumentNotLoaded,
    #[error("Token value not found: {path}")]
    TokenNotFound { path: String },
}

impl ApplyError {
    /// Stable camelCase identifier for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ApplyError::NoTargetSelected => "noTargetSelected",
            ApplyError::NoTokenSpecified => "noTokenSpecified",
            ApplyError::DocumentNotLoaded => "documentNotLoaded",
            ApplyError::TokenNotFound { .. } => "tokenNotFound",
        }
    }
}

/// A target that failed while changes were being applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetFailure {
    pub target_id: String,
    pub error: String,
}

/// Outcome of a successful apply action.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplySummary {
    pub value: TokenValue,
    pub changes: Vec<StyleChange>,
    /// Number of targets processed.
    pub target_count: usize,
    pub failures: Vec<TargetFailure>,
}

impl ApplySummary {
    pub fn message(&self) -> String {
        format!(
            "Applied token to {} {}",
            self.target_count,
            if self.target_count == 1 { "item" } else { "items" }
        )
    }
}

/// Query surface for a host plugin: one optionally loaded token document.
///
/// Holds no global state; the host owns the session and decides its
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct TokenSession {
    resolver: Option<TokenResolver>,
    namespace: Option<String>,
}

impl TokenSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace used for every document loaded afterwards.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.resolver = self
            .resolver
            .map(|resolver| resolver.with_namespace(namespace.clone()));
        self.namespace = Some(namespace);
        self
    }

    /// Replace the current document.
    pub fn load_document(&mut self, document: TokenDocument) {
        let resolver = TokenResolver::new(document);
        self.resolver = Some(match &self.namespace {
            Some(namespace) => resolver.with_namespace(namespace.clone()),
            None => resolver,
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.resolver.is_some()
    }

    pub fn resolver(&self) -> Option<&TokenResolver> {
        self.resolver.as_ref()
    }

    /// Categorized view of the current document; empty when none is loaded.
    pub fn categorized_tokens(&self) -> CategoryBuckets {
        self.resolver
            .as_ref()
            .map(TokenResolver::categorized_tokens)
            .unwrap_or_default()
    }

    /// Resolve one token path; `None` when nothing is loaded or the path
    /// does not resolve.
    pub fn resolve_path(&self, path: &str) -> Result<Option<TokenValue>, ResolveError> {
        match &self.resolver {
            Some(resolver) => resolver.resolve_path(path),
            None => Ok(None),
        }
    }

    /// Resolve the requested token and work out its style changes, without
    /// touching any target.
    pub fn plan(
        &self,
        request: &ApplyRequest,
    ) -> Result<(TokenValue, Vec<StyleChange>), ApplyError> {
        let token_path = request
            .token_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .ok_or(ApplyError::NoTokenSpecified)?;
        let resolver = self
            .resolver
            .as_ref()
            .ok_or(ApplyError::DocumentNotLoaded)?;

        let value = match resolver.resolve_path(token_path) {
            Ok(Some(value)) => value,
            Ok(None) => {
                return Err(ApplyError::TokenNotFound {
                    path: token_path.to_string(),
                });
            }
            Err(err) => {
                tracing::warn!("{}", err);
                return Err(ApplyError::TokenNotFound {
                    path: token_path.to_string(),
                });
            }
        };

        let changes = plan_style_changes(
            token_path,
            request.token_type.as_deref(),
            request.property,
            &value,
        );
        Ok((value, changes))
    }

    /// Apply the requested token to every target.
    ///
    /// Targets are processed one at a time; a failing target is logged and
    /// recorded in the summary, and the remaining targets are still
    /// processed.
    pub fn apply<T: StyleTarget>(
        &self,
        targets: &mut [T],
        request: &ApplyRequest,
    ) -> Result<ApplySummary, ApplyError> {
        if targets.is_empty() {
            return Err(ApplyError::NoTargetSelected);
        }
        let (value, changes) = self.plan(request)?;

        let mut failures = Vec::new();
        for target in targets.iter_mut() {
            for change in &changes {
                if let Err(err) = target.apply_style(change) {
                    tracing::warn!("Error applying token to '{}': {:#}", target.id(), err);
                    failures.push(TargetFailure {
                        target_id: target.id().to_string(),
                        error: format!("{:#}", err),
                    });
                    break;
                }
            }
        }

        Ok(ApplySummary {
            value,
            changes,
            target_count: targets.len(),
            failures,
        })
    }
}
