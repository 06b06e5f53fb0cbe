//! Issue types for token document checks.
//!
//! Each issue carries everything the reporter needs: where the token is
//! declared, what is wrong, and how severe it is.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnresolvedReference,
    CircularReference,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnresolvedReference => write!(f, "unresolved-reference"),
            Rule::CircularReference => write!(f, "circular-reference"),
        }
    }
}

/// Where a token is declared in its file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenLocation {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl TokenLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A token whose `{reference}` does not lead to any node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReferenceIssue {
    pub location: TokenLocation,
    /// Path of the token carrying the reference.
    pub path: String,
    /// The referenced path, without braces.
    pub reference: String,
}

impl UnresolvedReferenceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnresolvedReference
    }
}

/// A token whose reference chain loops back on itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularReferenceIssue {
    pub location: TokenLocation,
    pub path: String,
    /// Paths visited, ending with the repeated one.
    pub cycle: Vec<String>,
}

impl CircularReferenceIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::CircularReference
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while checking a token document.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnresolvedReference(UnresolvedReferenceIssue),
    CircularReference(CircularReferenceIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> &TokenLocation;

    /// Primary message to display (usually the token path).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UnresolvedReferenceIssue {
    fn location(&self) -> &TokenLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.path.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("check the reference path for typos; paths are absolute from the document root")
    }

    fn details(&self) -> Option<String> {
        Some(format!("{{{}}} does not resolve", self.reference))
    }
}

impl Report for CircularReferenceIssue {
    fn location(&self) -> &TokenLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.path.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.cycle.join(" -> "))
    }
}
