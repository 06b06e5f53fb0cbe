use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

use super::token::TokenGroup;

/// Outcome of following a value to its end, borrowed from the document.
///
/// `Group` is the pass-through case: a reference or lookup that lands on a
/// grouping node hands back the node itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Number(&'a Number),
    Text(&'a str),
    Composite(&'a Value),
    Group(&'a TokenGroup),
}

impl Resolved<'_> {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Resolved::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Resolved::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Resolved::Group(_))
    }

    /// Detach from the document.
    pub fn to_value(&self) -> TokenValue {
        match self {
            Resolved::Number(n) => TokenValue::Number((*n).clone()),
            Resolved::Text(s) => TokenValue::String((*s).to_string()),
            Resolved::Composite(v) => TokenValue::Composite((*v).clone()),
            Resolved::Group(group) => TokenValue::Composite(group.to_json()),
        }
    }
}

/// An owned, resolved token value as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(Number),
    String(String),
    Composite(Value),
}

impl TokenValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            TokenValue::Number(n) => Value::Number(n.clone()),
            TokenValue::String(s) => Value::String(s.clone()),
            TokenValue::Composite(v) => v.clone(),
        }
    }
}

impl From<Resolved<'_>> for TokenValue {
    fn from(resolved: Resolved<'_>) -> Self {
        resolved.to_value()
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::String(s) => write!(f, "{}", s),
            TokenValue::Composite(v) => write!(f, "{}", v),
        }
    }
}
