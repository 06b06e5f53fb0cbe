use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Key holding a token's value. Its presence is what makes an object a leaf.
pub const VALUE_KEY: &str = "$value";

/// Key holding a token's declared type tag.
pub const TYPE_KEY: &str = "$type";

/// Type tag used when a leaf does not declare one.
pub const UNKNOWN_TYPE: &str = "unknown";

/// A parsed design-token document.
///
/// The root is always a group; token leaves live below it. The document is
/// immutable once built and is only ever read by the resolution engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDocument {
    root: TokenGroup,
}

impl TokenDocument {
    pub fn new(root: TokenGroup) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TokenGroup {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// A token carrying a `$value`.
    Leaf(TokenLeaf),
    /// An intermediate grouping node.
    Group(TokenGroup),
}

impl TokenNode {
    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            TokenNode::Group(group) => Some(group),
            TokenNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            TokenNode::Leaf(leaf) => Some(leaf),
            TokenNode::Group(_) => None,
        }
    }

    /// Convert back to the JSON shape the node was read from.
    pub fn to_json(&self) -> Value {
        match self {
            TokenNode::Leaf(leaf) => leaf.to_json(),
            TokenNode::Group(group) => group.to_json(),
        }
    }
}

/// A token leaf: `{ "$type": ..., "$value": ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    /// Declared `$type`, if any.
    pub token_type: Option<String>,
    pub value: LeafValue,
}

impl TokenLeaf {
    pub fn new(token_type: Option<String>, value: LeafValue) -> Self {
        Self { token_type, value }
    }

    /// Declared type, or `"unknown"` when the leaf has none.
    pub fn type_or_unknown(&self) -> &str {
        self.token_type.as_deref().unwrap_or(UNKNOWN_TYPE)
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(token_type) = &self.token_type {
            map.insert(TYPE_KEY.to_string(), Value::String(token_type.clone()));
        }
        map.insert(VALUE_KEY.to_string(), self.value.to_json());
        Value::Object(map)
    }
}

/// The raw content of a leaf's `$value`.
#[derive(Debug, Clone, PartialEq)]
pub enum LeafValue {
    Number(Number),
    /// A concrete string such as `"#336699"` or `"Inter"`.
    Literal(String),
    /// A `{dotted.path}` reference; holds the interior path.
    Reference(String),
    /// Objects, arrays, booleans and null are carried through untouched.
    Composite(Value),
}

impl LeafValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => LeafValue::Number(n.clone()),
            Value::String(s) => match reference_path(s) {
                Some(path) => LeafValue::Reference(path.to_string()),
                None => LeafValue::Literal(s.clone()),
            },
            other => LeafValue::Composite(other.clone()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            LeafValue::Number(n) => Value::Number(n.clone()),
            LeafValue::Literal(s) => Value::String(s.clone()),
            LeafValue::Reference(path) => Value::String(format!("{{{}}}", path)),
            LeafValue::Composite(v) => v.clone(),
        }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            LeafValue::Reference(path) => Some(path),
            _ => None,
        }
    }
}

/// Extract the dotted path from a `{dotted.path}` reference string.
///
/// ```
/// use tokenctl::core::reference_path;
///
/// assert_eq!(reference_path("{ld.color.500}"), Some("ld.color.500"));
/// assert_eq!(reference_path("#336699"), None);
/// ```
pub fn reference_path(value: &str) -> Option<&str> {
    value.strip_prefix('{')?.strip_suffix('}')
}

/// An entry of a group: a child node, or any other member kept verbatim.
#[derive(Debug, Clone, PartialEq)]
enum GroupMember {
    Node(TokenNode),
    /// Group-level `$type`, `$description`, scalar children and the like.
    Attribute(Value),
}

/// An ordered mapping of child nodes.
///
/// Members that are not nodes are kept alongside them so the group converts
/// back to JSON exactly as it was read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenGroup {
    members: IndexMap<String, GroupMember>,
}

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: TokenNode) {
        self.members.insert(key.into(), GroupMember::Node(node));
    }

    pub fn insert_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.members.insert(key.into(), GroupMember::Attribute(value));
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        match self.members.get(key)? {
            GroupMember::Node(node) => Some(node),
            GroupMember::Attribute(_) => None,
        }
    }

    /// A non-node member, such as the group's `$type`.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        match self.members.get(key)? {
            GroupMember::Attribute(value) => Some(value),
            GroupMember::Node(_) => None,
        }
    }

    /// Declared group-level `$type`, if any.
    pub fn token_type(&self) -> Option<&str> {
        self.attribute(TYPE_KEY).and_then(Value::as_str)
    }

    /// Child nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenNode)> {
        self.members.iter().filter_map(|(key, member)| match member {
            GroupMember::Node(node) => Some((key, node)),
            GroupMember::Attribute(_) => None,
        })
    }

    /// Number of child nodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.members
                .iter()
                .map(|(key, member)| {
                    let value = match member {
                        GroupMember::Node(node) => node.to_json(),
                        GroupMember::Attribute(value) => value.clone(),
                    };
                    (key.clone(), value)
                })
                .collect(),
        )
    }
}
