use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::data::{
    LeafValue, TYPE_KEY, TokenDocument, TokenGroup, TokenLeaf, TokenNode, VALUE_KEY,
};

/// A token file read from disk, kept alongside its text for line lookups.
#[derive(Debug)]
pub struct TokenFile {
    pub file_path: String,
    pub document: TokenDocument,
    content: String,
    line_index: Vec<usize>,
}

impl TokenFile {
    /// 1-based line where the dotted `key_path` is declared.
    pub fn line_of(&self, key_path: &str) -> usize {
        find_key_line(&self.content, key_path, &self.line_index)
    }
}

pub fn parse_token_file(path: &Path) -> Result<TokenFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file: {:?}", path))?;

    let document = parse_token_str(&content)
        .with_context(|| format!("Failed to parse token file: {:?}", path))?;

    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(&content);
    Ok(TokenFile {
        file_path: path.to_string_lossy().to_string(),
        document,
        content,
        line_index,
    })
}

pub fn parse_token_str(content: &str) -> Result<TokenDocument> {
    let json: Value = serde_json::from_str(content)?;
    Ok(document_from_json(&json))
}

/// Build a token document from arbitrary JSON.
///
/// Never fails: a non-object root yields an empty document. Group members
/// that are neither leaves nor groups are kept as group attributes.
pub fn document_from_json(json: &Value) -> TokenDocument {
    match json {
        Value::Object(map) => TokenDocument::new(build_group(map, "")),
        other => {
            tracing::warn!(
                "token document root is {}, not an object; treating it as empty",
                json_kind(other)
            );
            TokenDocument::default()
        }
    }
}

fn build_group(map: &Map<String, Value>, prefix: &str) -> TokenGroup {
    let mut group = TokenGroup::new();
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(child) if !key.starts_with('$') => {
                group.insert(key.clone(), build_node(child, &path));
            }
            other => {
                if key != TYPE_KEY {
                    tracing::debug!(
                        "keeping {} at '{}' as a group attribute",
                        json_kind(other),
                        path
                    );
                }
                group.insert_attribute(key.clone(), other.clone());
            }
        }
    }
    group
}

fn build_node(map: &Map<String, Value>, path: &str) -> TokenNode {
    match map.get(VALUE_KEY) {
        Some(value) => {
            let token_type = map
                .get(TYPE_KEY)
                .and_then(Value::as_str)
                .map(str::to_string);
            TokenNode::Leaf(TokenLeaf::new(token_type, LeafValue::from_json(value)))
        }
        None => TokenNode::Group(build_group(map, path)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}

/// Find the line number where a token path is declared in the JSON content.
///
/// Searches for each path segment in sequence so that `ld.color.500` finds
/// the `"500"` nested under `"color"`, not one in another group. A match
/// only counts when it is a key (followed by `:`), not a string value.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if after_pattern < remaining.len()
                && remaining[after_pattern..].trim_start().starts_with(':')
            {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}
