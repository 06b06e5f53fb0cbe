use std::fmt;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::value::TokenValue;

/// One flattened token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Full dotted path from the document root (e.g. "ld.color.brand.500").
    pub path: String,
    /// Last path segment (e.g. "500").
    pub name: String,
    /// Resolved value, or `None` when the reference chain does not resolve.
    pub value: Option<TokenValue>,
    /// Declared `$type`, or "unknown".
    #[serde(rename = "type")]
    pub token_type: String,
}

impl CatalogEntry {
    pub fn new(
        path: impl Into<String>,
        value: Option<TokenValue>,
        token_type: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let name = path.rsplit('.').next().unwrap_or(&path).to_string();
        Self {
            path,
            name,
            value,
            token_type: token_type.into(),
        }
    }
}

/// Bucket a catalog entry can be sorted into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum Category {
    Colors,
    Spacing,
    BorderRadius,
    Typography,
    Effects,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Colors,
        Category::Spacing,
        Category::BorderRadius,
        Category::Typography,
        Category::Effects,
    ];

    /// Key used for this bucket in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Spacing => "spacing",
            Category::BorderRadius => "borderRadius",
            Category::Typography => "typography",
            Category::Effects => "effects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The catalog partitioned by category. Entries keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBuckets {
    pub colors: Vec<CatalogEntry>,
    pub spacing: Vec<CatalogEntry>,
    pub border_radius: Vec<CatalogEntry>,
    pub typography: Vec<CatalogEntry>,
    pub effects: Vec<CatalogEntry>,
}

impl CategoryBuckets {
    pub fn get(&self, category: Category) -> &[CatalogEntry] {
        match category {
            Category::Colors => &self.colors,
            Category::Spacing => &self.spacing,
            Category::BorderRadius => &self.border_radius,
            Category::Typography => &self.typography,
            Category::Effects => &self.effects,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<CatalogEntry> {
        match category {
            Category::Colors => &mut self.colors,
            Category::Spacing => &mut self.spacing,
            Category::BorderRadius => &mut self.border_radius,
            Category::Typography => &mut self.typography,
            Category::Effects => &mut self.effects,
        }
    }

    /// Buckets paired with their category, in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CatalogEntry])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, entries)| entries.is_empty())
    }

    /// Total number of placements (an entry in two buckets counts twice).
    pub fn total(&self) -> usize {
        self.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Keep only entries matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&CatalogEntry) -> bool) {
        for category in Category::ALL {
            self.get_mut(category).retain(|entry| keep(entry));
        }
    }
}
