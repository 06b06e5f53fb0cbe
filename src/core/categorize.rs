//! Sorting catalog entries into category buckets.
//!
//! Classification is a naming-convention heuristic over the token path, not
//! a schema check. All rules live in [`classify`].

use crate::core::data::{CatalogEntry, Category, CategoryBuckets};

/// Categories `entry` belongs to, in bucket order.
///
/// Each rule is tested independently, so an entry can land in zero, one or
/// several buckets:
///
/// - `Colors`: declared type is exactly `"color"`
/// - `Spacing`: path contains `"spacing"` but not `"radius"`
/// - `BorderRadius`: path contains `"radius"` or `"borderRadius"`
/// - `Typography`: path contains `"font"`
/// - `Effects`: path contains `"shadow"` or `"effect"`
pub fn classify(entry: &CatalogEntry) -> Vec<Category> {
    let path = entry.path.as_str();
    let mut categories = Vec::new();

    if entry.token_type == "color" {
        categories.push(Category::Colors);
    }
    if path.contains("spacing") && !path.contains("radius") {
        categories.push(Category::Spacing);
    }
    if path.contains("radius") || path.contains("borderRadius") {
        categories.push(Category::BorderRadius);
    }
    if path.contains("font") {
        categories.push(Category::Typography);
    }
    if path.contains("shadow") || path.contains("effect") {
        categories.push(Category::Effects);
    }

    categories
}

/// Partition a catalog into buckets, preserving catalog order in each.
pub fn categorize(catalog: &[CatalogEntry]) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::default();
    for entry in catalog {
        for category in classify(entry) {
            buckets.get_mut(category).push(entry.clone());
        }
    }
    buckets
}
