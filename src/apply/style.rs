use std::fmt;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::{Rgba, parse_color};
use crate::core::TokenValue;

/// Visual property a token is applied to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum Property {
    Fill,
    FontSize,
    LineHeight,
    FontWeight,
    CornerRadius,
    Spacing,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Fill => "fill",
            Property::FontSize => "fontSize",
            Property::LineHeight => "lineHeight",
            Property::FontWeight => "fontWeight",
            Property::CornerRadius => "cornerRadius",
            Property::Spacing => "spacing",
        };
        write!(f, "{}", name)
    }
}

/// A single property assignment for a host object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StyleChange {
    /// Replace fills with one solid paint.
    SolidFill { color: Rgba },
    FontSize { value: f64 },
    /// Line height in pixels.
    LineHeight { value: f64 },
    FontWeight { value: f64 },
    CornerRadius { value: f64 },
    /// Uniform padding on all four sides.
    Padding { value: f64 },
}

/// Work out which property changes a resolved token implies.
///
/// - a `color`-typed token, or any token applied to `fill`, becomes a solid
///   fill when its value parses as a color
/// - numeric tokens set `fontSize`, `lineHeight`, `fontWeight` or
///   `cornerRadius` when that property is requested
/// - numeric `spacing` tokens become uniform padding, but only for tokens
///   whose path mentions "padding"
///
/// Anything else yields no change.
pub fn plan_style_changes(
    token_path: &str,
    token_type: Option<&str>,
    property: Option<Property>,
    value: &TokenValue,
) -> Vec<StyleChange> {
    let mut changes = Vec::new();

    if (token_type == Some("color") || property == Some(Property::Fill))
        && let Some(color) = parse_color(&color_text(value))
    {
        changes.push(StyleChange::SolidFill { color });
    }

    let (Some(property), Some(number)) = (property, value.as_f64()) else {
        return changes;
    };
    let change = match property {
        Property::FontSize => Some(StyleChange::FontSize { value: number }),
        Property::LineHeight => Some(StyleChange::LineHeight { value: number }),
        Property::FontWeight => Some(StyleChange::FontWeight { value: number }),
        Property::CornerRadius => Some(StyleChange::CornerRadius { value: number }),
        Property::Spacing if token_path.contains("padding") => {
            Some(StyleChange::Padding { value: number })
        }
        Property::Spacing | Property::Fill => None,
    };
    changes.extend(change);
    changes
}

fn color_text(value: &TokenValue) -> String {
    match value {
        TokenValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
