use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// rgb(51, 102, 153) / rgba(51, 102, 153, 0.5)
static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)(?:,\s*([\d.]+))?\)").unwrap()
});

// #336699 / 336699 / #33669980
static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})?$").unwrap()
});

/// A color with channels normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Parse a CSS-style color string.
///
/// Accepts `rgb()`/`rgba()` functional notation and 6- or 8-digit hex with
/// an optional leading `#`. Alpha defaults to 1.
///
/// ```
/// use tokenctl::apply::parse_color;
///
/// let c = parse_color("#ff000080").unwrap();
/// assert_eq!(c.r, 1.0);
/// assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
/// assert!(parse_color("red").is_none());
/// ```
pub fn parse_color(value: &str) -> Option<Rgba> {
    if let Some(caps) = RGBA_REGEX.captures(value) {
        let channel = |i: usize| -> Option<f64> {
            Some(caps[i].parse::<u32>().ok()? as f64 / 255.0)
        };
        let a = match caps.get(4) {
            Some(alpha) => alpha.as_str().parse::<f64>().ok()?,
            None => 1.0,
        };
        return Some(Rgba::new(channel(1)?, channel(2)?, channel(3)?, a));
    }

    let caps = HEX_REGEX.captures(value)?;
    let channel = |i: usize| -> Option<f64> {
        Some(u8::from_str_radix(&caps[i], 16).ok()? as f64 / 255.0)
    };
    let a = match caps.get(4) {
        Some(alpha) => u8::from_str_radix(alpha.as_str(), 16).ok()? as f64 / 255.0,
        None => 1.0,
    };
    Some(Rgba::new(channel(1)?, channel(2)?, channel(3)?, a))
}
