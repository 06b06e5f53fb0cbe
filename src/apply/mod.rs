//! Turning a resolved token into property changes on host objects.
//!
//! The scene graph itself belongs to the host. This module only decides
//! *what* to set (`style`), parses color values (`color`), and drives a
//! per-target apply loop through the `StyleTarget` trait (`session`).

mod color;
mod session;
mod style;

pub use color::{Rgba, parse_color};
pub use session::{
    ApplyError, ApplyRequest, ApplySummary, StyleTarget, TargetFailure, TokenSession,
};
pub use style::{Property, StyleChange, plan_style_changes};
