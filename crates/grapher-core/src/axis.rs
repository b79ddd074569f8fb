// File: crates/grapher-core/src/axis.rs
// Summary: Axis titles and numeric scale kind handed to the renderer.

use serde::{Deserialize, Serialize};

use crate::view::YScale;

pub const X_TITLE: &str = "Date";
pub const Y_TITLE: &str = "Cases";
/// Appended to the Y title in delta mode.
pub const CHANGE_SUFFIX: &str = " (Change)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Logarithmic,
}

impl ScaleKind {
    /// Scale requested by a Y mode. Delta stays linear since changes can be negative.
    pub fn for_yscale(yscale: YScale) -> Self {
        match yscale {
            YScale::Log => ScaleKind::Logarithmic,
            YScale::Linear | YScale::Delta => ScaleKind::Linear,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    pub fn for_yscale(yscale: YScale) -> Self {
        let y = match yscale {
            YScale::Delta => format!("{Y_TITLE}{CHANGE_SUFFIX}"),
            YScale::Linear | YScale::Log => Y_TITLE.to_string(),
        };
        Self { x: X_TITLE.to_string(), y }
    }
}
