// File: crates/grapher-core/src/projection.rs
// Summary: Builds the chart-ready projection (labels, colored series, axes) for one view state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::{AxisLabels, ScaleKind};
use crate::palette::{colors_for, Color};
use crate::table::Table;
use crate::view::{ViewState, YScale};

/// What to do when log mode meets values a logarithmic axis cannot show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogScalePolicy {
    /// Forward the requested scale unchanged; the renderer decides.
    #[default]
    Forward,
    /// Use a linear scale if any projected value is zero or negative.
    LinearWhenNonPositive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    pub log_scale_policy: LogScalePolicy,
}

/// One line of the chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub name: String,
    pub color: Color,
    pub values: Vec<i64>,
}

/// Render-ready data for one view state against one table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub labels: Vec<String>,
    pub series: Vec<ProjectedSeries>,
    pub axis_labels: AxisLabels,
    pub scale: ScaleKind,
    /// Requested names that were not in the table.
    #[serde(skip)]
    pub dropped: Vec<String>,
}

impl Projection {
    pub fn series_named(&self, name: &str) -> Option<&ProjectedSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Pretty JSON for the rendering collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Project with default options.
pub fn project(table: &Table, state: &ViewState) -> Projection {
    project_with(table, state, &ProjectionOptions::default())
}

pub fn project_with(table: &Table, state: &ViewState, options: &ProjectionOptions) -> Projection {
    let colors = colors_for(state.countries.len());
    let mut seen = HashSet::new();
    let mut dropped = Vec::new();
    let mut series = Vec::with_capacity(state.countries.len());

    for name in &state.countries {
        if !seen.insert(name.as_str()) {
            continue;
        }
        let source = match table.series(name) {
            Ok(s) => s,
            Err(err) => {
                warn!(error = %err, "dropping entity from projection");
                dropped.push(name.clone());
                continue;
            }
        };
        let values = match state.yscale {
            YScale::Delta => source.delta().values,
            YScale::Linear | YScale::Log => source.values.clone(),
        };
        let color = colors[series.len()];
        series.push(ProjectedSeries { name: name.clone(), color, values });
    }

    let mut scale = ScaleKind::for_yscale(state.yscale);
    if scale == ScaleKind::Logarithmic
        && options.log_scale_policy == LogScalePolicy::LinearWhenNonPositive
        && series.iter().any(|s| s.values.iter().any(|&v| v <= 0))
    {
        debug!("non-positive values under log mode; using linear scale");
        scale = ScaleKind::Linear;
    }

    debug!(series = series.len(), dropped = dropped.len(), yscale = %state.yscale, "built projection");
    Projection {
        labels: table.labels(),
        series,
        axis_labels: AxisLabels::for_yscale(state.yscale),
        scale,
        dropped,
    }
}
