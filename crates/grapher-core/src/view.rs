// File: crates/grapher-core/src/view.rs
// First-class view state: which entities are shown and how the Y values are presented.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrapherError;
use crate::types::AGGREGATE_LABEL;

/// Y presentation mode carried in the location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YScale {
    #[default]
    Linear,
    Log,
    /// Day-over-day change of each series.
    Delta,
}

impl YScale {
    pub const ALL: [YScale; 3] = [YScale::Linear, YScale::Log, YScale::Delta];

    pub fn as_str(&self) -> &'static str {
        match self {
            YScale::Linear => "linear",
            YScale::Log => "log",
            YScale::Delta => "delta",
        }
    }
}

impl fmt::Display for YScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YScale {
    type Err = GrapherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YScale::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| GrapherError::MalformedState(format!("unknown yscale '{s}'")))
    }
}

/// Serializable selection and mode. Missing fields decode to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Selected entity names in legend order.
    pub countries: Vec<String>,
    pub yscale: YScale,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { countries: vec![AGGREGATE_LABEL.to_string()], yscale: YScale::Linear }
    }
}

impl ViewState {
    pub fn new<I, S>(countries: I, yscale: YScale) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { countries: countries.into_iter().map(Into::into).collect(), yscale }
    }

    pub fn with_yscale(mut self, yscale: YScale) -> Self {
        self.yscale = yscale;
        self
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.countries.iter().any(|c| c == name)
    }
}
