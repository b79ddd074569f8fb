// File: crates/grapher-core/src/series.rs
// Summary: Day keys and per-entity daily count series.
// Notes:
// - A Series is positional: index k is the count for the k-th date column of the
//   source table. Series never carry their own dates.

use std::fmt;

use chrono::NaiveDate;

use crate::error::{GrapherError, GrapherResult};

/// Calendar date of one table column, without a time component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self { Self(date) }

    /// Parse the two-digit-year `M/D/YY` header form. The year is `2000 + YY`.
    pub fn parse_mdy(text: &str) -> GrapherResult<Self> {
        let bad = || GrapherError::MalformedInput(format!("invalid date column '{text}'"));
        let mut parts = text.trim().split('/');
        let (Some(m), Some(d), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
            return Err(bad());
        };
        let month: u32 = m.trim().parse().map_err(|_| bad())?;
        let day: u32 = d.trim().parse().map_err(|_| bad())?;
        let year: i32 = y.trim().parse().map_err(|_| bad())?;
        if !(0..=99).contains(&year) {
            return Err(bad());
        }
        NaiveDate::from_ymd_opt(2000 + year, month, day).map(Self).ok_or_else(bad)
    }

    pub fn date(&self) -> NaiveDate { self.0 }

    /// Display label used on the X axis (`YYYY-MM-DD`).
    pub fn label(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Daily counts for one entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    pub values: Vec<i64>,
}

impl Series {
    /// Zero-filled series of `days` entries.
    pub fn zeros(days: usize) -> Self {
        Self { values: vec![0; days] }
    }

    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn as_slice(&self) -> &[i64] { &self.values }

    /// Add `counts` elementwise, saturating at the `i64` bounds.
    /// Positions past either end are left untouched.
    pub fn accumulate(&mut self, counts: &[i64]) {
        for (acc, v) in self.values.iter_mut().zip(counts) {
            *acc = acc.saturating_add(*v);
        }
    }

    /// First-difference sequence: `d[0] = 0`, `d[k] = s[k] - s[k-1]` (saturating).
    pub fn delta(&self) -> Self {
        let mut out = Vec::with_capacity(self.values.len());
        let mut prev = self.values.first().copied();
        for &v in &self.values {
            out.push(v.saturating_sub(prev.unwrap_or(v)));
            prev = Some(v);
        }
        Self { values: out }
    }
}
