// File: crates/grapher-core/src/table.rs
// Summary: CSV time-series table parser producing per-entity series plus the aggregate row.
// Notes:
// - Header layout is `[id, name, lat, long, date_1 .. date_n]`; only the name column and
//   the date columns are read.
// - Cells are parsed leniently: anything without leading digits counts as 0.

use std::collections::HashMap;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::error::{GrapherError, GrapherResult};
use crate::series::{DateKey, Series};
use crate::types::{AGGREGATE_LABEL, ENTITY_COLUMN, FIRST_DATE_COLUMN};

/// Immutable per-entity table for one data load.
#[derive(Clone, Debug)]
pub struct Table {
    dates: Vec<DateKey>,
    entities: Vec<String>,
    series: HashMap<String, Series>,
}

impl Table {
    /// Date columns in source order.
    pub fn dates(&self) -> &[DateKey] { &self.dates }

    pub fn day_count(&self) -> usize { self.dates.len() }

    /// Entity names: aggregate first, then every other name sorted lexicographically.
    pub fn entities(&self) -> &[String] { &self.entities }

    pub fn get(&self, name: &str) -> Option<&Series> { self.series.get(name) }

    pub fn contains(&self, name: &str) -> bool { self.series.contains_key(name) }

    /// Lookup that reports a missing entity as `UnknownEntity`.
    pub fn series(&self, name: &str) -> GrapherResult<&Series> {
        self.get(name).ok_or_else(|| GrapherError::UnknownEntity(name.to_string()))
    }

    pub fn aggregate(&self) -> &Series {
        // Inserted by `parse` before the table is handed out.
        &self.series[AGGREGATE_LABEL]
    }

    /// `YYYY-MM-DD` label per date column.
    pub fn labels(&self) -> Vec<String> {
        self.dates.iter().map(DateKey::label).collect()
    }
}

/// Parse raw CSV text into a `Table`.
pub fn parse(raw: &str) -> GrapherResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows = rdr.records().filter(|rec| match rec {
        Ok(r) => !is_blank(r),
        Err(_) => true,
    });

    let header = rows
        .next()
        .transpose()?
        .ok_or_else(|| GrapherError::MalformedInput("missing header row".to_string()))?;
    if header.len() < FIRST_DATE_COLUMN {
        return Err(GrapherError::MalformedInput(format!(
            "header has {} columns, expected at least {FIRST_DATE_COLUMN}",
            header.len()
        )));
    }

    let dates = header
        .iter()
        .skip(FIRST_DATE_COLUMN)
        .map(DateKey::parse_mdy)
        .collect::<GrapherResult<Vec<_>>>()?;
    let days = dates.len();
    debug!(days, first_date = ?dates.first().map(DateKey::label), "parsed table header");

    let mut series: HashMap<String, Series> = HashMap::new();
    let mut aggregate = Series::zeros(days);
    let mut counts = vec![0i64; days];

    for rec in rows {
        let rec = rec?;
        // Source line number, blank lines included.
        let row = rec.position().map_or(0, |p| p.line());
        let Some(name) = rec.get(ENTITY_COLUMN) else {
            warn!(row, "skipping row without an entity name column");
            continue;
        };
        if name == AGGREGATE_LABEL {
            warn!(row, name, "skipping row that uses the reserved aggregate name");
            continue;
        }

        for (day, slot) in counts.iter_mut().enumerate() {
            let cell = rec.get(FIRST_DATE_COLUMN + day).unwrap_or("");
            *slot = parse_count(cell).unwrap_or_else(|| {
                debug!(row, day, cell, "non-numeric cell counted as 0");
                0
            });
        }

        series
            .entry(name.to_string())
            .or_insert_with(|| Series::zeros(days))
            .accumulate(&counts);
        aggregate.accumulate(&counts);
    }

    let mut names: Vec<String> = series.keys().cloned().collect();
    names.sort();
    let mut entities = Vec::with_capacity(names.len() + 1);
    entities.push(AGGREGATE_LABEL.to_string());
    entities.extend(names);

    series.insert(AGGREGATE_LABEL.to_string(), aggregate);
    debug!(entities = entities.len(), days, "parsed table");

    Ok(Table { dates, entities, series })
}

/// Best-effort integer parse: optional sign followed by leading digits.
/// `"12abc"` gives 12, `"3.7"` gives 3, and text without digits gives `None`.
pub fn parse_count(cell: &str) -> Option<i64> {
    let s = cell.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn is_blank(rec: &StringRecord) -> bool {
    rec.iter().all(|f| f.trim().is_empty())
}
