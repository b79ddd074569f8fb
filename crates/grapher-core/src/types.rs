// File: crates/grapher-core/src/types.rs
// Summary: Shared constants (reserved names, column layout, default data file).

/// Reserved name of the synthesized aggregate entity.
pub const AGGREGATE_LABEL: &str = "World Total";

/// Index of the column holding the entity (country/region) name.
pub const ENTITY_COLUMN: usize = 1;

/// Index of the first per-day count column.
/// Contract: columns before this one are metadata (id, name, lat, long).
pub const FIRST_DATE_COLUMN: usize = 4;

/// Data file the page loads when nothing else is given.
pub const DEFAULT_DATA_FILE: &str = "time_series_covid19_confirmed_global.csv";

/// Separator between the base location and the encoded state token.
pub const QUERY_SEPARATOR: char = '?';
