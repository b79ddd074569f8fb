// File: crates/grapher-core/src/lib.rs
// Summary: Core library entry point; table parsing, location state codec and chart projection.

pub mod axis;
pub mod codec;
pub mod error;
pub mod history;
pub mod palette;
pub mod projection;
pub mod selection;
pub mod series;
pub mod session;
pub mod table;
pub mod telemetry;
pub mod types;
pub mod view;

pub use axis::{AxisLabels, ScaleKind};
pub use error::{GrapherError, GrapherResult};
pub use history::{History, MemoryHistory};
pub use palette::{colors_for, Color};
pub use projection::{project, project_with, LogScalePolicy, ProjectedSeries, Projection, ProjectionOptions};
pub use selection::{reconcile, SelectionInput, StaticSelection};
pub use series::{DateKey, Series};
pub use session::{Control, Session};
pub use table::Table;
pub use types::AGGREGATE_LABEL;
pub use view::{ViewState, YScale};
