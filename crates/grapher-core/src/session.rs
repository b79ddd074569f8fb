// File: crates/grapher-core/src/session.rs
// Summary: Session controller owning the table, current view state, projection and history.
// Notes:
// - Loading replaces the current history entry; selection changes push a new one.
// - History is always updated before the projection is rebuilt, so the shown chart
//   and the shareable location never diverge.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::codec;
use crate::error::GrapherResult;
use crate::history::History;
use crate::projection::{project_with, Projection, ProjectionOptions};
use crate::selection::{reconcile, SelectionInput};
use crate::table::{self, Table};
use crate::view::{ViewState, YScale};

/// One checkbox of the selection list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Control {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

pub struct Session<H: History> {
    table: Table,
    state: ViewState,
    projection: Projection,
    options: ProjectionOptions,
    history: H,
}

impl<H: History> Session<H> {
    pub fn load(raw: &str, history: H) -> GrapherResult<Self> {
        Self::load_with(raw, history, ProjectionOptions::default())
    }

    /// Parse the table, restore the view from the current location and canonicalize it.
    pub fn load_with(raw: &str, mut history: H, options: ProjectionOptions) -> GrapherResult<Self> {
        let table = table::parse(raw)?;
        let location = history.location();
        let state = codec::decode_or_default(codec::query_of(&location));
        history.set_location(codec::encode(&state, &location), false);
        let projection = project_with(&table, &state, &options);
        info!(
            entities = table.entities().len(),
            days = table.day_count(),
            selected = state.countries.len(),
            "session loaded"
        );
        Ok(Self { table, state, projection, options, history })
    }

    /// Re-derive the view after the location changed (back/forward navigation).
    pub fn navigate(&mut self) -> &Projection {
        let location = self.history.location();
        self.state = codec::decode_or_default(codec::query_of(&location));
        debug!(%location, "navigated");
        self.reproject()
    }

    /// Apply a user selection: reconcile order, push history, then re-project.
    pub fn apply_selection(&mut self, checked: &BTreeSet<String>, yscale: YScale) -> &Projection {
        let countries = reconcile(&self.state.countries, checked, self.table.entities());
        let state = ViewState { countries, yscale };
        let location = codec::encode(&state, &self.history.location());
        self.history.set_location(location, true);
        debug!(selected = state.countries.len(), %yscale, "selection changed");
        self.state = state;
        self.reproject()
    }

    pub fn apply_input(&mut self, input: &impl SelectionInput) -> &Projection {
        self.apply_selection(&input.current_selection(), input.scale_mode())
    }

    /// Checkbox model: every entity in list order, checked when selected.
    pub fn controls(&self) -> Vec<Control> {
        self.table
            .entities()
            .iter()
            .enumerate()
            .map(|(i, name)| Control {
                id: format!("check_{i}"),
                name: name.clone(),
                checked: self.state.is_selected(name),
            })
            .collect()
    }

    pub fn table(&self) -> &Table { &self.table }

    pub fn state(&self) -> &ViewState { &self.state }

    pub fn projection(&self) -> &Projection { &self.projection }

    pub fn options(&self) -> &ProjectionOptions { &self.options }

    pub fn history(&self) -> &H { &self.history }

    pub fn history_mut(&mut self) -> &mut H { &mut self.history }

    pub fn location(&self) -> String { self.history.location() }

    fn reproject(&mut self) -> &Projection {
        self.projection = project_with(&self.table, &self.state, &self.options);
        &self.projection
    }
}
