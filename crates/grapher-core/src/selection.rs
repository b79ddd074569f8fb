// File: crates/grapher-core/src/selection.rs
// Summary: Selection-input capability and the order-preserving reconciliation of checked names.

use std::collections::{BTreeSet, HashSet};

use crate::view::YScale;

/// Source of user selection changes (checkbox list, CLI flags, tests).
pub trait SelectionInput {
    /// Names currently checked. Unordered by contract.
    fn current_selection(&self) -> BTreeSet<String>;
    /// Y mode currently chosen.
    fn scale_mode(&self) -> YScale;
}

/// Plain-data selection input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticSelection {
    pub checked: BTreeSet<String>,
    pub yscale: YScale,
}

impl StaticSelection {
    pub fn new<I, S>(checked: I, yscale: YScale) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { checked: checked.into_iter().map(Into::into).collect(), yscale }
    }
}

impl SelectionInput for StaticSelection {
    fn current_selection(&self) -> BTreeSet<String> { self.checked.clone() }
    fn scale_mode(&self) -> YScale { self.yscale }
}

/// Merge a new checked set into the previous order.
///
/// Still-checked names keep their relative order, unchecked names are dropped and newly
/// checked names are appended. Appended names follow `entity_order`; names unknown to it
/// come last in set order.
pub fn reconcile(old: &[String], checked: &BTreeSet<String>, entity_order: &[String]) -> Vec<String> {
    let mut placed: HashSet<&str> = HashSet::with_capacity(checked.len());
    let mut out = Vec::with_capacity(checked.len());

    let kept = old.iter().filter(|n| checked.contains(n.as_str()));
    let added = entity_order.iter().chain(checked.iter()).filter(|n| checked.contains(n.as_str()));
    for name in kept.chain(added) {
        if placed.insert(name.as_str()) {
            out.push(name.clone());
        }
    }
    out
}
