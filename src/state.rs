//! Interaction state machine.
//!
//! Hover, selection and cluster expansion live in one plain, serializable
//! value. Transitions are reducer-style: `apply(old, event) -> (new, intent)`
//! with the old state untouched, so a render pass reading one snapshot never
//! observes a half-applied toggle. Every activation either toggles expansion
//! or emits exactly one detail intent, never both; unknown ids are a no-op.
//!
//! Hover and selection never move nodes. Only `expanded` feeds back into
//! layout.

use serde::{Deserialize, Serialize};

use crate::graph::GraphIndex;
use crate::layout::HUB_ID;
use crate::model::ExpansionState;

/// Raw pointer/keyboard input, already mapped to node ids by the renderer's
/// hit-testing. Enter/Space on a focused node arrives as `Activate`.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    PointerEnter(String),
    PointerLeave(String),
    Activate(String),
    /// Host-driven collapse/expand, e.g. clicking the "+N" badge of an
    /// expanded cluster. Activation alone can only expand (activating an
    /// expanded node opens its detail instead).
    ToggleCluster(String),
}

/// Request for the host's modal/detail subsystem. The host resolves the id
/// against its own `GraphData` copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailIntent {
    Profile,
    Ambition { id: String },
    Project { id: String },
}

/// Interaction state snapshot. Facets are independent: a node can be
/// hovered while another is selected while several clusters are expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    /// Presentational emphasis only; never affects placements.
    pub hovered: Option<String>,
    pub selected_ambition: Option<String>,
    pub selected_project: Option<String>,
    pub expanded: ExpansionState,
}

impl InteractionState {
    /// Apply one event. Returns the next state and at most one detail
    /// intent. Total: no event ever fails, unknown ids return the state
    /// unchanged.
    pub fn apply(
        &self,
        index: &GraphIndex<'_>,
        event: &GraphEvent,
    ) -> (InteractionState, Option<DetailIntent>) {
        let mut next = self.clone();
        match event {
            GraphEvent::PointerEnter(id) => {
                if is_known(index, id) {
                    next.hovered = Some(id.clone());
                }
                (next, None)
            }
            GraphEvent::PointerLeave(id) => {
                if next.hovered.as_deref() == Some(id.as_str()) {
                    next.hovered = None;
                }
                (next, None)
            }
            GraphEvent::ToggleCluster(id) => {
                if index.cluster(id).is_some() {
                    if !next.expanded.remove(id) {
                        next.expanded.insert(id.clone());
                    }
                }
                (next, None)
            }
            GraphEvent::Activate(id) => self.activate(index, id, next),
        }
    }

    fn activate(
        &self,
        index: &GraphIndex<'_>,
        id: &str,
        mut next: InteractionState,
    ) -> (InteractionState, Option<DetailIntent>) {
        if id == HUB_ID {
            return (next, Some(DetailIntent::Profile));
        }

        if index.cluster(id).is_some() {
            next.selected_ambition = Some(id.to_string());
            next.selected_project = None;
            return (next, Some(DetailIntent::Ambition { id: id.to_string() }));
        }

        if let Some(cluster) = index.cluster_of(id) {
            let is_collapsed_head = !self.expanded.contains(&cluster.id)
                && cluster.head().is_some_and(|head| head.id == id);
            if is_collapsed_head && cluster.projects.len() > 1 {
                // The head stands in for the whole group: open it up.
                next.expanded.insert(cluster.id.clone());
                return (next, None);
            }
            next.selected_project = Some(id.to_string());
            next.selected_ambition = Some(cluster.id.clone());
            return (next, Some(DetailIntent::Project { id: id.to_string() }));
        }

        // Unknown id: ids always come from GraphData, so this is defensive.
        (next, None)
    }

    /// The ambition whose cluster is currently emphasized, if any.
    pub fn emphasized_ambition(&self, index: &GraphIndex<'_>) -> Option<String> {
        if let Some(id) = &self.selected_ambition {
            return Some(id.clone());
        }
        self.selected_project
            .as_deref()
            .and_then(|pid| index.cluster_of(pid))
            .map(|c| c.id.clone())
    }

    /// Derived "highlight vs. dim" partition: with a selection active, only
    /// the hub and the selected ambition's own cluster stay emphasized.
    pub fn is_dimmed(&self, index: &GraphIndex<'_>, id: &str) -> bool {
        let Some(emphasized) = self.emphasized_ambition(index) else {
            return false;
        };
        if id == HUB_ID || id == emphasized {
            return false;
        }
        index
            .cluster_of(id)
            .map_or(true, |cluster| cluster.id != emphasized)
    }
}

fn is_known(index: &GraphIndex<'_>, id: &str) -> bool {
    id == HUB_ID || index.cluster(id).is_some() || index.project(id).is_some()
}
