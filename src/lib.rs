//! Career-graph layout core.
//!
//! Turns an aggregated profile -> ambitions -> projects snapshot into a
//! deterministic radial diagram: the profile hub at the center, ambition
//! satellites on a ring, and each ambition's projects either collapsed into
//! a single cluster head or expanded into a grid. The engine emits abstract
//! placements and edges only; drawing is the host's job.

pub mod graph;
pub mod layout;
pub mod model;
pub mod output;
pub mod state;
pub mod wasm;

pub use graph::GraphIndex;
pub use layout::{layout_graph, LayoutConfig, LayoutResult, Viewport, HUB_ID};
pub use model::{AmbitionNode, ExpansionState, GraphData, Profile, ProjectNode};
pub use state::{DetailIntent, GraphEvent, InteractionState};
