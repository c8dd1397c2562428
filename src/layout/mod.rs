// Deterministic layouter for the career graph.
//
// Goals:
// - Deterministic: no randomness, no environment access, no hidden state
// - Pure: (GraphData, Viewport, ExpansionState) -> LayoutResult, so the
//   host can memoize on structural equality of the inputs
// - Local toggles: expanding one ambition's cluster never moves the hub,
//   the ring, or any other cluster
//
// Submodules:
// - responsive: viewport width clamping
// - radial: hub + ambition-ring placement
// - cluster: per-ambition project ordering and collapse/expand sub-layout
// - hex: hexagon vertex geometry for the renderer

use serde::Serialize;

use crate::graph::GraphIndex;
use crate::model::{ExpansionState, GraphData};

pub mod cluster;
pub mod hex;
pub mod radial;
pub mod responsive;

pub use hex::hex_points;
pub use responsive::clamp_width;

/// Placement id of the hub node.
pub const HUB_ID: &str = "profile";

/// A point in layout units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

/// The drawing area, in device-independent pixels. Width is clamped on
/// construction; height is a caller-supplied constant.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Default drawing height when the host does not choose one.
    pub const DEFAULT_HEIGHT: f64 = 640.0;

    pub fn new(raw_width: f64, height: f64) -> Self {
        Self {
            width: clamp_width(raw_width),
            height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(responsive::MIN_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Presentation tuning constants. The exact values are adjustable, not
/// load-bearing; everything downstream reads them from here.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub hub_radius: f64,
    pub ambition_radius: f64,
    pub project_radius: f64,
    /// Radius of a collapsed cluster head, larger than a plain project
    /// node to signal it stands in for more than one item.
    pub cluster_head_radius: f64,
    pub ring_base_radius: f64,
    pub ring_growth_per_ambition: f64,
    pub ring_max_radius: f64,
    /// Distance from the ambition's edge to the cluster base point.
    pub cluster_radial_offset: f64,
    pub grid_columns: usize,
    pub grid_h_spacing_factor: f64,
    pub grid_v_spacing_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hub_radius: 88.0,
            ambition_radius: 56.0,
            project_radius: 28.0,
            cluster_head_radius: 36.0,
            ring_base_radius: 240.0,
            ring_growth_per_ambition: 8.0,
            ring_max_radius: 360.0,
            cluster_radial_offset: 90.0,
            grid_columns: 3,
            grid_h_spacing_factor: 2.6,
            grid_v_spacing_factor: 2.4,
        }
    }
}

/// A placed node: center coordinates and radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A placed project node, with its cluster context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPlacement {
    #[serde(flatten)]
    pub placement: Placement,
    pub ambition_id: String,
    /// First project in cluster order: the visible node when collapsed,
    /// the badge/label carrier when expanded.
    pub is_cluster_head: bool,
    /// Full member count of the cluster, on every emitted node.
    pub cluster_size: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    HubAmbition,
    AmbitionProject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from_id: String,
    pub to_id: String,
    pub kind: EdgeKind,
}

/// The complete layout: recomputed wholesale on every input change, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub hub: Placement,
    pub ambitions: Vec<Placement>,
    pub projects: Vec<ProjectPlacement>,
    pub edges: Vec<Edge>,
}

/// Lay out the whole graph. Pure: structurally equal inputs produce
/// structurally equal output.
pub fn layout_graph(
    data: &GraphData,
    viewport: &Viewport,
    expanded: &ExpansionState,
    cfg: &LayoutConfig,
) -> LayoutResult {
    let index = GraphIndex::build(data);
    let hub = radial::place_hub(viewport, cfg);
    let count = index.clusters.len();

    let mut ambitions = Vec::with_capacity(count);
    let mut projects = Vec::new();
    let mut edges = Vec::new();

    for (i, cluster) in index.clusters.iter().enumerate() {
        let angle = radial::ambition_angle(i, count);
        let placement = radial::place_ambition(&cluster.id, i, count, &hub, cfg);

        edges.push(Edge {
            from_id: hub.id.clone(),
            to_id: cluster.id.clone(),
            kind: EdgeKind::HubAmbition,
        });

        let placed = cluster::layout_cluster(
            cluster,
            &placement,
            angle,
            expanded.contains(&cluster.id),
            cfg,
        );
        for p in &placed {
            edges.push(Edge {
                from_id: cluster.id.clone(),
                to_id: p.placement.id.clone(),
                kind: EdgeKind::AmbitionProject,
            });
        }

        ambitions.push(placement);
        projects.extend(placed);
    }

    LayoutResult {
        hub,
        ambitions,
        projects,
        edges,
    }
}
