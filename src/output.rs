//! Output types for front-end consumption.
//!
//! These structs are serialized to JSON at the wasm boundary. Placements
//! are enriched with their hexagon polygon so the renderer can draw each
//! node without re-deriving the trigonometry.

use serde::Serialize;

use crate::layout::{hex_points, Edge, LayoutResult, Placement, PointF, ProjectPlacement};

/// A placed node ready to draw: center, radius and hexagon vertices.
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub points: Vec<PointF>,
}

impl From<&Placement> for NodeOutput {
    fn from(p: &Placement) -> Self {
        Self {
            id: p.id.clone(),
            x: p.x,
            y: p.y,
            radius: p.radius,
            points: hex_points(p.x, p.y, p.radius),
        }
    }
}

/// A placed project node with its cluster context.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectOutput {
    #[serde(flatten)]
    pub node: NodeOutput,
    pub ambition_id: String,
    pub is_cluster_head: bool,
    /// Member count of the owning cluster; the renderer derives the "+N"
    /// badge from this.
    pub cluster_size: usize,
}

impl From<&ProjectPlacement> for ProjectOutput {
    fn from(p: &ProjectPlacement) -> Self {
        Self {
            node: NodeOutput::from(&p.placement),
            ambition_id: p.ambition_id.clone(),
            is_cluster_head: p.is_cluster_head,
            cluster_size: p.cluster_size,
        }
    }
}

/// Error information for malformed boundary input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub line: usize,   // 1-based line number in the offending JSON
    pub column: usize, // 1-based column number
}

impl ErrorInfo {
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

/// The combined layout sent to the front-end.
#[derive(Debug, Clone, Serialize)]
pub struct GraphOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub: Option<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ambitions: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl GraphOutput {
    pub fn from_layout(layout: &LayoutResult) -> Self {
        Self {
            hub: Some(NodeOutput::from(&layout.hub)),
            ambitions: layout.ambitions.iter().map(NodeOutput::from).collect(),
            projects: layout.projects.iter().map(ProjectOutput::from).collect(),
            edges: layout.edges.clone(),
            error: None,
        }
    }

    pub fn from_error(error: ErrorInfo) -> Self {
        Self {
            hub: None,
            ambitions: Vec::new(),
            projects: Vec::new(),
            edges: Vec::new(),
            error: Some(error),
        }
    }
}
