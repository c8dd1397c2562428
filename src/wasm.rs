//! WASM bindings for the careergraph-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Input and output travel as JSON strings; malformed input is reported via
//! `console.error` and an `error` field rather than a thrown exception.

use serde::Serialize;
use serde_json::to_string;
use wasm_bindgen::prelude::*;

use crate::graph::GraphIndex;
use crate::layout::{LayoutConfig, Viewport};
use crate::model::{ExpansionState, GraphData};
use crate::output::{ErrorInfo, GraphOutput};
use crate::state::{DetailIntent, GraphEvent, InteractionState};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn parse_graph(data_json: &str) -> Result<GraphData, ErrorInfo> {
    serde_json::from_str(data_json).map_err(|e| ErrorInfo::from_json_error(&e))
}

/// Expansion state arrives as a JSON array of ambition ids. A malformed
/// array degrades to "everything collapsed" rather than failing the layout.
fn parse_expanded(expanded_json: &str) -> ExpansionState {
    serde_json::from_str(expanded_json).unwrap_or_default()
}

/// Compute the full layout for a graph snapshot.
///
/// `raw_width` is the host's observed container width (clamped internally);
/// `height` is the host-chosen drawing height. Returns a `GraphOutput` as
/// JSON, with hexagon vertices precomputed per node.
#[wasm_bindgen]
pub fn layout_graph(data_json: &str, raw_width: f64, height: f64, expanded_json: &str) -> String {
    let data = match parse_graph(data_json) {
        Ok(data) => data,
        Err(e) => {
            console_error(&format!("Error parsing graph data: {}", e.message));
            return to_string(&GraphOutput::from_error(e)).unwrap_or_default();
        }
    };
    let expanded = parse_expanded(expanded_json);
    let viewport = Viewport::new(raw_width, height);

    let layout = crate::layout::layout_graph(&data, &viewport, &expanded, &LayoutConfig::default());
    to_string(&GraphOutput::from_layout(&layout)).unwrap_or_default()
}

/// Result of an activation: the next expansion state plus at most one
/// detail intent for the host's modal subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct ActivationOutput {
    pub expanded: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<DetailIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Activate a node (click or Enter/Space). Either toggles cluster
/// expansion or yields one detail intent; unknown ids change nothing.
#[wasm_bindgen]
pub fn activate_node(data_json: &str, expanded_json: &str, node_id: &str) -> String {
    let data = match parse_graph(data_json) {
        Ok(data) => data,
        Err(e) => {
            console_error(&format!("Error parsing graph data: {}", e.message));
            let out = ActivationOutput {
                expanded: Vec::new(),
                intent: None,
                error: Some(e),
            };
            return to_string(&out).unwrap_or_default();
        }
    };
    let index = GraphIndex::build(&data);
    let state = InteractionState {
        expanded: parse_expanded(expanded_json),
        ..Default::default()
    };

    let (next, intent) = state.apply(&index, &GraphEvent::Activate(node_id.to_string()));
    let out = ActivationOutput {
        expanded: next.expanded.into_iter().collect(),
        intent,
        error: None,
    };
    to_string(&out).unwrap_or_default()
}
