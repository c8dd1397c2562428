//! Hexagon vertex geometry.
//!
//! The layout engine picks node radii; the renderer draws each node as a
//! hexagon whose vertices come from `hex_points`. Vertices sit at 60-degree
//! steps starting from angle 0 (flat orientation, no rotational offset) and
//! are rounded to two decimals so serialized output is stable across runs.

use crate::layout::PointF;

const VERTICES: usize = 6;

/// Round to two decimals for stable serialization.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Vertices of a hexagon centered at `(cx, cy)` with circumradius `r`,
/// in drawing order. Pure and total; `r = 0` collapses all vertices onto
/// the center.
pub fn hex_points(cx: f64, cy: f64, r: f64) -> Vec<PointF> {
    (0..VERTICES)
        .map(|i| {
            let angle = (60.0 * i as f64).to_radians();
            PointF {
                x: round2(cx + r * angle.cos()),
                y: round2(cy + r * angle.sin()),
            }
        })
        .collect()
}
