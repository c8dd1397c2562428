//! Radial placement of the hub and the ambition ring.
//!
//! The hub sits at the viewport center with a fixed radius. Ambitions are
//! placed on a ring whose radius grows mildly with the ambition count and
//! then saturates. Ambition `i` (in the caller-supplied stable order) sits
//! at `-90deg + i * 360/A` from the hub center: the first ambition is due
//! north and subsequent ones proceed clockwise at equal spacing.
//!
//! Deterministic: angles depend only on the index and the count, never on
//! any per-call re-sort.

use crate::layout::{LayoutConfig, Placement, Viewport};

/// Ring radius for `count` ambitions: `base + count * growth`, saturating
/// at `max`.
pub fn ring_radius(count: usize, cfg: &LayoutConfig) -> f64 {
    (cfg.ring_base_radius + count as f64 * cfg.ring_growth_per_ambition)
        .clamp(cfg.ring_base_radius, cfg.ring_max_radius)
}

/// Angle in radians for ambition `index` out of `count`. The `max(1, count)`
/// guard keeps the zero-ambition case division-free; no satellite is placed
/// in that case since the loop bound is also `count`.
pub fn ambition_angle(index: usize, count: usize) -> f64 {
    let step = 360.0 / count.max(1) as f64;
    (-90.0 + index as f64 * step).to_radians()
}

/// Hub placement at the viewport center.
pub fn place_hub(viewport: &Viewport, cfg: &LayoutConfig) -> Placement {
    Placement {
        id: crate::layout::HUB_ID.to_string(),
        x: viewport.width / 2.0,
        y: viewport.height / 2.0,
        radius: cfg.hub_radius,
    }
}

/// Placement for ambition `index` of `count` on the ring around `hub`.
pub fn place_ambition(
    id: &str,
    index: usize,
    count: usize,
    hub: &Placement,
    cfg: &LayoutConfig,
) -> Placement {
    let angle = ambition_angle(index, count);
    let radius = ring_radius(count, cfg);
    Placement {
        id: id.to_string(),
        x: hub.x + radius * angle.cos(),
        y: hub.y + radius * angle.sin(),
        radius: cfg.ambition_radius,
    }
}
