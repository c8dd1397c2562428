//! Responsive width clamping.
//!
//! The host observes its container width and hands the raw value in on every
//! resize notification; the engine itself never watches the environment.
//! Widths are clamped to [MIN_WIDTH, MAX_WIDTH]: below the floor the ring
//! and clusters overlap, above the ceiling spacing grows unbounded.

/// Narrowest usable viewport.
pub const MIN_WIDTH: f64 = 800.0;

/// Widest usable viewport.
pub const MAX_WIDTH: f64 = 1600.0;

/// Clamp an observed container width to the safe range.
///
/// Degenerate inputs (non-positive, NaN, infinite) clamp to the floor so a
/// missing measurement can never propagate zero or negative radii. The clamp
/// is idempotent: `clamp_width(clamp_width(w)) == clamp_width(w)`.
pub fn clamp_width(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return MIN_WIDTH;
    }
    raw.clamp(MIN_WIDTH, MAX_WIDTH)
}
