// File: crates/chart-core/src/types.rs
// Summary: Shared sizes and paddings for rendering.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
/// Stroke width of dataset lines.
pub const LINE_WIDTH: f32 = 3.0;
/// Radius of the point markers drawn at each category.
pub const POINT_RADIUS: f32 = 3.0;
/// Font size of y tick labels (x tick size comes from the chart options).
pub const VALUE_TICK_SIZE: f32 = 12.0;
/// Target number of y intervals.
pub const VALUE_TICK_TARGET: usize = 5;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 24, 16, 44)
    }
}
