// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and Value (Y) scale transforms between chart space and pixels.

/// Horizontal category scale: `count` evenly spaced labels across `[left_px, right_px]`.
/// The first and last categories sit on the plot edges.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px: right_px.max(left_px), count }
    }

    /// Pixel distance between neighbouring categories.
    pub fn spacing(&self) -> f32 {
        if self.count < 2 { self.right_px - self.left_px } else { (self.right_px - self.left_px) / (self.count - 1) as f32 }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count < 2 {
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + index as f32 * self.spacing()
    }

    /// Nearest category to a pixel x, clamped to the valid range.
    pub fn index_at_px(&self, px: f32) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let raw = ((px - self.left_px) / self.spacing()).round();
                Some(raw.clamp(0.0, (n - 1) as f32) as usize)
            }
        }
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
