// File: crates/chart-core/src/color.rs
// Summary: CSS-style RGBA color used by chart descriptions; converts to Skia colors for rendering.

use serde::{Serialize, Serializer};
use skia_safe as skia;
use std::fmt;

/// Straight (non-premultiplied) color with CSS alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub fn to_skia(self) -> skia::Color {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        skia::Color::from_argb(a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Rgba> for skia::Color {
    fn from(c: Rgba) -> Self {
        c.to_skia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(Rgba::hex(0xdddfe5).to_string(), "#dddfe5");
        assert_eq!(Rgba::new(51, 200, 99, 0.1).to_string(), "rgba(51,200,99,0.1)");
    }

    #[test]
    fn skia_alpha_rounds() {
        let c = Rgba::new(242, 153, 74, 0.5).to_skia();
        assert_eq!(c.a(), 128);
        assert_eq!((c.r(), c.g(), c.b()), (242, 153, 74));
        assert_eq!(Rgba::hex(0x26323f).to_skia().a(), 255);
    }
}
