// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; honours CSS-style font family lists.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Split a CSS `font-family` value into family names, dropping quotes.
pub fn font_families(css: &str) -> Vec<String> {
    css.split(',')
        .map(|f| f.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, families: &[String]) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if families.is_empty() {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        } else {
            ts.set_font_families(families);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, families: &[String]) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, families);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` horizontally centred on `cx` with its top at `top`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, top: f32, size: f32, color: skia::Color, families: &[String]) {
        let p = self.layout(text, size, color, families);
        p.paint(canvas, (cx - p.longest_line() * 0.5, top));
    }

    /// Draw `text` so that it ends at `right`, vertically centred on `cy`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color, families: &[String]) {
        let p = self.layout(text, size, color, families);
        p.paint(canvas, (right - p.longest_line(), cy - p.height() * 0.5));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
