// File: crates/chart-core/src/chart.rs
// Summary: ChartSpec (labels + datasets + options) and headless rendering using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use serde::Serialize;
use skia_safe as skia;
use std::io::Cursor;

use crate::grid::zero_based_ticks;
use crate::options::ChartOptions;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::Dataset;
use crate::text::{font_families, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LINE_WIDTH, POINT_RADIUS, VALUE_TICK_SIZE, VALUE_TICK_TARGET, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Supplies the background; grid and tick colors come from `ChartSpec::options`.
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    fn plot_rect(&self) -> (f32, f32, f32, f32) {
        let l = self.insets.left as f32;
        let t = self.insets.top as f32;
        let r = (self.width - self.insets.right as i32).max(self.insets.left as i32 + 1) as f32;
        let b = (self.height - self.insets.bottom as i32).max(self.insets.top as i32 + 1) as f32;
        (l, t, r, b)
    }
}

/// Values of every dataset at one category, as shown by an `index` tooltip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipItem {
    pub label: String,
    pub values: Vec<(String, f64)>,
}

/// Renderable line chart: category labels, datasets aligned to them, and styling options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new(labels: Vec<String>, options: ChartOptions) -> Self {
        Self { labels, datasets: Vec::new(), options }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize chart spec")
    }

    /// Y range used for rendering: zero up to a nice bound over all datasets.
    pub fn value_ticks(&self) -> Vec<f64> {
        let max = self.datasets.iter().filter_map(Dataset::max_value).fold(0.0f64, f64::max);
        zero_based_ticks(max, VALUE_TICK_TARGET)
    }

    /// Tooltip content for a category index, or `None` when out of range or tooltips are off.
    pub fn tooltip_at(&self, index: usize) -> Option<TooltipItem> {
        if !self.options.plugins.tooltip.enabled {
            return None;
        }
        let label = self.labels.get(index)?.clone();
        let values = self
            .datasets
            .iter()
            .filter_map(|d| d.data.get(index).map(|v| (d.label.clone(), *v)))
            .collect();
        Some(TooltipItem { label, values })
    }

    /// Category under a pixel x coordinate. With `intersect: false` any x inside the
    /// surface resolves to the nearest category.
    pub fn category_at_px(&self, x: f32, opts: &RenderOptions) -> Option<usize> {
        let (l, _, r, _) = opts.plot_rect();
        let scale = CategoryScale::new(l, r, self.labels.len());
        let idx = scale.index_at_px(x)?;
        if !self.options.interaction.intersect {
            return Some(idx);
        }
        ((scale.to_px(idx) - x).abs() <= POINT_RADIUS).then_some(idx)
    }

    /// Render to a tightly packed RGBA8 buffer. Returns (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let (w, h) = (opts.width as u32, opts.height as u32);
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, w, h, row_bytes))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background.to_skia());

        let (l, t, r, b) = opts.plot_rect();
        let xs = CategoryScale::new(l, r, self.labels.len());
        let ticks = self.value_ticks();
        let top_value = ticks.last().copied().unwrap_or(1.0);
        let ys = ValueScale::new_linear(t, b, 0.0, top_value);

        draw_x_grid(canvas, &self.options, &xs, t, b);
        draw_y_ticks(canvas, &self.options, &ys, &ticks, l);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            if let Some(tick_opts) = &self.options.scales.x.ticks {
                let families = font_families(&tick_opts.font.family);
                let color = tick_opts.font.color.to_skia();
                for (i, label) in self.labels.iter().enumerate() {
                    shaper.draw_centered(canvas, label, xs.to_px(i), b + 8.0, tick_opts.font.size, color, &families);
                }
            }
            let color = opts.theme.value_tick.to_skia();
            for &v in &ticks {
                shaper.draw_right(canvas, &format_tick(v), l - 12.0, ys.to_px(v), VALUE_TICK_SIZE, color, &[]);
            }
        }

        for dataset in &self.datasets {
            draw_dataset(canvas, dataset, &xs, &ys);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 { format!("{}", v as i64) } else { format!("{v:.2}") }
}

fn draw_x_grid(canvas: &skia::Canvas, options: &ChartOptions, xs: &CategoryScale, t: f32, b: f32) {
    let grid = &options.scales.x.grid;
    if !grid.draw_on_chart_area || xs.count == 0 {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_color(grid.color.to_skia());
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    if let Some(dash) = &grid.border_dash {
        // An odd-length dash list repeats itself, as in CSS/canvas.
        let mut intervals = dash.clone();
        if intervals.len() % 2 == 1 {
            intervals.extend_from_slice(dash);
        }
        if let Some(effect) = skia::PathEffect::dash(&intervals, 0.0) {
            paint.set_path_effect(effect);
        }
    }
    for i in 0..xs.count {
        let x = xs.to_px(i);
        canvas.draw_line((x, t), (x, b), &paint);
    }
}

fn draw_y_ticks(canvas: &skia::Canvas, options: &ChartOptions, ys: &ValueScale, ticks: &[f64], l: f32) {
    let grid = &options.scales.y.grid;
    let mut paint = skia::Paint::default();
    paint.set_color(grid.color.to_skia());
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for &v in ticks {
        let y = ys.to_px(v);
        // Off the chart area only a short tick mark is drawn.
        canvas.draw_line((l - 8.0, y), (l, y), &paint);
    }
}

fn line_path(points: &[(f32, f32)], tension: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let Some(&first) = points.first() else { return path };
    path.move_to(first);
    if tension <= 0.0 {
        for &p in &points[1..] {
            path.line_to(p);
        }
        return path;
    }
    let at = |i: isize| -> (f32, f32) { points[i.clamp(0, points.len() as isize - 1) as usize] };
    let k = tension * 0.5;
    for i in 0..points.len().saturating_sub(1) {
        let i = i as isize;
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        let c1 = (p1.0 + (p2.0 - p0.0) * k, p1.1 + (p2.1 - p0.1) * k);
        let c2 = (p2.0 - (p3.0 - p1.0) * k, p2.1 - (p3.1 - p1.1) * k);
        path.cubic_to(c1, c2, p2);
    }
    path
}

fn draw_dataset(canvas: &skia::Canvas, dataset: &Dataset, xs: &CategoryScale, ys: &ValueScale) {
    let points: Vec<(f32, f32)> = dataset
        .data
        .iter()
        .take(xs.count)
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| (xs.to_px(i), ys.to_px(v)))
        .collect();
    if points.is_empty() {
        return;
    }
    let tension = dataset.style.tension_value();
    let line = line_path(&points, tension);

    if dataset.style.fill && points.len() >= 2 {
        let baseline = ys.to_px(0.0);
        let mut area = line.clone();
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            area.line_to((last.0, baseline));
            area.line_to((first.0, baseline));
        }
        area.close();
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(dataset.style.background_color.to_skia());
        canvas.draw_path(&area, &fill);
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_color(dataset.style.border_color.to_skia());
    canvas.draw_path(&line, &stroke);

    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(dataset.style.border_color.to_skia());
    for &p in &points {
        canvas.draw_circle(p, POINT_RADIUS, &marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesStyle;

    fn spec() -> ChartSpec {
        let mut s = ChartSpec::new(
            vec!["Jan".into(), "Feb".into(), "Mar".into()],
            ChartOptions::for_theme(&Theme::light()),
        );
        s.add_dataset(Dataset::new("Sales", SeriesStyle::filled(51, 200, 99), vec![40.0, 80.0, 120.0]));
        s.add_dataset(Dataset::new("Profit", SeriesStyle::filled(242, 153, 74), vec![200.0, 400.0, 600.0]));
        s
    }

    #[test]
    fn tooltip_lists_every_dataset_at_index() {
        let item = spec().tooltip_at(1).unwrap();
        assert_eq!(item.label, "Feb");
        assert_eq!(item.values, vec![("Sales".to_string(), 80.0), ("Profit".to_string(), 400.0)]);
        assert!(spec().tooltip_at(3).is_none());
    }

    #[test]
    fn tooltip_disabled_yields_nothing() {
        let mut s = spec();
        s.options.plugins.tooltip.enabled = false;
        assert!(s.tooltip_at(0).is_none());
    }

    #[test]
    fn hover_resolves_nearest_category_without_intersect() {
        let s = spec();
        let opts = RenderOptions::default();
        let (l, _, r, _) = opts.plot_rect();
        assert_eq!(s.category_at_px(l - 50.0, &opts), Some(0));
        assert_eq!(s.category_at_px((l + r) * 0.5 + 10.0, &opts), Some(1));
        assert_eq!(s.category_at_px(r + 50.0, &opts), Some(2));
    }

    #[test]
    fn value_ticks_start_at_zero() {
        let ticks = spec().value_ticks();
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(*ticks.last().unwrap() >= 600.0);
    }

    #[test]
    fn smoothed_path_keeps_endpoints() {
        let pts = [(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)];
        let p = line_path(&pts, 0.4);
        let bounds = p.bounds();
        assert!(bounds.left <= 0.0 && bounds.right >= 20.0);
        assert!(line_path(&[], 0.4).is_empty());
    }
}
