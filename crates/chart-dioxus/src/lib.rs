// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus UI for the earnings chart (desktop only).
// Notes:
// - UI deps sit behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The theme comes from a `Signal<UiContext>` context provider; toggling it
//   re-renders the chart with the other palette and the same data.

use chart_core::{ChartSpec, RenderOptions};
use earnings::{UiContext, View};

/// Render options for a chart shown inside a component of the given size.
pub fn render_options(ctx: &UiContext, width_px: i32, height_px: i32) -> RenderOptions {
    RenderOptions { width: width_px, height: height_px, theme: ctx.palette(), ..RenderOptions::default() }
}

/// Text shown instead of a chart, if the view is not a chart.
pub fn view_text(view: &View) -> Option<&str> {
    match view {
        View::Loading(text) => Some(*text),
        View::Error(message) => Some(message.as_str()),
        View::Chart(_) => None,
    }
}

/// Chart of a view, if resolved.
pub fn view_chart(view: &View) -> Option<&ChartSpec> {
    match view {
        View::Chart(chart) => Some(chart),
        _ => None,
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use base64::Engine as _;
    use dioxus::prelude::*;
    use earnings::{ChartContainer, ChartRenderer, DataLoader, GeneratorConfig, RandomSource, SeriesPreset};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Props, Clone, PartialEq)]
    pub struct EarningsChartProps {
        #[props(default)]
        pub preset: SeriesPreset,
        #[props(default = 750)]
        pub delay_ms: u64,
        #[props(default = 1024)]
        pub width_px: i32,
        #[props(default = 640)]
        pub height_px: i32,
    }

    /// Loads a year of data once on mount and shows "Loading..." until it resolves.
    #[component]
    pub fn EarningsChart(props: EarningsChartProps) -> Element {
        let ui_ctx = use_context::<Signal<UiContext>>();
        let container = use_hook(|| {
            let generator = GeneratorConfig { include_new_users: props.preset.needs_new_users(), ..GeneratorConfig::default() };
            let loader = DataLoader::new(RandomSource::new(generator)).with_delay(Duration::from_millis(props.delay_ms));
            Arc::new(ChartContainer::new(loader, ChartRenderer::from_preset(props.preset)))
        });

        // No signals are read inside, so this runs once per mount.
        let loaded = use_resource({
            let container = Arc::clone(&container);
            move || {
                let container = Arc::clone(&container);
                async move { container.load().await.map_err(|e| e.to_string()) }
            }
        });
        // Subscribe to completion; the container holds the actual state.
        let _ = loaded.read();

        let ctx = ui_ctx.read().clone();
        let view = container.view(&ctx.theme);
        if let Some(text) = view_text(&view) {
            return rsx! { "{text}" };
        }
        let Some(chart) = view_chart(&view) else { return rsx! {} };

        let opts = render_options(&ctx, props.width_px, props.height_px);
        match chart.render_to_png_bytes(&opts) {
            Ok(bytes) => {
                let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
                let src = format!("data:image/png;base64,{b64}");
                rsx! {
                    img {
                        style: format!("width:{}px; height:{}px; object-fit:contain;", props.width_px, props.height_px),
                        src: src,
                    }
                }
            }
            Err(e) => rsx! { "chart render failed: {e}" },
        }
    }

    /// Tiny demo launcher: a theme toggle above the earnings chart.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let mut ui_ctx = use_context_provider(|| Signal::new(UiContext::default()));
            let label = if ui_ctx.read().is_light() { "Dark theme" } else { "Light theme" };
            rsx! {
                div { style: "display:flex; flex-direction:column; gap:8px; padding:8px;",
                    button {
                        onclick: move |_| {
                            let next = if ui_ctx.read().is_light() { "dark" } else { "light" };
                            ui_ctx.set(UiContext::new(next));
                        },
                        "{label}"
                    }
                    super::ui::EarningsChart { preset: SeriesPreset::Growth, width_px: 1024, height_px: 640 }
                }
            }
        }

        // Dioxus 0.6 launch with explicit providers vec
        let cfg = dioxus_desktop::Config::new()
            .with_prerendered("<style>html,body{margin:0;height:100%}</style>".to_string());
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}

#[cfg(test)]
mod tests {
    use super::*;
    use earnings::record::year_from_profits;
    use earnings::{ChartRenderer, LOADING_PLACEHOLDER};

    #[test]
    fn loading_view_shows_placeholder() {
        let view = View::Loading(LOADING_PLACEHOLDER);
        assert_eq!(view_text(&view), Some("Loading..."));
        assert!(view_chart(&view).is_none());
    }

    #[test]
    fn render_options_follow_context_theme() {
        let dark = render_options(&UiContext::new("dark"), 300, 200);
        assert_eq!(dark.theme.name, "dark");
        assert_eq!((dark.width, dark.height), (300, 200));
        assert_eq!(render_options(&UiContext::default(), 1, 1).theme.name, "light");
    }

    #[test]
    fn chart_view_exposes_spec() {
        let spec = ChartRenderer::default().render(&year_from_profits([300; 12]), "light");
        let view = View::Chart(spec.clone());
        assert_eq!(view_chart(&view), Some(&spec));
        assert!(view_text(&view).is_none());
    }
}
