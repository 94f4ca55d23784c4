// File: crates/demo/src/main.rs
// Summary: Runs the earnings chart lifecycle headlessly (placeholder, delayed load, themed render)
// and writes the chart as PNG and JSON plus the loaded records.

use anyhow::{Context, Result};
use chart_core::RenderOptions;
use clap::Parser;
use earnings::logging::{self, DEFAULT_FILTER};
use earnings::{
    ChartContainer, ChartRenderer, DashboardConfig, DataLoader, FixtureSource, RandomSource, RecordSource,
    SeriesPreset, UiContext, View,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "earnings-demo", about = "Render the monthly earnings chart to PNG/JSON")]
struct Args {
    /// JSON dashboard config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Theme flag ("light" or anything else for dark).
    #[arg(long)]
    theme: Option<String>,
    /// Series preset: earnings (sales, profit) or growth (adds new users).
    #[arg(long)]
    variant: Option<SeriesPreset>,
    /// Seed for reproducible data.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated API latency in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Read records from a JSON file instead of generating them.
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Output directory.
    #[arg(long, default_value = "target/earnings")]
    out: PathBuf,
    /// Render both the light and the dark palette.
    #[arg(long)]
    both_themes: bool,
    /// Skip text (deterministic output across platforms).
    #[arg(long)]
    no_labels: bool,
}

fn resolve_config(args: &Args) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load_from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(theme) = &args.theme { config.theme = theme.clone(); }
    if let Some(variant) = args.variant { config.variant = variant; }
    if let Some(seed) = args.seed { config.seed = Some(seed); }
    if let Some(delay_ms) = args.delay_ms { config.delay_ms = delay_ms; }
    config.validate()?;
    Ok(config)
}

fn build_source(args: &Args, config: &DashboardConfig) -> Result<Box<dyn RecordSource>> {
    if let Some(path) = &args.fixture {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture '{}'", path.display()))?;
        return Ok(Box::new(FixtureSource::from_json(&json)?));
    }
    let generator = config.generator();
    Ok(match config.seed {
        Some(seed) => Box::new(RandomSource::with_seed(generator, seed)),
        None => Box::new(RandomSource::new(generator)),
    })
}

fn write_chart(out: &Path, ctx: &UiContext, view: View, config: &DashboardConfig, draw_labels: bool) -> Result<()> {
    let chart = match view {
        View::Chart(chart) => chart,
        View::Loading(text) => anyhow::bail!("chart not ready: {text}"),
        View::Error(message) => anyhow::bail!("chart failed: {message}"),
    };
    let theme = ctx.palette();
    let opts = RenderOptions {
        width: config.width as i32,
        height: config.height as i32,
        theme,
        draw_labels,
        ..RenderOptions::default()
    };
    // Files are named by palette; the raw flag is free text.
    let png = out.join(format!("chart-{}.png", theme.name));
    chart.render_to_png(&opts, &png)?;
    let json = out.join(format!("chart-{}.json", theme.name));
    std::fs::write(&json, chart.to_json()?)?;
    println!("Wrote {} and {}", png.display(), json.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(DEFAULT_FILTER);
    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!(theme = %config.theme, variant = %config.variant, delay_ms = config.delay_ms, "starting");

    let loader = DataLoader::new(build_source(&args, &config)?).with_delay(config.delay());
    let container = ChartContainer::new(loader, ChartRenderer::from_preset(config.variant));

    // First frame before any data arrives.
    if let View::Loading(text) = container.view(&config.theme) {
        println!("{text}");
    }
    container.load().await.context("loading monthly records")?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create '{}'", args.out.display()))?;
    let records = container.records().context("no records after load")?;
    let records_path = args.out.join("records.json");
    std::fs::write(&records_path, serde_json::to_string_pretty(&records)?)?;
    println!("Loaded {} records -> {}", records.len(), records_path.display());

    let themes = if args.both_themes {
        vec![UiContext::new("light"), UiContext::new("dark")]
    } else {
        vec![UiContext::new(config.theme.clone())]
    };
    for ctx in &themes {
        write_chart(&args.out, ctx, container.view(&ctx.theme), &config, !args.no_labels)?;
    }
    Ok(())
}
