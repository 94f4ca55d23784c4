use anyhow::Result;
use chart_core::{ChartOptions, ChartSpec, Dataset, RenderOptions, SeriesStyle, Theme};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(categories: usize, tension: Option<f32>) -> ChartSpec {
    let labels = (0..categories).map(|i| format!("C{i}")).collect();
    let mut ch = ChartSpec::new(labels, ChartOptions::for_theme(&Theme::dark()));
    let data: Vec<f64> = (0..categories).map(|i| 600.0 + (i as f64 * 0.7).sin() * 400.0).collect();
    let mut style = SeriesStyle::filled(242, 153, 74);
    style.tension = tension;
    ch.add_dataset(Dataset::new("Profit", style, data));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &(n, tension) in &[(12usize, None), (12usize, Some(0.4f32)), (365usize, Some(0.4f32))] {
        group.bench_function(format!("categories_{n}_tension_{}", tension.is_some()), |b| {
            let ch = build_chart(n, tension);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
