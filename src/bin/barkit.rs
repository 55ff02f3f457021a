use anyhow::{Context, Result};
use barkit::{BarChart, ChartConfig, ChartData, Rgba, solid_color};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "barkit", version, about = "Render labeled numeric series as SVG bar charts")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart data file (JSON) to an SVG file.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Chart data JSON: {"labels": [...], "datasets": [{"data": [...]}]}
    #[arg(short, long)]
    data: PathBuf,
    /// Output SVG path.
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the chart (default 400).
    #[arg(long, default_value_t = 400.0)]
    width: f64,
    /// Height of the chart (default 220).
    #[arg(long, default_value_t = 220.0)]
    height: f64,
    /// Number of horizontal grid lines.
    #[arg(long, default_value_t = 4)]
    segments: usize,
    /// Fraction of the nominal bar width actually drawn.
    #[arg(long, default_value_t = 1.0)]
    bar_percentage: f64,
    /// Uniform bar corner radius.
    #[arg(long, default_value_t = 0.0)]
    bar_radius: f64,
    /// Decimal places for y-axis labels.
    #[arg(long, default_value_t = 2)]
    decimal_places: usize,
    /// Locale for y-axis number formatting (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Prefix for y-axis labels (e.g. "$").
    #[arg(long, default_value = "")]
    y_label: String,
    /// Suffix for y-axis labels (e.g. "%").
    #[arg(long, default_value = "")]
    y_suffix: String,
    /// Base chart color as hex (e.g. "#4472C4").
    #[arg(long)]
    color: Option<String>,
    /// Scale bars from zero instead of the series minimum.
    #[arg(long, default_value_t = false)]
    from_zero: bool,
    /// Hide the horizontal grid lines.
    #[arg(long, default_value_t = false)]
    no_grid: bool,
    /// Hide the y-axis value labels.
    #[arg(long, default_value_t = false)]
    no_y_labels: bool,
    /// Hide the category labels.
    #[arg(long, default_value_t = false)]
    no_x_labels: bool,
    /// Hide the caps at the top of each bar.
    #[arg(long, default_value_t = false)]
    no_bar_tops: bool,
    /// Print each value above its bar.
    #[arg(long, default_value_t = false)]
    show_values: bool,
    /// Fill bars from per-value colors declared in the data.
    #[arg(long, default_value_t = false)]
    custom_colors: bool,
    /// Use solid fills instead of gradient fades.
    #[arg(long, default_value_t = false)]
    flat_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.data)
        .with_context(|| format!("reading {}", args.data.display()))?;
    let data: ChartData = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.data.display()))?;
    log::debug!(
        "loaded {} labels, {} datasets",
        data.labels.len(),
        data.datasets.len()
    );

    let mut config = ChartConfig::new(args.width, args.height);
    config.segments = args.segments;
    config.bar_percentage = args.bar_percentage;
    config.bar_radius = args.bar_radius;
    config.decimal_places = args.decimal_places;
    config.locale = args.locale;
    config.y_axis_label = args.y_label;
    config.y_axis_suffix = args.y_suffix;
    config.from_zero = args.from_zero;
    config.with_inner_lines = !args.no_grid;
    config.with_horizontal_labels = !args.no_y_labels;
    config.with_vertical_labels = !args.no_x_labels;
    config.show_bar_tops = !args.no_bar_tops;
    config.show_values_on_top_of_bars = args.show_values;
    config.with_custom_bar_color_from_data = args.custom_colors;
    config.flat_color = args.flat_color;
    if let Some(hex) = args.color.as_deref() {
        let rgba = Rgba::from_hex(hex)
            .with_context(|| format!("invalid --color {hex:?}, expected hex like #4472C4"))?;
        config.color = solid_color(rgba);
    }

    BarChart::new(config).save_svg(&data, &args.out)?;
    eprintln!("Wrote chart to {}", args.out.display());
    Ok(())
}
