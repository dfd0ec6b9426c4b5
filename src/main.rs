use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_match::{BuiltinPalette, ColorMetric, DistanceWeight};
use colorpick::models::{AppConfig, PickReport, PickSettings};
use colorpick::rendering::png_io;
use colorpick::services::{parse_point, read_points, PickSession};

#[derive(Parser)]
#[command(name = "colorpick")]
#[command(about = "Sample image colors and name them")]
struct Cli {
    /// YAML config file (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the color at one position
    Pick {
        /// PNG image to sample
        image: PathBuf,

        #[arg(short, long, allow_negative_numbers = true)]
        x: i32,

        #[arg(short, long, allow_negative_numbers = true)]
        y: i32,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Write the image with the sampling outline to this PNG
        #[arg(long)]
        overlay: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a pointer path and pick at every point
    Trace {
        /// PNG image to sample
        image: PathBuf,

        /// Points as x,y; read from stdin (one per line) when omitted.
        /// Takes every following value, so give it last
        #[arg(long, num_args = 1.., allow_hyphen_values = true)]
        points: Vec<String>,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Print one JSON report per line
        #[arg(long)]
        json: bool,
    },
    /// List the built-in palettes
    Palettes {
        /// Only list this palette (names, simple)
        #[arg(short, long)]
        palette: Option<String>,
    },
}

/// Overrides for the sampling settings from the config file
#[derive(Args)]
struct SamplingArgs {
    /// Neighborhood radius in pixels
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<i32>,

    /// Pixel weighting (euclidean, euclidean2, manhattan, manhattan2, const)
    #[arg(short, long)]
    weight: Option<String>,

    /// Color distance (redmean, weighted, paramspace)
    #[arg(short, long)]
    metric: Option<String>,

    /// Outline the sampled neighborhood
    #[arg(long)]
    draw_rect: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorpick=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Pick {
            image,
            x,
            y,
            sampling,
            overlay,
            json,
        }) => {
            let settings = resolve_settings(config_path.as_deref(), &sampling, overlay.is_some())?;
            run_pick_command(&image, x, y, settings, overlay.as_deref(), json)
        }
        Some(Commands::Trace {
            image,
            points,
            sampling,
            json,
        }) => {
            let settings = resolve_settings(config_path.as_deref(), &sampling, false)?;
            run_trace_command(&image, &points, settings, json)
        }
        Some(Commands::Palettes { palette }) => run_palettes_command(palette.as_deref()),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Config file values, then command line overrides
fn resolve_settings(
    config_path: Option<&Path>,
    args: &SamplingArgs,
    force_rect: bool,
) -> anyhow::Result<PickSettings> {
    let mut config = config_path
        .map(AppConfig::load_from_file)
        .unwrap_or_default();

    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(ref weight) = args.weight {
        config.weight = weight.clone();
    }
    if let Some(ref metric) = args.metric {
        config.metric = metric.clone();
    }
    config.draw_rect |= args.draw_rect || force_rect;

    Ok(config.settings()?)
}

fn open_session(image: &Path, settings: PickSettings) -> anyhow::Result<PickSession> {
    let buffer = png_io::load_png(image)
        .with_context(|| format!("Failed to load {}", image.display()))?;
    Ok(PickSession::new(buffer, settings)?)
}

fn print_report(report: &PickReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Pick once, optionally saving the image with the outline drawn
fn run_pick_command(
    image: &Path,
    x: i32,
    y: i32,
    settings: PickSettings,
    overlay: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = open_session(image, settings)?;
    let report = session.pointer_move(x, y)?;

    if let Some(path) = overlay {
        png_io::save_png(path, session.image())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    print_report(&report, json)
}

/// Pick along a pointer path, one report per point
fn run_trace_command(
    image: &Path,
    points: &[String],
    settings: PickSettings,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = open_session(image, settings)?;

    let points = if points.is_empty() {
        read_points(std::io::stdin().lock()).context("Failed to read points from stdin")?
    } else {
        points
            .iter()
            .map(|text| parse_point(text))
            .collect::<Result<Vec<_>, _>>()?
    };

    for &(x, y) in &points {
        let report = session.pointer_move(x, y)?;
        print_report(&report, json)?;
    }

    tracing::info!(points = points.len(), "Trace finished");
    Ok(())
}

/// List palette entries with their colors
fn run_palettes_command(palette: Option<&str>) -> anyhow::Result<()> {
    let palettes = match palette {
        Some(key) => vec![key.parse::<BuiltinPalette>()?],
        None => BuiltinPalette::ALL.to_vec(),
    };

    for palette in palettes {
        let colors = palette.colors();
        println!("{palette} ({} colors):", colors.len());
        for entry in colors {
            println!(
                "  {:<22} {}  rgb({})",
                entry.name,
                entry.color.to_hex(),
                entry.color
            );
        }
    }
    Ok(())
}

fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("colorpick v{VERSION}");
    println!("Weighted pixel sampling and named color matching\n");

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (file not found, using defaults)", path.display()),
        None => "defaults (CONFIG_FILE not set)".to_string(),
    };
    println!("Config:  {config_source}\n");

    let join = |keys: Vec<&str>| keys.join(", ");
    println!(
        "Weights:  {}",
        join(DistanceWeight::ALL.iter().map(|w| w.key()).collect())
    );
    println!(
        "Metrics:  {}",
        join(ColorMetric::ALL.iter().map(|m| m.key()).collect())
    );
    println!(
        "Palettes: {}",
        join(BuiltinPalette::ALL.iter().map(|p| p.key()).collect())
    );

    println!("\nUsage:");
    println!("  colorpick pick IMAGE.png --x 10 --y 20 --radius 2");
    println!("  colorpick trace IMAGE.png --points 0,0 5,5 10,10");
    println!("  colorpick palettes --palette simple");
}
