use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use hexgrid_fit::config::{
    DEFAULT_GRANULARITY, DEFAULT_K_MAX, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH,
    DEFAULT_SAMPLE_COUNT, DEFAULT_STROKE_WIDTH,
};
use hexgrid_fit::{
    compose_sample_sheet, fit_grid, BestFitResult, ExtentMode, GridRequest, Margins, Orientation,
    PixelSize, SampleSheet, SearchParams, SheetRequest, SizeInterval, StrokeWidth,
};

#[derive(Parser)]
#[command(name = "hexgrid-fit")]
#[command(about = "Find hexagon sizes that stay aligned on the pixel grid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the best hexagon width and plan the canvas for one image
    Fit {
        #[command(flatten)]
        search: SearchArgs,

        /// Inward margins in pixels, "M" or "T,R,B,L" (negative values let the grid run past the image)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        margins: Margins,

        /// Target image size, WIDTHxHEIGHT
        #[arg(long)]
        image: Option<PixelSize>,

        /// Crop the canvas to the hexagon span plus margins
        #[arg(long)]
        auto_extent: bool,

        /// Read the whole request from a JSON file instead of flags
        #[arg(long)]
        request: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compose a sheet comparing the best widths of an interval
    Sheet {
        #[command(flatten)]
        search: SearchArgs,

        /// Sheet size, WIDTHxHEIGHT
        #[arg(long, default_value = "1000x600")]
        sheet: PixelSize,

        /// Number of samples on the sheet (1 to 25)
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        samples: usize,

        /// Read the whole request from a JSON file instead of flags
        #[arg(long)]
        request: Option<PathBuf>,

        /// Print the sheet as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Smallest hexagon width (face to face) in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_WIDTH)]
    min_width: f64,

    /// Largest hexagon width in pixels, 0 to use --min-width exactly
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: f64,

    /// pointy-top (rows along x) or flat-top (rows along y)
    #[arg(long, default_value = "pointy-top")]
    orientation: Orientation,

    /// Stroke width in pixels
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    stroke_width: u32,

    /// Width step of the sweep in pixels
    #[arg(long, default_value_t = DEFAULT_GRANULARITY)]
    granularity: f64,

    /// Quality reported for a pitch that never drifts
    #[arg(long, default_value_t = DEFAULT_K_MAX)]
    k_max: u32,
}

impl SearchArgs {
    fn interval(&self) -> anyhow::Result<SizeInterval> {
        SizeInterval::new(self.min_width, self.max_width).context("Invalid width interval")
    }

    fn params(&self) -> anyhow::Result<SearchParams> {
        Ok(SearchParams {
            orientation: self.orientation,
            stroke_width: StrokeWidth::new(self.stroke_width)?,
            granularity: self.granularity,
            k_max: self.k_max,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting hexgrid-fit v{}", hexgrid_fit::VERSION);

    match cli.command {
        Commands::Fit {
            search,
            margins,
            image,
            auto_extent,
            request,
            json,
        } => {
            let request = match request {
                Some(path) => read_request::<GridRequest>(&path)?,
                None => {
                    let Some(target) = image else {
                        bail!("--image WIDTHxHEIGHT is required unless --request is given");
                    };
                    GridRequest {
                        interval: search.interval()?,
                        params: search.params()?,
                        margins,
                        target,
                        extent_mode: if auto_extent {
                            ExtentMode::Auto
                        } else {
                            ExtentMode::Fixed
                        },
                    }
                }
            };
            let result = fit_grid(&request).context("Fitting the hexagon grid failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_fit(&result);
            }
        }
        Commands::Sheet {
            search,
            sheet,
            samples,
            request,
            json,
        } => {
            let request = match request {
                Some(path) => read_request::<SheetRequest>(&path)?,
                None => SheetRequest {
                    interval: search.interval()?,
                    sheet,
                    sample_count: samples,
                    params: search.params()?,
                },
            };
            let sheet = compose_sample_sheet(&request).context("Composing the sample sheet failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            } else {
                print_sheet(&sheet);
            }
        }
    }
    Ok(())
}

fn read_request<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse request file {}", path.display()))
}

fn print_fit(result: &BestFitResult) {
    let extent = &result.extent;
    let guide = extent.grid_guide();
    println!("{}", result.label());
    println!("apothem  : {}", result.lattice.apothem());
    println!(
        "drift    : {} (primary) / {} (secondary)",
        result.drift.primary, result.drift.secondary
    );
    println!(
        "pitches  : {} x {} px, stagger {}",
        extent.pitches.primary,
        extent.pitches.secondary,
        extent.pitches.stagger()
    );
    println!(
        "canvas   : {}x{} ({}, width along {})",
        extent.width,
        extent.height,
        extent.orientation,
        extent.orientation.width_axis_name()
    );
    println!(
        "hexagons : {} columns x {} rows{}",
        extent.columns,
        extent.rows,
        if extent.clipped { ", clipped" } else { "" }
    );
    println!(
        "origin   : ({}, {}), first center ({}, {})",
        extent.origin.x, extent.origin.y, extent.first_center.x, extent.first_center.y
    );
    println!(
        "grid     : spacing ({}, {}) offset ({}, {})",
        guide.spacing.x, guide.spacing.y, guide.offset.x, guide.offset.y
    );
}

fn print_sheet(sheet: &SampleSheet) {
    println!(
        "sheet {}: {} rows x {} columns of {} px",
        sheet.background, sheet.grid.rows, sheet.grid.columns, sheet.grid.cell_size
    );
    for cell in &sheet.cells {
        println!(
            "#{} at ({}, {}): {}",
            cell.index,
            cell.bounds.min.x,
            cell.bounds.min.y,
            cell.label.to_string().replace('\n', "  ")
        );
    }
}
