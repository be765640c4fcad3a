use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gantt_charter::app::{self, RunOptions};
use gantt_charter::model::ConfigOverrides;
use gantt_charter::render::{ExportFormat, GroupBy};

/// Generate professional Gantt charts from YAML project schedules.
#[derive(Debug, Parser)]
#[command(name = "gantt-charter", version)]
#[command(about = "Generate Gantt charts from YAML schedules", long_about = None)]
struct Cli {
    /// Path to the schedule file (default: data/gantt_data.yaml, falling
    /// back to data/gantt_template.yaml); a .csv extension switches to the
    /// spreadsheet importer
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output filename without extension (default: derived from the project title)
    #[arg(short, long)]
    output: Option<String>,

    /// Output directory for saved charts
    #[arg(short = 'd', long, default_value = "output")]
    output_dir: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Html)]
    format: ExportFormat,

    /// Chart width in pixels (default: document value, or 1200)
    #[arg(long)]
    width: Option<u32>,

    /// Chart height in pixels (default: document value, or 600)
    #[arg(long)]
    height: Option<u32>,

    /// Export quality scale factor for raster formats
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Color palette to use
    #[arg(short, long, value_enum)]
    palette: Option<PaletteName>,

    /// Override the chart title from the document
    #[arg(long)]
    title: Option<String>,

    /// Add a branding watermark
    #[arg(long)]
    branding: bool,

    /// Disable branding even if the document enables it
    #[arg(long)]
    no_branding: bool,

    /// Group lanes by resource instead of by task
    #[arg(long)]
    by_resource: bool,

    /// Open the exported chart with the system viewer
    #[arg(short, long)]
    show: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum PaletteName {
    Professional,
    Traditional,
    Corporate,
    Contemporary,
    Vibrant,
    Primary,
    Pastel,
    Health,
    Diverging,
    SequentialBlue,
    Celebratory,
    Innovative,
}

impl PaletteName {
    fn as_str(self) -> &'static str {
        match self {
            PaletteName::Professional => "professional",
            PaletteName::Traditional => "traditional",
            PaletteName::Corporate => "corporate",
            PaletteName::Contemporary => "contemporary",
            PaletteName::Vibrant => "vibrant",
            PaletteName::Primary => "primary",
            PaletteName::Pastel => "pastel",
            PaletteName::Health => "health",
            PaletteName::Diverging => "diverging",
            PaletteName::SequentialBlue => "sequential_blue",
            PaletteName::Celebratory => "celebratory",
            PaletteName::Innovative => "innovative",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    let options = RunOptions {
        input: cli.input,
        output: cli.output,
        output_dir: cli.output_dir,
        format: cli.format,
        scale: cli.scale,
        title: cli.title,
        config: ConfigOverrides {
            palette: cli.palette.map(|p| p.as_str().to_string()),
            width: cli.width,
            height: cli.height,
            add_branding: resolve_branding_flags(cli.branding, cli.no_branding),
            show_dependencies: None,
        },
        group_by: if cli.by_resource {
            GroupBy::Resource
        } else {
            GroupBy::Task
        },
        show: cli.show,
    };

    match app::run(&options) {
        Ok(path) => {
            println!("Chart saved successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            if let Some(hint) = error.remediation() {
                eprintln!("\n{hint}");
            }
            if verbose {
                eprintln!("\n{error:?}");
            }
            ExitCode::FAILURE
        }
    }
}

/// `--no-branding` beats `--branding`; neither flag leaves the document in charge.
fn resolve_branding_flags(branding: bool, no_branding: bool) -> Option<bool> {
    if no_branding {
        Some(false)
    } else if branding {
        Some(true)
    } else {
        None
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gantt_charter=debug"
    } else {
        "gantt_charter=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
