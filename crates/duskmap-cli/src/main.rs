use clap::{ArgAction, Args, Parser, Subcommand};
use duskmap_cli::commands::{cmd_batch, cmd_init, cmd_modify, cmd_palette};
use duskmap_cli::config::{init_config, init_logging};
use duskmap_cli::FilterOverrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "duskmap")]
#[command(version, about = "Dark-mode color transformer", long_about = None)]
struct Cli {
    /// Config file (overrides DUSKMAP_CONFIG and the default locations)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print config source, per-color details and cache statistics
    /// (repeat for cache trace logging)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Filter flags shared by every color command
#[derive(Args)]
struct FilterArgs {
    /// Filter mode: "light" or "dark"
    #[arg(short, long, value_name = "MODE")]
    mode: Option<String>,

    /// Brightness percentage (100 = unchanged)
    #[arg(long, value_name = "PERCENT")]
    brightness: Option<f64>,

    /// Contrast percentage (100 = unchanged)
    #[arg(long, value_name = "PERCENT")]
    contrast: Option<f64>,

    /// Grayscale percentage (0 = none)
    #[arg(long, value_name = "PERCENT")]
    grayscale: Option<f64>,

    /// Sepia percentage (0 = none)
    #[arg(long, value_name = "PERCENT")]
    sepia: Option<f64>,
}

impl From<FilterArgs> for FilterOverrides {
    fn from(args: FilterArgs) -> Self {
        Self {
            mode: args.mode,
            brightness: args.brightness,
            contrast: args.contrast,
            grayscale: args.grayscale,
            sepia: args.sepia,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Modify one or more CSS colors
    Modify {
        /// Colors to modify (hex, rgb(), rgba(), hsl(), hsla() or a name)
        #[arg(value_name = "COLOR", required = true)]
        colors: Vec<String>,

        /// Color role: background, foreground, border, shadow or gradient
        #[arg(short, long, value_name = "ROLE", default_value = "background")]
        role: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Modify a list of colors read from a file (one per line, "-" for stdin)
    Batch {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Color role: background, foreground, border, shadow or gradient
        #[arg(short, long, value_name = "ROLE", default_value = "background")]
        role: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,
    },

    /// Show a color as it comes out for every role
    Palette {
        /// Color to modify
        #[arg(value_name = "COLOR")]
        color: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Output path (default: ~/duskmap/duskmap.yml)
        #[arg(short, long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    init_config(cli.config.as_deref());

    let result = match cli.command {
        Commands::Modify {
            colors,
            role,
            filter,
            json,
        } => cmd_modify(colors, role, filter.into(), json),

        Commands::Batch {
            input,
            role,
            filter,
            json,
            threads,
        } => cmd_batch(input, role, filter.into(), json, threads),

        Commands::Palette {
            color,
            filter,
            json,
        } => cmd_palette(color, filter.into(), json),

        Commands::Init { path, force } => cmd_init(path, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
