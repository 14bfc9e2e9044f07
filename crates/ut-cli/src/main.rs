//! Command-line front end for resolving universal table rolls.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ut_table::{DEFAULT_TABLE, parse_shift};

#[derive(Parser)]
#[command(
    name = "ut",
    about = "Resolve percentile rolls against a universal table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// Shared by every subcommand.
#[derive(Args)]
pub(crate) struct TableArgs {
    /// Path of the table document
    #[arg(
        short = 't',
        long,
        env = "UT_TABLE_FILE",
        default_value = "data/universal_table.json"
    )]
    pub(crate) table_file: PathBuf,

    /// Name of the table inside the document
    #[arg(long, env = "UT_TABLE_NAME", default_value = DEFAULT_TABLE)]
    pub(crate) table_name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the table document
    Check {
        #[command(flatten)]
        table: TableArgs,
    },

    /// List ranks from lowest to highest
    Ranks {
        #[command(flatten)]
        table: TableArgs,
    },

    /// List effect columns
    Effects {
        #[command(flatten)]
        table: TableArgs,
    },

    /// Print the text an effect gives for a color
    Effect {
        /// Effect name or abbreviation
        effect: String,

        /// Color tier: white, green, yellow, or red
        color: String,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Roll (or evaluate a given roll) against a rank
    Roll {
        /// Rank name, abbreviation, or number
        rank: String,

        /// Use this roll instead of drawing one
        #[arg(short, long)]
        roll: Option<u32>,

        /// Column shift applied to the rank, e.g. 2, -1, or cs+1
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<String>,

        /// Opposing intensity rank
        #[arg(short, long)]
        intensity: Option<String>,

        /// Column shift applied to the intensity
        #[arg(long, allow_hyphen_values = true)]
        intensity_shift: Option<String>,

        /// Effect column to read the result from
        #[arg(short, long)]
        effect: Option<String>,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        table: TableArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { table } => commands::check::run(&table),
        Commands::Ranks { table } => commands::ranks::run(&table),
        Commands::Effects { table } => commands::effects::run(&table),
        Commands::Effect {
            effect,
            color,
            table,
        } => commands::effect::run(&table, &effect, &color),
        Commands::Roll {
            rank,
            roll,
            shift,
            intensity,
            intensity_shift,
            effect,
            seed,
            json,
            table,
        } => {
            let request = ut_table::RollRequest {
                rank,
                roll,
                shift: shift.as_deref().map_or(0, parse_shift),
                intensity,
                intensity_shift: intensity_shift.as_deref().map_or(0, parse_shift),
                effect,
            };
            commands::roll::run(&table, &request, seed, json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
