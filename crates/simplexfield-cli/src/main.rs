//! simplexfield CLI - render and inspect seeded simplex noise fields
//!
//! This binary renders noise to PNG, samples single points, and dumps the
//! permutation table a seed produces.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use simplexfield_cli::commands;
use simplexfield_cli::commands::render::RenderOverrides;
use simplexfield_cli::logging;

/// simplexfield - Seed-reproducible simplex noise
#[derive(Parser)]
#[command(name = "simplexfield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a noise field to a grayscale PNG
    Render {
        /// Output PNG path
        #[arg(short, long)]
        out: String,

        /// JSON render params file (flags override its values)
        #[arg(short, long)]
        config: Option<String>,

        /// Generator seed (64-bit integer)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<String>,

        /// Seeded integer engine
        #[arg(long, value_parser = ["mt64", "pcg32"])]
        engine: Option<String>,

        /// Noise dimensionality
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
        dims: Option<u8>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Noise-space distance between adjacent pixels
        #[arg(long)]
        frequency: Option<f64>,

        /// Slice position for 3D renders
        #[arg(long, allow_negative_numbers = true)]
        z: Option<f64>,

        /// FBM octaves
        #[arg(long)]
        octaves: Option<u8>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the noise at one point (2 coordinates for 2D, 3 for 3D)
    Sample {
        /// Generator seed (64-bit integer)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: String,

        /// Seeded integer engine
        #[arg(long, default_value = "mt64", value_parser = ["mt64", "pcg32"])]
        engine: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Coordinates
        #[arg(num_args = 2..=3, required = true, allow_negative_numbers = true)]
        coords: Vec<f64>,
    },

    /// Print the permutation table for a seed
    Table {
        /// Generator seed (64-bit integer)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: String,

        /// Seeded integer engine
        #[arg(long, default_value = "mt64", value_parser = ["mt64", "pcg32"])]
        engine: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            out,
            config,
            seed,
            engine,
            dims,
            width,
            height,
            frequency,
            z,
            octaves,
            json,
        } => {
            let overrides = RenderOverrides {
                seed,
                engine,
                dimensions: dims,
                width,
                height,
                frequency,
                z,
                octaves,
            };
            commands::render::run(&out, config.as_deref(), &overrides, json)
        }
        Commands::Sample {
            seed,
            engine,
            json,
            coords,
        } => commands::sample::run(&seed, &engine, &coords, json),
        Commands::Table { seed, engine, json } => commands::table::run(&seed, &engine, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
