use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "storegen",
    about = "Generate and load a reproducible synthetic e-commerce dataset",
    version,
    after_help = "Examples:\n  storegen generate                      # 50k users, 50k products, 100k orders into ./data\n  storegen generate --orders 1000 --seed 7\n  storegen load                          # load ./data into db/ecommerce.db\n  storegen load --database /tmp/shop.db"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the five CSV tables
    Generate(GenerateArgs),

    /// Reset the database schema and bulk-load the CSV tables
    Load(LoadArgs),
}

/// Every flag is optional: unset values fall back to storegen.toml, then to
/// the built-in defaults, so a bare `storegen generate` always works.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Number of users to generate
    #[arg(long)]
    pub users: Option<usize>,

    /// Number of products to generate
    #[arg(long)]
    pub products: Option<usize>,

    /// Number of orders to generate
    #[arg(long)]
    pub orders: Option<usize>,

    /// Random seed for deterministic generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory the CSV files are written to
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Directory the CSV files are read from
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Path of the embedded database file
    #[arg(long)]
    pub database: Option<PathBuf>,
}
