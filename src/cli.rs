use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Life calendar: a 90-year grid of weeks lived
#[derive(Parser)]
#[command(name = "life-table", version, about = "Render life calendar tables as PNG")]
pub struct Cli {
    /// Log at info level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file (TOML or JSON); defaults to the user config directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render one life table
    Render(RenderArgs),
    /// Print the "life in numbers" summary for a birthdate
    Info(InfoArgs),
    /// Render a table for every subscriber in a JSON list
    Batch(BatchArgs),
}

/// Options shared by every command that reads the string tables
#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Override the locales file
    #[arg(long)]
    pub locales: Option<PathBuf>,

    /// Override the quotes file
    #[arg(long)]
    pub quotes: Option<PathBuf>,

    /// Reference day (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(clap::Args)]
pub struct RenderArgs {
    /// Birthdate: YYYY-MM-DD, DD.MM.YYYY, DD/MM/YYYY or MM/DD/YYYY
    pub birthdate: String,

    /// Language code
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Where to write the PNG
    #[arg(short, long, default_value = "life_table.png")]
    pub output: PathBuf,

    /// Seed for the quote choice
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the TrueType font
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Override the footer text
    #[arg(long)]
    pub footer: Option<String>,

    /// Also print the caption that goes with the image
    #[arg(long)]
    pub caption: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(clap::Args)]
pub struct InfoArgs {
    /// Birthdate: YYYY-MM-DD, DD.MM.YYYY, DD/MM/YYYY or MM/DD/YYYY
    pub birthdate: String,

    /// Language code
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Print raw numbers as JSON instead of the localized text
    #[arg(long)]
    pub json: bool,

    /// Seed for the quote choice
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(clap::Args)]
pub struct BatchArgs {
    /// JSON array of `{"id", "birthdate", "lang"}` objects
    pub subscribers: PathBuf,

    /// Override the output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Base seed; subscriber `i` uses `seed + i`
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Override the TrueType font
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}
