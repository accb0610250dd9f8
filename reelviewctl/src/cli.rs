use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reelview_model::DEFAULT_IMAGE_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "reelviewctl",
    version,
    about = "Browse the movie and TV catalog from the terminal"
)]
pub struct Cli {
    /// Configuration file (defaults to reelview.toml or $REELVIEW_CONFIG_PATH)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment file loaded before reading the environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a page and print what it shows
    Browse(BrowseArgs),
    /// Print the image URL for an image identifier
    Image(ImageArgs),
    /// List the catalog categories and their endpoints
    Categories,
}

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Route to render, e.g. `/`, `/tv/1399` or `/search?keyword=dune`
    #[arg(default_value = "/")]
    pub path: String,

    /// Page a slider backward once (repeatable, by slider index)
    #[arg(long = "prev", value_name = "SLIDER")]
    pub previous: Vec<usize>,

    /// Page a slider forward once (repeatable, by slider index)
    #[arg(long, value_name = "SLIDER")]
    pub next: Vec<usize>,

    /// Open the overlay for an item as if its card was clicked
    #[arg(long, value_name = "ID")]
    pub open: Option<i64>,

    /// Fetch the extended detail for the open overlay
    #[arg(long)]
    pub detail: bool,

    /// Print the page snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Image identifier as returned by the catalog, e.g. `/abc.jpg`
    pub id: String,

    /// Size tag such as `w500`; omitted means `original`
    #[arg(long)]
    pub size: Option<String>,

    /// Image host root
    #[arg(long, default_value = DEFAULT_IMAGE_BASE)]
    pub base: String,
}
