use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "card-gallery")]
#[command(about = "Browse card images in a three-tab terminal app")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory that contains `assets/`
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive gallery (default)
    Tui,

    /// Print the image filename for each card name
    Filename {
        /// Card names, e.g. "Hog Rider" "Mini P.E.K.K.A"
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Report which catalog cards have a matching image asset
    Check,
}
