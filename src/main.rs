use clap::Parser;
use log::info;

use card_gallery::cli::Cli;

#[tokio::main]
async fn main() -> card_gallery::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("Starting card-gallery in {}", cli.root.display());
    card_gallery::app::run(cli).await
}
