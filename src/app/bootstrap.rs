use crate::app::controller::AppController;
use crate::assets::{AssetStore, ImageLoadState};
use crate::cards::{card_image_filename, CardCatalog};
use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::Result;

/// One line of the `check` report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRow {
    pub display_name: String,
    pub filename: String,
    pub status: &'static str,
}

/// Entry point used by `main` to dispatch the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.root)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => AppController::new(cli.root, config)?.run().await,
        Command::Filename { names } => {
            for name in &names {
                println!("{}", card_image_filename(name));
            }
            Ok(())
        }
        Command::Check => {
            let controller = AppController::new(cli.root, config)?;
            let rows = check_catalog(&controller.store(), &controller.registry().snapshot());
            for row in &rows {
                println!("{:<8} {:<28} {:?}", row.status, row.filename, row.display_name);
            }
            let missing = rows.iter().filter(|row| row.status != "ok").count();
            println!("{} cards, {} without a usable image", rows.len(), missing);
            Ok(())
        }
    }
}

/// Resolve every catalog card against the asset store.
pub fn check_catalog(store: &AssetStore, catalog: &CardCatalog) -> Vec<CheckRow> {
    catalog
        .entries()
        .into_iter()
        .map(|entry| {
            let status = match store.resolve(&entry.filename) {
                ImageLoadState::Loaded(_) => "ok",
                ImageLoadState::NotFound => "missing",
                ImageLoadState::Failed(_) => "invalid",
                ImageLoadState::Loading => "pending",
            };
            CheckRow {
                display_name: entry.display_name,
                filename: entry.filename,
                status,
            }
        })
        .collect()
}
