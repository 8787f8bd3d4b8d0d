use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::mpsc;

use crate::app::state::{AppState, SettingsSummary};
use crate::assets::{AssetStore, ImageLoader, ImageResponse};
use crate::cards::CatalogRegistry;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ui::{action_for_key, draw, TerminalGuard, UiAction};
use crate::utils::list_png_files;

/// Coordinates configuration, the card catalog, image loads and the TUI loop.
pub struct AppController {
    root: PathBuf,
    config: AppConfig,
    registry: Arc<CatalogRegistry>,
}

impl AppController {
    pub fn new(root: impl Into<PathBuf>, config: AppConfig) -> Result<Self> {
        let root = root.into();
        let registry = Arc::new(CatalogRegistry::new(config.catalog_path(&root))?);
        Ok(Self {
            root,
            config,
            registry,
        })
    }

    pub fn store(&self) -> AssetStore {
        AssetStore::new(
            self.config.assets_path(&self.root),
            self.config.image_namespace.clone(),
        )
    }

    pub fn registry(&self) -> &Arc<CatalogRegistry> {
        &self.registry
    }

    pub async fn run(self) -> Result<()> {
        if self.config.watch_catalog {
            if let Err(err) = self.registry.start_watching() {
                warn!("Card catalog watching disabled: {err}");
            }
        }

        let store = self.store();
        let settings = self.settings_summary(&store);
        let (loader, mut responses) = ImageLoader::new(store);
        let mut catalog_updates = self.registry.subscribe();

        let mut state = AppState::new(self.registry.snapshot(), settings);
        let started = state.request_images(&loader);
        info!("Requested {started} card images");

        let mut guard = TerminalGuard::new(self.config.tick_rate())?;

        loop {
            drain_responses(&mut state, &mut responses);

            if catalog_updates.has_changed().unwrap_or(false) {
                let catalog = catalog_updates.borrow_and_update().clone();
                state.set_catalog(catalog);
                state.request_images(&loader);
            }

            guard.terminal_mut().draw(|f| draw(f, &state))?;

            let Some(key) = guard.next_key()? else {
                continue;
            };
            let Some(action) = action_for_key(key) else {
                continue;
            };

            if action == UiAction::Reload {
                state.settings_mut().available_images =
                    count_images(&self.store().namespace_dir());
                state.reload_images(&loader);
            }
            if !state.handle(action) {
                break;
            }
        }

        guard.restore()?;
        Ok(())
    }

    fn settings_summary(&self, store: &AssetStore) -> SettingsSummary {
        SettingsSummary {
            title: self.config.title.clone(),
            assets_dir: self.config.assets_dir.clone(),
            image_namespace: store.namespace().to_string(),
            catalog_file: self.config.catalog_file.clone(),
            watch_catalog: self.config.watch_catalog,
            available_images: count_images(&store.namespace_dir()),
        }
    }
}

fn drain_responses(state: &mut AppState, responses: &mut mpsc::UnboundedReceiver<ImageResponse>) {
    while let Ok(response) = responses.try_recv() {
        state.apply_response(response);
    }
}

fn count_images(dir: &Path) -> usize {
    list_png_files(dir).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builds_store_from_config() {
        let dir = tempfile::tempdir().expect("temp dir");
        let controller =
            AppController::new(dir.path(), AppConfig::default()).expect("controller");

        let store = controller.store();
        assert_eq!(store.namespace(), "cards");
        assert_eq!(store.namespace_dir(), dir.path().join("assets").join("cards"));
        assert_eq!(controller.registry().snapshot().len(), 10);
    }

    #[test]
    fn settings_summary_counts_images() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cards = dir.path().join("assets").join("cards");
        fs::create_dir_all(&cards).expect("create namespace");
        fs::write(cards.join("knight.png"), b"").expect("write asset");

        let controller =
            AppController::new(dir.path(), AppConfig::default()).expect("controller");
        let summary = controller.settings_summary(&controller.store());
        assert_eq!(summary.available_images, 1);
        assert_eq!(summary.title, "LearnCR");
    }
}
