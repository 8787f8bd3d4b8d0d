use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::{ImageLoader, ImageResponse, ImageSlot};
use crate::cards::CardCatalog;
use crate::ui::navigation::{Tab, UiAction};
use crate::utils::current_human_timestamp;

/// One gallery entry: the name as authored, its asset filename and image state.
#[derive(Debug)]
pub struct CardTile {
    pub display_name: String,
    pub filename: String,
    pub slot: ImageSlot,
}

/// Facts shown on the Settings tab.
#[derive(Debug, Clone, Default)]
pub struct SettingsSummary {
    pub title: String,
    pub assets_dir: PathBuf,
    pub image_namespace: String,
    pub catalog_file: PathBuf,
    pub watch_catalog: bool,
    pub available_images: usize,
}

/// Everything the UI loop owns between frames.
pub struct AppState {
    tab: Tab,
    catalog: Arc<CardCatalog>,
    tiles: Vec<CardTile>,
    scroll: usize,
    catalog_loaded_at: String,
    settings: SettingsSummary,
}

impl AppState {
    pub fn new(catalog: Arc<CardCatalog>, settings: SettingsSummary) -> Self {
        let mut state = Self {
            tab: Tab::default(),
            catalog: Arc::clone(&catalog),
            tiles: Vec::new(),
            scroll: 0,
            catalog_loaded_at: String::new(),
            settings,
        };
        state.set_catalog(catalog);
        state
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn tiles(&self) -> &[CardTile] {
        &self.tiles
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn catalog_loaded_at(&self) -> &str {
        &self.catalog_loaded_at
    }

    pub fn settings(&self) -> &SettingsSummary {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsSummary {
        &mut self.settings
    }

    /// Swap in a new catalog. Tiles keep their slots by position, so a tile
    /// whose filename changed reloads on the next `request_images` and any
    /// response still in flight for its old filename is discarded.
    pub fn set_catalog(&mut self, catalog: Arc<CardCatalog>) {
        let entries = catalog.entries();
        self.tiles.truncate(entries.len());

        for (idx, entry) in entries.into_iter().enumerate() {
            match self.tiles.get_mut(idx) {
                Some(tile) => {
                    tile.display_name = entry.display_name;
                    tile.filename = entry.filename;
                }
                None => self.tiles.push(CardTile {
                    display_name: entry.display_name,
                    filename: entry.filename,
                    slot: ImageSlot::new(),
                }),
            }
        }

        self.catalog = catalog;
        self.scroll = self.scroll.min(self.tiles.len().saturating_sub(1));
        self.catalog_loaded_at = current_human_timestamp();
    }

    /// Ask the loader for every tile whose requested filename changed.
    pub fn request_images(&mut self, loader: &ImageLoader) -> usize {
        let mut started = 0;
        for (key, tile) in self.tiles.iter_mut().enumerate() {
            if tile.slot.request(loader, key, &tile.filename) {
                started += 1;
            }
        }
        started
    }

    pub fn reload_images(&mut self, loader: &ImageLoader) -> usize {
        let mut started = 0;
        for (key, tile) in self.tiles.iter_mut().enumerate() {
            if tile.slot.reload(loader, key) {
                started += 1;
            }
        }
        started
    }

    /// Route a finished load to its tile. Returns `false` for stale responses.
    pub fn apply_response(&mut self, response: ImageResponse) -> bool {
        match self.tiles.get_mut(response.key) {
            Some(tile) => tile.slot.apply(response),
            None => false,
        }
    }

    /// Apply a navigation action. Returns `false` when the app should exit.
    pub fn handle(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Select(tab) => self.tab = tab,
            UiAction::NextTab => self.tab = self.tab.next(),
            UiAction::PreviousTab => self.tab = self.tab.previous(),
            UiAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            UiAction::ScrollDown => {
                if self.scroll + 1 < self.tiles.len() {
                    self.scroll += 1;
                }
            }
            UiAction::Reload => {}
            UiAction::Quit => return false,
        }
        true
    }
}
