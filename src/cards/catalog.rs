use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Context, Result};

use super::filename::card_image_filename;

/// Heading shown above the gallery when a catalog file does not set one.
pub const DEFAULT_TITLE: &str = "Clash Royale Cards";

const BUILTIN_CARDS: &[&str] = &[
    "P.E.K.K.A",
    "Knight",
    "Archers",
    "Hog Rider",
    ".Elite Barbarians.",
    "Mini P.E.K.K.A",
    "Golem",
    "Bandit",
    "  Royal Ghost  ",
    "Electro Wizard",
];

/// Ordered list of card display names rendered by the Cards tab.
///
/// Names are stored exactly as authored; normalization happens when tiles
/// are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    #[serde(default = "default_title")]
    pub title: String,
    pub cards: Vec<String>,
}

/// A display name paired with the asset filename derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub display_name: String,
    pub filename: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CardCatalog {
    pub fn builtin() -> Self {
        Self {
            title: default_title(),
            cards: BUILTIN_CARDS.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Read a catalog from JSON of the form `{"title": "...", "cards": [...]}`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read card catalog at {}", path.display()))?;
        let catalog: CardCatalog = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse card catalog at {}", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load from `path` when it exists, otherwise fall back to the builtin list.
    pub fn load_or_builtin(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::builtin())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cards.is_empty() {
            return Err(AppError::message("card catalog must list at least one card"));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Normalize every name once, preserving catalog order.
    pub fn entries(&self) -> Vec<CardEntry> {
        self.cards
            .iter()
            .map(|name| CardEntry {
                display_name: name.clone(),
                filename: card_image_filename(name),
            })
            .collect()
    }
}
