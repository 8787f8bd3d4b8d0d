use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{AppError, Result};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const IHDR_END: usize = 24;

/// Header facts read from a card image; pixel data is never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
}

/// Outcome of loading a single card image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded(CardImage),
    NotFound,
    Failed(String),
}

impl ImageLoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ImageLoadState::Loading)
    }
}

/// Result of looking a filename up in the asset namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Vec<u8>),
    NotFound,
}

/// Read-only view over `<assets_dir>/<namespace>/`.
#[derive(Debug, Clone)]
pub struct AssetStore {
    assets_dir: PathBuf,
    namespace: String,
}

impl AssetStore {
    pub fn new(assets_dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn namespace_dir(&self) -> PathBuf {
        self.assets_dir.join(&self.namespace)
    }

    /// Map a filename to its path, or `None` when it would leave the namespace.
    pub fn path_for(&self, filename: &str) -> Option<PathBuf> {
        let escapes = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\']);
        if escapes {
            None
        } else {
            Some(self.namespace_dir().join(filename))
        }
    }

    /// Fetch the raw bytes stored under `filename`.
    pub fn lookup(&self, filename: &str) -> Result<Lookup> {
        let Some(path) = self.path_for(filename) else {
            return Ok(Lookup::NotFound);
        };

        match fs::read(&path) {
            Ok(bytes) => Ok(Lookup::Found(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Lookup::NotFound),
            Err(err) if path.is_dir() => {
                warn!("Asset path {} is a directory: {err}", path.display());
                Ok(Lookup::NotFound)
            }
            Err(err) => Err(AppError::from(err)),
        }
    }

    /// Look up and decode `filename`, folding every failure into a state.
    pub fn resolve(&self, filename: &str) -> ImageLoadState {
        match self.lookup(filename) {
            Ok(Lookup::Found(bytes)) => match decode_png_header(&bytes) {
                Ok(image) => ImageLoadState::Loaded(image),
                Err(err) => {
                    warn!("Error loading image {}: {err}", self.display_path(filename));
                    ImageLoadState::Failed(err.to_string())
                }
            },
            Ok(Lookup::NotFound) => {
                warn!(
                    "Image resource {} not found",
                    self.display_path(filename)
                );
                ImageLoadState::NotFound
            }
            Err(err) => {
                warn!("Error loading image {}: {err}", self.display_path(filename));
                ImageLoadState::Failed(err.to_string())
            }
        }
    }

    fn display_path(&self, filename: &str) -> String {
        Path::new(&self.namespace).join(filename).display().to_string()
    }
}

/// Validate the PNG signature and read the IHDR dimensions.
pub fn decode_png_header(bytes: &[u8]) -> Result<CardImage> {
    if bytes.len() < IHDR_END || bytes[..8] != PNG_SIGNATURE {
        return Err(AppError::message("not a PNG image"));
    }
    if &bytes[12..16] != b"IHDR" {
        return Err(AppError::message("PNG image is missing its IHDR header"));
    }

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    if width == 0 || height == 0 {
        return Err(AppError::message(format!(
            "PNG image has invalid dimensions {width}x{height}"
        )));
    }

    Ok(CardImage {
        width,
        height,
        byte_len: bytes.len(),
    })
}
