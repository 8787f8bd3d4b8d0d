use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::store::{AssetStore, ImageLoadState};

/// Identifies the tile that asked for an image.
pub type TileKey = usize;

/// A finished load, tagged with the filename it was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResponse {
    pub key: TileKey,
    pub filename: String,
    pub state: ImageLoadState,
}

/// Runs image lookups off the UI loop and reports back over a channel.
#[derive(Clone)]
pub struct ImageLoader {
    store: Arc<AssetStore>,
    tx: mpsc::UnboundedSender<ImageResponse>,
}

impl ImageLoader {
    pub fn new(store: AssetStore) -> (Self, mpsc::UnboundedReceiver<ImageResponse>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let loader = Self {
            store: Arc::new(store),
            tx,
        };
        (loader, rx)
    }

    /// Spawn a load for `filename`. Must be called inside a tokio runtime.
    pub fn request(&self, key: TileKey, filename: &str) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        let filename = filename.to_string();

        tokio::spawn(async move {
            let lookup_name = filename.clone();
            let state = match tokio::task::spawn_blocking(move || store.resolve(&lookup_name)).await
            {
                Ok(state) => state,
                Err(err) => ImageLoadState::Failed(format!("image load task failed: {err}")),
            };

            if tx.send(ImageResponse { key, filename, state }).is_err() {
                debug!("Image response dropped; receiver closed");
            }
        })
    }
}

/// Per-tile image state keyed by the most recently requested filename.
///
/// Responses for any other filename are stale and get discarded.
#[derive(Debug, Default)]
pub struct ImageSlot {
    filename: Option<String>,
    state: ImageLoadState,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn state(&self) -> &ImageLoadState {
        &self.state
    }

    /// Point the slot at `filename`, starting a load if it changed.
    ///
    /// Returns `true` when a load was started.
    pub fn request(&mut self, loader: &ImageLoader, key: TileKey, filename: &str) -> bool {
        if self.filename.as_deref() == Some(filename) {
            return false;
        }
        self.filename = Some(filename.to_string());
        self.state = ImageLoadState::Loading;
        loader.request(key, filename);
        true
    }

    /// Load the current filename again, regardless of its state.
    pub fn reload(&mut self, loader: &ImageLoader, key: TileKey) -> bool {
        let Some(filename) = self.filename.clone() else {
            return false;
        };
        self.state = ImageLoadState::Loading;
        loader.request(key, &filename);
        true
    }

    /// Accept `response` if it matches the current filename.
    pub fn apply(&mut self, response: ImageResponse) -> bool {
        if self.filename.as_deref() != Some(response.filename.as_str()) {
            debug!(
                "Ignoring stale image response for {} (current: {:?})",
                response.filename, self.filename
            );
            return false;
        }
        self.state = response.state;
        true
    }
}
