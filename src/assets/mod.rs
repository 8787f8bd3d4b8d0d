pub mod loader;
pub mod store;

pub use loader::{ImageLoader, ImageResponse, ImageSlot, TileKey};
pub use store::{decode_png_header, AssetStore, CardImage, ImageLoadState, Lookup};
