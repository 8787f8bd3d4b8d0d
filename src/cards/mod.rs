pub mod catalog;
pub mod filename;
pub mod registry;

pub use catalog::{CardCatalog, CardEntry};
pub use filename::card_image_filename;
pub use registry::CatalogRegistry;
