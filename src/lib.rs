pub mod app;
pub mod assets;
pub mod cards;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;
pub mod utils;

pub use cards::card_image_filename;
pub use error::{AppError, Result};
