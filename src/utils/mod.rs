pub mod file;
pub mod text;
pub mod time;

pub use file::list_png_files;
pub use text::truncate_to_width;
pub use time::current_human_timestamp;
