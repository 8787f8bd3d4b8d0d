pub mod components;
pub mod navigation;
pub mod screens;
pub mod styles;

pub use components::TerminalGuard;
pub use navigation::{action_for_key, Tab, UiAction};
pub use screens::draw;
