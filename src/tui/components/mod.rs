// UI components - the navbar, menu overlay, status bar, and toasts
//
// The page body itself is rendered by ui.rs; these are the fixed
// chrome pieces layered around and over it.

pub mod menu;
pub mod navbar;
pub mod status_bar;
pub mod toast;
