//! Read models handed to the UI layer
//!
//! Menus are plain data; the presentation layer decides how to draw them.

pub mod context_menu;

pub use context_menu::{ContextMenu, MenuAction, MenuEntry, MenuItem};
