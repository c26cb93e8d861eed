//! Sidebar navigation module.
//!
//! This module contains the navigation shell's sidebar, including:
//! - Menu configuration (groups, sub-items, validation)
//! - Expansion state and its transition function
//! - The controller mediating presses and active screen changes
//! - The slide animation of the panel

mod animator;
mod controller;
mod error;
mod expansion;
mod menu;

pub use animator::{Easing, ToggleIcon, Tween, VisibilityAnimator, DEFAULT_DURATION_MS};
pub use controller::{SidebarController, SidebarHost, SidebarRow};
pub use error::MenuConfigError;
pub use expansion::{ExpansionEvent, ExpansionState};
pub use menu::{GroupKind, Icon, MenuConfig, MenuGroup, SubItem};
