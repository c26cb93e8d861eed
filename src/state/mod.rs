//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the shell, sidebar and animation state
//! - Navigation types (ScreenId, Focus)

mod navigation;
mod state_impl;

pub use navigation::{Focus, ScreenId};
pub use state_impl::{Shell, State};
