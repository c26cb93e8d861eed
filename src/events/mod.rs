//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Navigation events: screen transitions requested by the sidebar
//! - Terminal events: User input and terminal interactions

pub mod navigation;
pub mod terminal;
