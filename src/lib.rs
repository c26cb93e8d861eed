//! Terminal shell for a poultry farm management system: a collapsible
//! sidebar menu with mutually exclusive groups, a sliding show/hide
//! animation and screen navigation.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod sidebar;
pub mod state;
pub mod ui;
