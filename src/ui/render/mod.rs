mod all;
mod footer;
mod log;
mod logout;
mod screen;
mod sidebar;

use self::log::log;
use super::*;
use footer::footer;
use logout::logout_dialog;
use screen::screen;
use sidebar::sidebar;

pub use all::{all as render, all_at as render_at};
