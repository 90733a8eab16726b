//! Application module
//!
//! This module contains the main TUI application state and the operations
//! key handlers perform on it, organized into sub-modules.

pub mod state;

mod bindings;
mod core;
mod rendering;

pub use bindings::default_registry;
pub use core::*;
pub use state::{AppCommand, SearchState, UIState, ViewState};
