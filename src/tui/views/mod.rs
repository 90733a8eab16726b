//! TUI view components
//!
//! Each component renders one part of the interface from the data it is
//! handed; none of them reads application state directly.

mod app_list;
mod footer;
mod header;
mod help;
pub mod helpers;
mod resource_table;

pub use app_list::*;
pub use footer::*;
pub use header::*;
pub use help::*;
pub use resource_table::*;
