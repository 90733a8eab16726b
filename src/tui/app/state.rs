//! Application state structures
//!
//! Sub-structures that group the App's fields: what each surface shows,
//! and transient UI state (search input, status line).

use crate::argocd::{Application, ResourceNode};
use crate::tui::filter::{FilterState, FilterTarget};
use crate::tui::focus::Surface;
use crate::tui::keybindings::Context;
use crate::tui::registry::HelpEntry;

/// Work a handler asks the dispatcher to perform after it returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Re-run the application listing
    RefreshApplications,
    /// Fetch the resource tree of an application, even if already shown
    LoadResources(String),
}

/// What each surface displays and where its selection sits
#[derive(Debug)]
pub struct ViewState {
    /// Application table (no header row in the widget)
    pub apps: Surface,
    /// Resource table; row 0 is the column header
    pub resources: Surface,
    /// Help listing, wraps
    pub help: Surface,
    pub filters: FilterState,
    /// Filtered views handed to the widgets
    pub visible_apps: Vec<Application>,
    pub visible_resources: Vec<ResourceNode>,
    pub visible_help: Vec<HelpEntry>,
    /// Rows per PageUp/PageDown, refreshed from the viewport on every render
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            apps: Surface::table(0),
            resources: Surface::table(1),
            help: Surface::list(),
            filters: FilterState::default(),
            visible_apps: Vec::new(),
            visible_resources: Vec::new(),
            visible_help: Vec::new(),
            page_size,
        }
    }
}

/// Search bar contents while it is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub buffer: String,
    pub target: FilterTarget,
}

/// UI-related state (search bar, status messages)
#[derive(Debug)]
pub struct UIState {
    pub running: bool,
    pub search: Option<SearchState>,
    /// Status message to display (message, is_error)
    pub status_message: Option<(String, bool)>,
    /// When status message was set (for auto-clearing)
    pub status_message_time: Option<std::time::Instant>,
    /// Context of the last non-Global command, marked in the help listing
    pub last_context: Option<Context>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            running: true,
            search: None,
            status_message: None,
            status_message_time: None,
            last_context: None,
        }
    }
}
