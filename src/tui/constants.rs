//! Constants used throughout the TUI module

/// Status message timeout in seconds
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

/// Input poll interval of the main loop in milliseconds
pub const POLL_INTERVAL_MS: u64 = 100;

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 4;

/// Footer height including borders
pub const FOOTER_HEIGHT: u16 = 3;

/// Share of the body width given to the application table
pub const APP_TABLE_WIDTH_PERCENT: u16 = 25;

/// Rows kept visible above/below the selection before scrolling
pub const SCROLL_BUFFER: usize = 2;

/// Help popup size as a percentage of the screen
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Column headers of the resource table, in display order
pub const RESOURCE_COLUMNS: &[&str] = &[
    "NAME",
    "KIND",
    "NAMESPACE",
    "VERSION",
    "RESOURCE VERSION",
    "IMAGES",
    "HEALTH",
];

/// Smallest terminal the layout can draw into
pub const MIN_TERMINAL_WIDTH: u16 = 60;
pub const MIN_TERMINAL_HEIGHT: u16 = 12;
