//! Focus and navigation
//!
//! [`FocusController`] owns which surface receives input. The two tables
//! are the base layer; the help overlay and the command bar are overlays that
//! push the current focus onto a return stack and pop it when they close.
//!
//! [`Surface`] holds the selection of one list- or table-like widget and
//! applies [`Navigation`] intents with the policy of its [`SurfaceKind`].

use super::keybindings::Context;
use super::registry::EventResult;

/// A surface that can hold input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    AppTable,
    MainTable,
    HelpOverlay,
    CommandBar,
}

impl FocusTarget {
    /// Registry context consulted while this surface has focus
    pub fn context(&self) -> Context {
        match self {
            FocusTarget::AppTable => Context::AppTable,
            FocusTarget::MainTable => Context::MainPage,
            FocusTarget::HelpOverlay => Context::Help,
            FocusTarget::CommandBar => Context::CommandBar,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, FocusTarget::HelpOverlay | FocusTarget::CommandBar)
    }
}

#[derive(Debug, Clone)]
pub struct FocusController {
    current: FocusTarget,
    /// Focus to restore as each open overlay closes, innermost last
    return_stack: Vec<FocusTarget>,
    /// Last table that held focus
    last_table: FocusTarget,
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusController {
    pub fn new() -> Self {
        Self {
            current: FocusTarget::AppTable,
            return_stack: Vec::new(),
            last_table: FocusTarget::AppTable,
        }
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    pub fn context(&self) -> Context {
        self.current.context()
    }

    /// Surface that regains focus when the current overlay closes
    pub fn previous(&self) -> FocusTarget {
        self.return_stack
            .last()
            .copied()
            .unwrap_or(self.last_table)
    }

    /// Table underneath any open overlays
    pub fn base(&self) -> FocusTarget {
        self.last_table
    }

    pub fn is_open(&self, overlay: FocusTarget) -> bool {
        self.current == overlay || self.return_stack.contains(&overlay)
    }

    pub fn overlay_open(&self) -> bool {
        self.current.is_overlay()
    }

    /// Tab / Shift-Tab: swap between the two tables
    ///
    /// Ignored while an overlay has focus.
    pub fn toggle_tables(&mut self) -> EventResult {
        let next = match self.current {
            FocusTarget::AppTable => FocusTarget::MainTable,
            FocusTarget::MainTable => FocusTarget::AppTable,
            FocusTarget::HelpOverlay | FocusTarget::CommandBar => return EventResult::Ignored,
        };
        self.focus_table(next);
        EventResult::Consumed
    }

    /// Move focus to a table directly; no-op for overlays or while one is open
    pub fn focus_table(&mut self, table: FocusTarget) -> bool {
        if table.is_overlay() || self.overlay_open() {
            return false;
        }
        self.current = table;
        self.last_table = table;
        true
    }

    /// Give focus to an overlay, remembering the current focus
    pub fn open_overlay(&mut self, overlay: FocusTarget) {
        if !overlay.is_overlay() || self.current == overlay {
            return;
        }
        self.return_stack.push(self.current);
        self.current = overlay;
    }

    /// Close the focused overlay and restore what it covered
    ///
    /// Returns the surface that regained focus, or `None` if no overlay had focus.
    pub fn close_overlay(&mut self) -> Option<FocusTarget> {
        if !self.overlay_open() {
            return None;
        }
        self.current = self.return_stack.pop().unwrap_or(self.last_table);
        Some(self.current)
    }

    /// `?`: open help, or close it when it has focus
    pub fn toggle_help(&mut self) -> EventResult {
        match self.current {
            FocusTarget::HelpOverlay => {
                self.close_overlay();
            }
            FocusTarget::CommandBar => return EventResult::Ignored,
            FocusTarget::AppTable | FocusTarget::MainTable => {
                self.open_overlay(FocusTarget::HelpOverlay);
            }
        }
        EventResult::Consumed
    }
}

/// Scroll policy of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Wraps from last to first and back
    List,
    /// Clamps at the data bounds; `header_rows` fixed rows precede the data
    Table { header_rows: usize },
}

/// Navigation intents, independent of the key that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Move by n rows
    Scroll(isize),
    /// Jump to a data row; negative counts from the end (`-1` is the last row)
    ScrollTo(isize),
    /// Move by n pages
    Page(isize),
}

/// Selection state of one list or table
///
/// `selected` is a data index; [`Surface::selected_row`] adds the fixed
/// header rows for widgets that count them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    kind: SurfaceKind,
    selected: Option<usize>,
    len: usize,
    /// First visible data row
    pub scroll_offset: usize,
}

impl Surface {
    pub fn list() -> Self {
        Self::new(SurfaceKind::List)
    }

    pub fn table(header_rows: usize) -> Self {
        Self::new(SurfaceKind::Table { header_rows })
    }

    fn new(kind: SurfaceKind) -> Self {
        Self {
            kind,
            selected: None,
            len: 0,
            scroll_offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Widget row of the selection, header rows included
    pub fn selected_row(&self) -> Option<usize> {
        let header_rows = match self.kind {
            SurfaceKind::List => 0,
            SurfaceKind::Table { header_rows } => header_rows,
        };
        self.selected.map(|idx| idx + header_rows)
    }

    /// Update the number of data rows, keeping the selection in range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = match (len, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(idx)) => Some(idx.min(len - 1)),
        };
        if len == 0 {
            self.scroll_offset = 0;
        }
    }

    /// Select a data row; out-of-range indices clamp
    pub fn select(&mut self, idx: usize) {
        if self.len > 0 {
            self.selected = Some(idx.min(self.len - 1));
        }
    }

    /// Back to the first data row
    pub fn reset(&mut self) {
        self.selected = if self.len > 0 { Some(0) } else { None };
        self.scroll_offset = 0;
    }

    /// Apply a navigation intent; returns whether the selection moved
    pub fn navigate(&mut self, nav: Navigation, page_size: usize) -> bool {
        if self.len == 0 {
            self.selected = None;
            return false;
        }

        let len = self.len as isize;
        let last = len - 1;
        let current = self.selected.unwrap_or(0).min(self.len - 1) as isize;
        let page = page_size.max(1) as isize;

        let next = match nav {
            Navigation::Scroll(delta) => match self.kind {
                SurfaceKind::List => (current + delta).rem_euclid(len),
                SurfaceKind::Table { .. } => (current + delta).clamp(0, last),
            },
            Navigation::ScrollTo(target) if target >= 0 => target.min(last),
            Navigation::ScrollTo(from_end) => (len + from_end).max(0),
            Navigation::Page(pages) => (current + pages * page).clamp(0, last),
        };

        let changed = self.selected != Some(next as usize);
        self.selected = Some(next as usize);
        changed
    }
}
