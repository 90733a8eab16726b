//! Application state and the operations handlers perform on it

use super::state::{AppCommand, SearchState, UIState, ViewState};
use crate::argocd::{Application, ResourceNode};
use crate::config::Config;
use crate::services::ResourceStore;
use crate::tui::Theme;
use crate::tui::filter::{FilterTarget, filter_by_name};
use crate::tui::focus::{FocusController, FocusTarget, Navigation, Surface};
use crate::tui::keybindings::Context;
use crate::tui::registry::{EventResult, HelpEntry};
use std::collections::VecDeque;

/// Main application state
pub struct App {
    // Core data
    pub(crate) store: ResourceStore,
    pub(crate) config: Config,
    pub(crate) theme: Theme,

    // Organized state
    pub(crate) focus: FocusController,
    pub(crate) view_state: ViewState,
    pub(crate) ui_state: UIState,
    pub(crate) help_entries: Vec<HelpEntry>,
    pub(crate) pending: VecDeque<AppCommand>,
}

impl App {
    pub fn new(store: ResourceStore, config: Config, theme: Theme) -> Self {
        let page_size = config.ui.page_size;
        Self {
            store,
            config,
            theme,
            focus: FocusController::new(),
            view_state: ViewState::new(page_size),
            ui_state: UIState::default(),
            help_entries: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    // Read access

    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn is_running(&self) -> bool {
        self.ui_state.running
    }

    pub fn visible_apps(&self) -> &[Application] {
        &self.view_state.visible_apps
    }

    pub fn visible_resources(&self) -> &[ResourceNode] {
        &self.view_state.visible_resources
    }

    pub fn visible_help(&self) -> &[HelpEntry] {
        &self.view_state.visible_help
    }

    pub fn filter(&self, target: FilterTarget) -> &str {
        self.view_state.filters.get(target)
    }

    pub fn surface(&self, target: FilterTarget) -> &Surface {
        match target {
            FilterTarget::AppTable => &self.view_state.apps,
            FilterTarget::MainTable => &self.view_state.resources,
            FilterTarget::Help => &self.view_state.help,
        }
    }

    fn surface_mut(&mut self, target: FilterTarget) -> &mut Surface {
        match target {
            FilterTarget::AppTable => &mut self.view_state.apps,
            FilterTarget::MainTable => &mut self.view_state.resources,
            FilterTarget::Help => &mut self.view_state.help,
        }
    }

    /// Search bar text, if the bar is open
    pub fn search_buffer(&self) -> Option<&str> {
        self.ui_state.search.as_ref().map(|s| s.buffer.as_str())
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.ui_state.status_message.as_ref()
    }

    /// Application under the cursor of the application table
    pub fn highlighted_app(&self) -> Option<&Application> {
        self.view_state
            .apps
            .selected()
            .and_then(|idx| self.view_state.visible_apps.get(idx))
    }

    pub(crate) fn highlighted_app_name(&self) -> Option<String> {
        self.highlighted_app().map(|app| app.name.clone())
    }

    // View refresh

    /// Recompute the application view from the store and the app filter
    pub(crate) fn refresh_apps_view(&mut self) {
        let filter = self.view_state.filters.get(FilterTarget::AppTable);
        self.view_state.visible_apps = filter_by_name(self.store.applications(), filter);
        self.view_state
            .apps
            .set_len(self.view_state.visible_apps.len());
    }

    /// Recompute the resource view from the store and the main filter
    pub(crate) fn refresh_main_view(&mut self) {
        let filter = self.view_state.filters.get(FilterTarget::MainTable);
        self.view_state.visible_resources = filter_by_name(self.store.resources(), filter);
        self.view_state
            .resources
            .set_len(self.view_state.visible_resources.len());
    }

    pub(crate) fn refresh_help_view(&mut self) {
        let filter = self.view_state.filters.get(FilterTarget::Help);
        self.view_state.visible_help = filter_by_name(&self.help_entries, filter);
        self.view_state
            .help
            .set_len(self.view_state.visible_help.len());
    }

    fn refresh_view(&mut self, target: FilterTarget) {
        match target {
            FilterTarget::AppTable => self.refresh_apps_view(),
            FilterTarget::MainTable => self.refresh_main_view(),
            FilterTarget::Help => self.refresh_help_view(),
        }
    }

    pub(crate) fn set_help_entries(&mut self, entries: Vec<HelpEntry>) {
        self.help_entries = entries;
        self.refresh_help_view();
    }

    /// Applications were reloaded; keep the highlight on the same name if it survived
    pub(crate) fn applications_loaded(&mut self, previous: Option<&str>) {
        self.refresh_apps_view();
        if let Some(name) = previous {
            if let Some(idx) = self
                .view_state
                .visible_apps
                .iter()
                .position(|app| app.name == name)
            {
                self.view_state.apps.select(idx);
            }
        }
    }

    /// A new resource tree was loaded: drop the main filter and show it all
    pub(crate) fn resources_loaded(&mut self) {
        self.view_state.filters.clear(FilterTarget::MainTable);
        self.refresh_main_view();
        self.view_state.resources.reset();
    }

    /// No application is highlighted any more: stop showing the old tree
    pub(crate) fn selection_cleared(&mut self) {
        self.store.clear_selection();
        self.resources_loaded();
    }

    // Handler operations

    pub(crate) fn quit(&mut self) {
        tracing::debug!("Quit requested");
        self.ui_state.running = false;
    }

    pub(crate) fn request(&mut self, command: AppCommand) {
        self.pending.push_back(command);
    }

    pub(crate) fn take_pending(&mut self) -> Option<AppCommand> {
        self.pending.pop_front()
    }

    /// Filter target of a context's surface
    pub(crate) fn target_for(context: Context) -> Option<FilterTarget> {
        match context {
            Context::AppTable => Some(FilterTarget::AppTable),
            Context::MainPage => Some(FilterTarget::MainTable),
            Context::Help => Some(FilterTarget::Help),
            Context::Global | Context::CommandBar => None,
        }
    }

    /// Move the selection of the surface behind `context`
    pub(crate) fn navigate(&mut self, context: Context, nav: Navigation) -> EventResult {
        let Some(target) = Self::target_for(context) else {
            return EventResult::Ignored;
        };
        let page_size = self.view_state.page_size;
        self.surface_mut(target).navigate(nav, page_size);
        EventResult::Consumed
    }

    pub(crate) fn toggle_help(&mut self) -> EventResult {
        let result = self.focus.toggle_help();
        if self.focus.current() == FocusTarget::HelpOverlay {
            self.refresh_help_view();
        }
        result
    }

    pub(crate) fn toggle_tables(&mut self) -> EventResult {
        self.focus.toggle_tables()
    }

    /// Open the search bar aimed at the focused surface
    pub(crate) fn open_search(&mut self) -> EventResult {
        let target = match self.focus.current() {
            FocusTarget::AppTable => FilterTarget::AppTable,
            FocusTarget::MainTable => FilterTarget::MainTable,
            FocusTarget::HelpOverlay => FilterTarget::Help,
            FocusTarget::CommandBar => return EventResult::Ignored,
        };
        self.ui_state.search = Some(SearchState {
            buffer: self.view_state.filters.get(target).to_string(),
            target,
        });
        self.focus.open_overlay(FocusTarget::CommandBar);
        EventResult::Consumed
    }

    /// Enter in the search bar: apply the text as the target's filter
    pub(crate) fn submit_search(&mut self) -> EventResult {
        let Some(search) = self.ui_state.search.take() else {
            return EventResult::Ignored;
        };
        tracing::debug!("Filter {} by {:?}", search.target.label(), search.buffer);
        self.view_state.filters.set(search.target, search.buffer);
        self.refresh_view(search.target);
        self.surface_mut(search.target).reset();
        self.focus.close_overlay();
        EventResult::Consumed
    }

    /// Escape in the search bar: close it, optionally clearing the target's filter
    pub(crate) fn cancel_search(&mut self) -> EventResult {
        let Some(search) = self.ui_state.search.take() else {
            return EventResult::Ignored;
        };
        if self.config.ui.escape_clears_filter {
            self.clear_filter(search.target);
        }
        self.focus.close_overlay();
        EventResult::Consumed
    }

    /// Drop a filter and restore the full view; false if none was active
    pub(crate) fn clear_filter(&mut self, target: FilterTarget) -> bool {
        if !self.view_state.filters.clear(target) {
            return false;
        }
        self.refresh_view(target);
        true
    }

    /// Printable character or Backspace in the search bar
    pub(crate) fn edit_search(&mut self, edit: SearchEdit) -> EventResult {
        let Some(search) = self.ui_state.search.as_mut() else {
            return EventResult::Ignored;
        };
        match edit {
            SearchEdit::Insert(c) => search.buffer.push(c),
            SearchEdit::DeleteBack => {
                search.buffer.pop();
            }
            SearchEdit::Clear => search.buffer.clear(),
        }
        EventResult::Consumed
    }

    /// Status line message, cleared after a timeout
    pub fn set_status_message(&mut self, message: (String, bool)) {
        self.ui_state.status_message = Some(message);
        self.ui_state.status_message_time = Some(std::time::Instant::now());
    }

    pub(crate) fn clear_status_message(&mut self) {
        self.ui_state.status_message = None;
        self.ui_state.status_message_time = None;
    }

    /// Check and clear status message if timeout exceeded
    pub fn check_status_message_timeout(&mut self) {
        use crate::tui::constants::STATUS_MESSAGE_TIMEOUT_SECS;
        if let Some(time) = self.ui_state.status_message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.ui_state.status_message = None;
                self.ui_state.status_message_time = None;
            }
        }
    }
}

/// Text-field edits the search bar performs on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    Insert(char),
    DeleteBack,
    Clear,
}
