//! Event dispatch
//!
//! Every keystroke and selection change goes through [`Dispatcher::dispatch`].
//! Events are processed strictly in arrival order; a selection change raised
//! while handling a keystroke is queued and handled before `dispatch` returns.
//! Remote loads are awaited inline, so nothing else runs while one is in
//! flight.

use crate::tui::app::{App, AppCommand, SearchEdit, default_registry};
use crate::tui::focus::FocusTarget;
use crate::tui::keybindings::{Context, Key, Keystroke};
use crate::tui::registry::{CommandRegistry, EventResult, RegistryError};
use std::collections::VecDeque;

/// Input to the dispatch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A keystroke delivered to `target`
    Key { target: FocusTarget, key: Keystroke },
    /// The highlighted application changed
    SelectionChanged { app: String },
}

impl UiEvent {
    /// Keystroke delivered to whatever currently holds focus
    pub fn key(app: &App, key: impl Into<Keystroke>) -> Self {
        UiEvent::Key {
            target: app.focus(),
            key: key.into(),
        }
    }
}

/// Routes events to the registry and runs the loads handlers ask for
pub struct Dispatcher {
    registry: CommandRegistry<App>,
    queue: VecDeque<UiEvent>,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry<App>) -> Self {
        Self {
            registry,
            queue: VecDeque::new(),
        }
    }

    pub fn with_default_bindings() -> Result<Self, RegistryError> {
        Ok(Self::new(default_registry()?))
    }

    pub fn registry(&self) -> &CommandRegistry<App> {
        &self.registry
    }

    /// Initial load: help listing, applications, then the first application's resources
    pub async fn bootstrap(&mut self, app: &mut App) {
        app.set_help_entries(self.registry.entries());
        self.refresh_applications(app).await;
        if let Some(name) = app.highlighted_app_name() {
            self.dispatch(app, UiEvent::SelectionChanged { app: name })
                .await;
        }
    }

    /// Handle one event and everything it triggers
    ///
    /// The returned result is that of the event passed in; follow-up
    /// selection changes are handled but not reported.
    pub async fn dispatch(&mut self, app: &mut App, event: UiEvent) -> EventResult {
        let result = self.handle(app, event).await;
        while let Some(next) = self.queue.pop_front() {
            self.handle(app, next).await;
        }
        result
    }

    async fn handle(&mut self, app: &mut App, event: UiEvent) -> EventResult {
        match event {
            UiEvent::Key { target, key } => self.handle_key(app, target, key).await,
            UiEvent::SelectionChanged { app: name } => {
                Self::load_resources(app, &name).await;
                EventResult::Consumed
            }
        }
    }

    async fn handle_key(
        &mut self,
        app: &mut App,
        target: FocusTarget,
        key: Keystroke,
    ) -> EventResult {
        // Any key dismisses the current status message
        app.clear_status_message();

        // While typing, keys aimed elsewhere pass through untouched
        if app.focus() == FocusTarget::CommandBar && target != FocusTarget::CommandBar {
            tracing::trace!("{} passed through while searching", key);
            return EventResult::Ignored;
        }

        let before = app.highlighted_app_name();
        let context = target.context();

        let resolved = if context == Context::CommandBar {
            self.registry.invoke_exact(context, key, app)
        } else {
            self.registry.invoke(context, key, app)
        };
        app.ui_state.last_context = self.registry.last_context();

        let result = match resolved {
            Some(EventResult::Consumed) => EventResult::Consumed,
            _ if target == FocusTarget::CommandBar => Self::default_edit(app, key),
            _ => EventResult::Ignored,
        };

        self.run_pending(app).await;

        let after = app.highlighted_app_name();
        if after != before {
            match after {
                Some(name) => {
                    tracing::debug!("Selection changed to {}", name);
                    self.queue.push_back(UiEvent::SelectionChanged { app: name });
                }
                None => {
                    tracing::debug!("No application highlighted");
                    app.selection_cleared();
                }
            }
        }

        result
    }

    /// Text-field behaviour of the search bar for keys nothing is bound to
    fn default_edit(app: &mut App, key: Keystroke) -> EventResult {
        match key {
            Keystroke::Char(c) => app.edit_search(SearchEdit::Insert(c)),
            Keystroke::Key(Key::Backspace) => app.edit_search(SearchEdit::DeleteBack),
            Keystroke::Ctrl('u') => app.edit_search(SearchEdit::Clear),
            _ => EventResult::Ignored,
        }
    }

    async fn run_pending(&mut self, app: &mut App) {
        while let Some(command) = app.take_pending() {
            match command {
                AppCommand::RefreshApplications => self.refresh_applications(app).await,
                AppCommand::LoadResources(name) => Self::load_resources(app, &name).await,
            }
        }
    }

    async fn refresh_applications(&mut self, app: &mut App) {
        let previous = app.highlighted_app_name();
        match app.store.load_applications().await {
            Ok(count) => {
                app.applications_loaded(previous.as_deref());
                app.set_status_message((format!("Loaded {} applications", count), false));
            }
            Err(e) => {
                app.set_status_message((format!("Failed to load applications: {}", e), true));
            }
        }
    }

    async fn load_resources(app: &mut App, name: &str) {
        match app.store.load_resources(name).await {
            Ok(_) => app.resources_loaded(),
            Err(e) => {
                app.set_status_message((
                    format!("Failed to load resources for {}: {}", name, e),
                    true,
                ));
            }
        }
    }
}
