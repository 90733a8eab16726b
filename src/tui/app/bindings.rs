//! Default key bindings
//!
//! Every binding the dashboard ships with is registered here. Navigation
//! handlers are shared by the three navigable contexts and pick their
//! surface from the context they are invoked in.

use super::core::App;
use super::state::AppCommand;
use crate::tui::filter::FilterTarget;
use crate::tui::focus::{FocusTarget, Navigation};
use crate::tui::keybindings::{Context, Key, Keystroke};
use crate::tui::registry::{CommandRegistry, EventResult, RegistryError};

/// Contexts whose surface moves with the navigation keys
const NAVIGABLE: [Context; 3] = [Context::AppTable, Context::MainPage, Context::Help];

/// Build the registry with every default binding
pub fn default_registry() -> Result<CommandRegistry<App>, RegistryError> {
    let mut registry = CommandRegistry::new();
    register_global(&mut registry)?;
    for context in NAVIGABLE {
        register_navigation(&mut registry, context)?;
    }
    register_app_table(&mut registry)?;
    register_main_page(&mut registry)?;
    register_help(&mut registry)?;
    register_command_bar(&mut registry)?;
    tracing::debug!("Registered {} key bindings", registry.len());
    Ok(registry)
}

fn register_global(registry: &mut CommandRegistry<App>) -> Result<(), RegistryError> {
    registry.register('q', Context::Global, "Quit", quit)?;
    registry.register(Keystroke::Ctrl('c'), Context::Global, "Quit", quit)?;
    registry.register('?', Context::Global, "Toggle help", |app: &mut App, _| {
        app.toggle_help()
    })?;
    registry.register('/', Context::Global, "Search", |app: &mut App, _| {
        app.open_search()
    })?;
    registry.register(Key::Tab, Context::Global, "Switch panel", switch_panel)?;
    registry.register(Key::BackTab, Context::Global, "Switch panel", switch_panel)?;
    registry.register(
        'r',
        Context::Global,
        "Refresh applications",
        |app: &mut App, _| {
            app.request(AppCommand::RefreshApplications);
            EventResult::Consumed
        },
    )?;
    Ok(())
}

fn register_navigation(
    registry: &mut CommandRegistry<App>,
    context: Context,
) -> Result<(), RegistryError> {
    let bindings: [(Keystroke, &str, Navigation); 12] = [
        (Keystroke::Char('j'), "Down", Navigation::Scroll(1)),
        (Keystroke::Key(Key::Down), "Down", Navigation::Scroll(1)),
        (Keystroke::Char('k'), "Up", Navigation::Scroll(-1)),
        (Keystroke::Key(Key::Up), "Up", Navigation::Scroll(-1)),
        (Keystroke::Char('g'), "Top", Navigation::ScrollTo(0)),
        (Keystroke::Key(Key::Home), "Top", Navigation::ScrollTo(0)),
        (Keystroke::Char('G'), "Bottom", Navigation::ScrollTo(-1)),
        (Keystroke::Key(Key::End), "Bottom", Navigation::ScrollTo(-1)),
        (Keystroke::Key(Key::PageDown), "Page down", Navigation::Page(1)),
        (Keystroke::Ctrl('d'), "Page down", Navigation::Page(1)),
        (Keystroke::Key(Key::PageUp), "Page up", Navigation::Page(-1)),
        (Keystroke::Ctrl('u'), "Page up", Navigation::Page(-1)),
    ];

    for (keystroke, description, nav) in bindings {
        registry.register(keystroke, context, description, move |app: &mut App, ctx| {
            app.navigate(ctx, nav)
        })?;
    }
    Ok(())
}

fn register_app_table(registry: &mut CommandRegistry<App>) -> Result<(), RegistryError> {
    registry.register(
        Key::Enter,
        Context::AppTable,
        "Open application",
        |app: &mut App, _| {
            let Some(name) = app.highlighted_app_name() else {
                return EventResult::Ignored;
            };
            app.request(AppCommand::LoadResources(name));
            app.focus.focus_table(FocusTarget::MainTable);
            EventResult::Consumed
        },
    )?;
    registry.register(Key::Esc, Context::AppTable, "Clear filter", clear_filter)?;
    Ok(())
}

fn register_main_page(registry: &mut CommandRegistry<App>) -> Result<(), RegistryError> {
    registry.register(Key::Esc, Context::MainPage, "Clear filter", clear_filter)?;
    Ok(())
}

fn register_help(registry: &mut CommandRegistry<App>) -> Result<(), RegistryError> {
    registry.register(
        Key::Esc,
        Context::Help,
        "Clear filter / close",
        |app: &mut App, ctx| {
            if clear_filter(app, ctx).is_consumed() {
                return EventResult::Consumed;
            }
            app.toggle_help()
        },
    )?;
    Ok(())
}

fn register_command_bar(registry: &mut CommandRegistry<App>) -> Result<(), RegistryError> {
    registry.register(Key::Enter, Context::CommandBar, "Apply filter", |app: &mut App, _| {
        app.submit_search()
    })?;
    registry.register(Key::Esc, Context::CommandBar, "Cancel search", |app: &mut App, _| {
        app.cancel_search()
    })?;
    Ok(())
}

fn quit(app: &mut App, _: Context) -> EventResult {
    app.quit();
    EventResult::Consumed
}

fn switch_panel(app: &mut App, _: Context) -> EventResult {
    app.toggle_tables()
}

/// Esc on a table: clear its filter if one is active, else let the key through
fn clear_filter(app: &mut App, ctx: Context) -> EventResult {
    match App::target_for(ctx) {
        Some(target) if app.clear_filter(target) => {
            if target == FilterTarget::AppTable {
                app.view_state.apps.reset();
            }
            EventResult::Consumed
        }
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_no_conflicts() {
        let registry = default_registry().unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_navigation_bound_in_every_navigable_context() {
        let registry = default_registry().unwrap();
        for context in NAVIGABLE {
            for key in [
                Keystroke::Char('j'),
                Keystroke::Char('k'),
                Keystroke::Char('g'),
                Keystroke::Char('G'),
                Keystroke::Key(Key::PageDown),
            ] {
                let command = registry.resolve_exact(context, key);
                assert!(command.is_some(), "{} unbound in {}", key, context);
            }
        }
    }

    #[test]
    fn test_command_bar_has_no_printable_bindings() {
        let registry = default_registry().unwrap();
        for c in ['q', '?', '/', 'r', 'j'] {
            assert!(
                registry
                    .resolve_exact(Context::CommandBar, Keystroke::Char(c))
                    .is_none()
            );
        }
    }

    #[test]
    fn test_global_bindings_reach_tables() {
        let registry = default_registry().unwrap();
        let quit = registry
            .resolve(Context::MainPage, Keystroke::Char('q'))
            .unwrap();
        assert_eq!(quit.context, Context::Global);
        assert_eq!(quit.description, "Quit");
    }
}
