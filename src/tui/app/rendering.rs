//! Rendering logic for the application
//!
//! Lays out the header, the two tables, the footer and the help popup, and
//! hands each view the slice of state it draws.

use super::core::App;
use crate::tui::constants::{
    APP_TABLE_WIDTH_PERCENT, FOOTER_HEIGHT, HEADER_HEIGHT, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH,
};
use crate::tui::filter::FilterTarget;
use crate::tui::focus::FocusTarget;
use crate::tui::keybindings::Context;
use crate::tui::registry::CommandRegistry;
use crate::tui::views::*;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

impl App {
    /// Main render entry point
    ///
    /// Footer hints come from `registry` so they always match the bindings
    /// that are actually live in the focused context.
    pub fn render(&mut self, f: &mut Frame, registry: &CommandRegistry<App>) {
        let area = f.area();

        if area.height < MIN_TERMINAL_HEIGHT || area.width < MIN_TERMINAL_WIDTH {
            let error_lines = vec![
                Line::from(""),
                Line::from(format!(
                    "Terminal too small! Need at least {}x{} (current: {}x{})",
                    MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT, area.width, area.height
                )),
                Line::from("Please resize your terminal window."),
            ];
            let error_block = Block::default().title("Error").borders(Borders::ALL);
            f.render_widget(Paragraph::new(error_lines).block(error_block), area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        // Borders and the resource header row
        self.view_state.page_size = (chunks[1].height as usize).saturating_sub(3).max(1);

        self.render_header_panel(f, chunks[0]);
        self.render_body(f, chunks[1]);
        self.render_footer_panel(f, chunks[2], registry);

        if self.focus.is_open(FocusTarget::HelpOverlay) {
            let focused = self.focus.current() == FocusTarget::HelpOverlay;
            render_help(
                f,
                area,
                &self.view_state.visible_help,
                &mut self.view_state.help,
                focused,
                self.view_state.filters.get(FilterTarget::Help),
                self.ui_state.last_context,
                &self.theme,
            );
        }
    }

    fn render_header_panel(&self, f: &mut Frame, area: Rect) {
        let filters = [FilterTarget::AppTable, FilterTarget::MainTable]
            .into_iter()
            .filter(|target| self.view_state.filters.is_active(*target))
            .map(|target| (target.label(), self.view_state.filters.get(target)))
            .collect();

        let info = HeaderInfo {
            server: &self.config.server.url,
            app_count: self.store.applications().len(),
            selected_app: self.store.selected_app(),
            resource_count: self.store.resources().len(),
            filters,
            last_refresh: self.store.last_refresh(),
        };
        render_header(f, area, &info, &self.theme);
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(APP_TABLE_WIDTH_PERCENT),
                Constraint::Percentage(100 - APP_TABLE_WIDTH_PERCENT),
            ])
            .split(area);

        // Tables keep their border highlight while an overlay sits on top
        let base = self.focus.base();

        render_app_table(
            f,
            columns[0],
            &self.view_state.visible_apps,
            &mut self.view_state.apps,
            base == FocusTarget::AppTable,
            self.view_state.filters.get(FilterTarget::AppTable),
            &self.theme,
        );
        render_resource_table(
            f,
            columns[1],
            self.store.selected_app(),
            &self.view_state.visible_resources,
            &mut self.view_state.resources,
            base == FocusTarget::MainTable,
            self.view_state.filters.get(FilterTarget::MainTable),
            &self.theme,
        );
    }

    fn render_footer_panel(&self, f: &mut Frame, area: Rect, registry: &CommandRegistry<App>) {
        let context = self.focus.context();
        let hints = registry.hints(context, context != Context::CommandBar);

        let content = if let Some(search) = &self.ui_state.search {
            FooterContent::Search {
                buffer: &search.buffer,
                target: search.target.label(),
            }
        } else if let Some((message, is_error)) = &self.ui_state.status_message {
            FooterContent::Status {
                message,
                is_error: *is_error,
            }
        } else {
            FooterContent::Hints(&hints)
        };
        render_footer(f, area, content, &self.theme);
    }
}
