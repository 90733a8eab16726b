//! Application table rendering

use crate::argocd::Application;
use crate::tui::constants::SCROLL_BUFFER;
use crate::tui::focus::Surface;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{
    create_themed_block, panel_title, render_empty_state, update_scroll_offset,
};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

/// Render the application table, one row per application coloured by health
pub fn render_app_table(
    f: &mut Frame,
    area: Rect,
    apps: &[Application],
    surface: &mut Surface,
    focused: bool,
    filter: &str,
    theme: &Theme,
) {
    let title = panel_title("Applications", apps.len(), filter);

    if apps.is_empty() {
        let message = if filter.is_empty() {
            "No applications"
        } else {
            "No applications match the filter"
        };
        render_empty_state(f, area, &title, message, "Press r to refresh", focused, theme);
        return;
    }

    let visible_height = (area.height as usize).saturating_sub(2);
    let selected = surface.selected().unwrap_or(0);
    update_scroll_offset(
        selected,
        visible_height,
        &mut surface.scroll_offset,
        SCROLL_BUFFER,
    );

    let rows: Vec<Row> = apps
        .iter()
        .enumerate()
        .skip(surface.scroll_offset)
        .take(visible_height)
        .map(|(idx, app)| {
            let row = Row::new(vec![Cell::from(app.name.as_str())]);
            if idx == selected {
                row.style(theme.table_selected_style())
            } else {
                row.style(theme.health_style(app.health))
            }
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .block(create_themed_block(&title, focused, theme));
    f.render_widget(table, area);
}
