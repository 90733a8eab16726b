//! Resource table rendering

use crate::argocd::ResourceNode;
use crate::tui::constants::{RESOURCE_COLUMNS, SCROLL_BUFFER};
use crate::tui::focus::Surface;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{
    create_themed_block, panel_title, render_empty_state, truncate_message, update_scroll_offset,
};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row, Table},
};

const COLUMN_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(20),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
    Constraint::Percentage(7),
    Constraint::Percentage(11),
    Constraint::Percentage(28),
    Constraint::Percentage(10),
];

/// Render the resource tree of the selected application
///
/// The column header is the table's row 0; data rows follow it.
pub fn render_resource_table(
    f: &mut Frame,
    area: Rect,
    app_name: Option<&str>,
    nodes: &[ResourceNode],
    surface: &mut Surface,
    focused: bool,
    filter: &str,
    theme: &Theme,
) {
    let name = match app_name {
        Some(app) => format!("Resources: {}", app),
        None => "Resources".to_string(),
    };
    let title = panel_title(&name, nodes.len(), filter);

    if nodes.is_empty() {
        let (message, instructions) = match (app_name, filter.is_empty()) {
            (None, _) => ("No application selected", "Select an application on the left"),
            (Some(_), true) => ("No resources", "This application has no managed resources"),
            (Some(_), false) => ("No resources match the filter", "Press Esc to clear it"),
        };
        render_empty_state(f, area, &title, message, instructions, focused, theme);
        return;
    }

    // Borders and the header row
    let visible_height = (area.height as usize).saturating_sub(3);
    let selected = surface.selected().unwrap_or(0);
    update_scroll_offset(
        selected,
        visible_height,
        &mut surface.scroll_offset,
        SCROLL_BUFFER,
    );

    let header = Row::new(RESOURCE_COLUMNS.iter().copied()).style(theme.table_header_style());

    let rows: Vec<Row> = nodes
        .iter()
        .enumerate()
        .skip(surface.scroll_offset)
        .take(visible_height)
        .map(|(idx, node)| {
            let is_selected = idx == selected;
            let health = node.health_status();
            let health_style = if is_selected {
                theme.table_selected_style()
            } else {
                theme.health_style(health)
            };

            let row = Row::new(vec![
                Cell::from(node.name.clone()),
                Cell::from(node.kind.clone()),
                Cell::from(node.namespace.clone()),
                Cell::from(node.version.clone()),
                Cell::from(node.resource_version.clone()),
                Cell::from(truncate_message(&node.images_display(), 80)),
                Cell::from(health.as_str()).style(health_style),
            ]);
            if is_selected {
                row.style(theme.table_selected_style())
            } else {
                row.style(Style::default().fg(theme.foreground))
            }
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(create_themed_block(&title, focused, theme));
    f.render_widget(table, area);
}
