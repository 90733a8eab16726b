//! Help overlay rendering

use crate::tui::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT, SCROLL_BUFFER};
use crate::tui::focus::Surface;
use crate::tui::keybindings::Context;
use crate::tui::registry::HelpEntry;
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{centered_rect, create_themed_block, panel_title, update_scroll_offset};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

/// One help row as plain text: marker, context, key and description
pub fn help_line_text(entry: &HelpEntry, last_context: Option<Context>) -> String {
    let marker = if Some(entry.context) == last_context {
        '*'
    } else {
        ' '
    };
    format!(
        "{} {:<11} {:<10} {}",
        marker,
        entry.context.as_str(),
        entry.keystroke.to_string(),
        entry.description
    )
}

/// Render the help listing as a popup over `area`
///
/// The context of the most recently used command is marked with `*`.
pub fn render_help(
    f: &mut Frame,
    area: Rect,
    entries: &[HelpEntry],
    surface: &mut Surface,
    focused: bool,
    filter: &str,
    last_context: Option<Context>,
    theme: &Theme,
) {
    let popup = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    f.render_widget(Clear, popup);

    let title = panel_title("Help", entries.len(), filter);
    let visible_height = (popup.height as usize).saturating_sub(3);
    let selected = surface.selected().unwrap_or(0);
    update_scroll_offset(
        selected,
        visible_height,
        &mut surface.scroll_offset,
        SCROLL_BUFFER,
    );

    let mut lines = vec![Line::from(Span::styled(
        format!("  {:<11} {:<10} {}", "CONTEXT", "KEY", "DESCRIPTION"),
        theme.table_header_style(),
    ))];

    for (idx, entry) in entries
        .iter()
        .enumerate()
        .skip(surface.scroll_offset)
        .take(visible_height)
    {
        let style = if idx == selected {
            theme.table_selected_style()
        } else if Some(entry.context) == last_context {
            Style::default()
                .fg(theme.footer_key)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        lines.push(Line::from(Span::styled(
            help_line_text(entry, last_context),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).block(create_themed_block(&title, focused, theme));
    f.render_widget(paragraph, popup);
}
