//! Common helper functions for view rendering

use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Update scroll offset based on selected index and visible area
///
/// Keeps `scroll_buffer` rows visible around the selection where possible.
pub fn update_scroll_offset(
    selected_index: usize,
    visible_height: usize,
    scroll_offset: &mut usize,
    scroll_buffer: usize,
) {
    if visible_height == 0 {
        *scroll_offset = selected_index;
        return;
    }
    // Small viewports can't honour the buffer
    let scroll_buffer = scroll_buffer.min(visible_height.saturating_sub(1) / 2);

    if selected_index >= *scroll_offset + visible_height.saturating_sub(scroll_buffer) {
        *scroll_offset =
            selected_index.saturating_sub(visible_height.saturating_sub(scroll_buffer + 1));
    }
    if selected_index < *scroll_offset + scroll_buffer {
        *scroll_offset = selected_index.saturating_sub(scroll_buffer);
    }
}

/// Render an empty state message inside a themed block
pub fn render_empty_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    instructions: &str,
    focused: bool,
    theme: &Theme,
) {
    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from(instructions),
    ];
    let paragraph = Paragraph::new(text)
        .block(create_themed_block(title, focused, theme))
        .style(theme.base_style().fg(theme.header_label));
    f.render_widget(paragraph, area);
}

/// Truncate a message to a maximum number of characters
///
/// If the message exceeds max_len, truncates and adds "...".
pub fn truncate_message(message: &str, max_len: usize) -> String {
    if message.chars().count() > max_len {
        let kept: String = message.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        message.to_string()
    }
}

/// Create a bordered block; the focused surface gets the focus colour
pub fn create_themed_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .style(theme.base_style())
}

/// Panel title with item count and active filter, e.g. `Applications (3) [/web]`
pub fn panel_title(name: &str, count: usize, filter: &str) -> String {
    if filter.is_empty() {
        format!(" {} ({}) ", name, count)
    } else {
        format!(" {} ({}) [/{}] ", name, count, filter)
    }
}

/// Centered rectangle taking the given percentages of `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_follows_selection_down() {
        let mut offset = 0;
        update_scroll_offset(9, 10, &mut offset, 2);
        assert_eq!(offset, 2);
        update_scroll_offset(3, 10, &mut offset, 2);
        assert_eq!(offset, 1);
        update_scroll_offset(0, 10, &mut offset, 2);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_offset_tiny_viewport() {
        let mut offset = 0;
        update_scroll_offset(5, 1, &mut offset, 2);
        assert_eq!(offset, 5);
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 10), "short");
        assert_eq!(truncate_message("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate_message("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_panel_title() {
        assert_eq!(panel_title("Applications", 3, ""), " Applications (3) ");
        assert_eq!(panel_title("Resources", 1, "nginx"), " Resources (1) [/nginx] ");
    }
}
