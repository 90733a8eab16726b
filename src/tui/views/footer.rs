//! Footer view rendering
//!
//! The footer doubles as the search bar: while it is open it shows the typed
//! text, otherwise a pending status message, otherwise the key hints of the
//! focused context.

use crate::tui::keybindings::{Hint, hints_to_segments};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::truncate_message;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// What the footer should show this frame
pub enum FooterContent<'a> {
    Search { buffer: &'a str, target: &'a str },
    Status { message: &'a str, is_error: bool },
    Hints(&'a [Hint]),
}

pub fn render_footer(f: &mut Frame, area: Rect, content: FooterContent, theme: &Theme) {
    let line = match content {
        FooterContent::Search { buffer, target } => Line::from(vec![
            Span::styled("/", theme.filter_prompt_style()),
            Span::raw(buffer.to_string()),
            Span::raw("_"),
            Span::styled(
                format!("  [filter {}]", target),
                ratatui::style::Style::default().fg(theme.header_label),
            ),
        ]),
        FooterContent::Status { message, is_error } => {
            let width = (area.width as usize).saturating_sub(2);
            Line::from(Span::styled(
                truncate_message(message, width),
                theme.status_style(is_error),
            ))
        }
        FooterContent::Hints(hints) => hints_line(hints, theme),
    };

    let footer = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

fn hints_line<'a>(hints: &[Hint], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (idx, (key, label, color)) in hints_to_segments(hints, theme.footer_key)
        .into_iter()
        .enumerate()
    {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(key, theme.footer_key_style().fg(color)));
        spans.push(Span::raw(format!(" {}", label)));
    }
    Line::from(spans)
}
