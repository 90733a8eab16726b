//! Header view rendering

use crate::tui::theme::Theme;
use crate::tui::views::helpers::create_themed_block;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Everything the header shows
#[derive(Debug, Clone, Default)]
pub struct HeaderInfo<'a> {
    pub server: &'a str,
    pub app_count: usize,
    pub selected_app: Option<&'a str>,
    pub resource_count: usize,
    /// Active filters as (surface label, filter text)
    pub filters: Vec<(&'static str, &'a str)>,
    pub last_refresh: Option<chrono::DateTime<chrono::Local>>,
}

fn field<'a>(label: &'a str, value: String, theme: &Theme) -> [Span<'a>; 2] {
    [
        Span::styled(format!("{}: ", label), Style::default().fg(theme.header_label)),
        Span::styled(value, Style::default().fg(theme.header_value)),
    ]
}

/// Render the header panel
pub fn render_header(f: &mut Frame, area: Rect, info: &HeaderInfo, theme: &Theme) {
    let refreshed = info
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let mut first = Vec::new();
    first.extend(field("Server", info.server.to_string(), theme));
    first.push(Span::raw("   "));
    first.extend(field("Applications", info.app_count.to_string(), theme));
    first.push(Span::raw("   "));
    first.extend(field("Refreshed", refreshed, theme));

    let mut second = Vec::new();
    second.extend(field(
        "Application",
        info.selected_app.unwrap_or("-").to_string(),
        theme,
    ));
    second.push(Span::raw("   "));
    second.extend(field("Resources", info.resource_count.to_string(), theme));
    if !info.filters.is_empty() {
        let filters = info
            .filters
            .iter()
            .map(|(label, text)| format!("{}=/{}", label, text))
            .collect::<Vec<_>>()
            .join(" ");
        second.push(Span::raw("   "));
        second.push(Span::styled("Filters: ", Style::default().fg(theme.header_label)));
        second.push(Span::styled(filters, theme.filter_prompt_style()));
    }

    let paragraph = Paragraph::new(vec![Line::from(first), Line::from(second)])
        .block(create_themed_block(" argocd-tui ", false, theme));
    f.render_widget(paragraph, area);
}
