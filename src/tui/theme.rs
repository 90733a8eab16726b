//! Theme and styling definitions
//!
//! All colours the views use live here. A theme is built from the `colors`
//! section of the config; any value that fails to parse keeps its default.

use crate::argocd::HealthStatus;
use crate::config::{ColorConfig, colors};
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Base colors
    pub text: Color,
    pub foreground: Color,
    pub background: Color,
    pub border: Color,
    pub border_focused: Color,

    // Table colors
    pub table_header: Color,
    pub table_selected_fg: Color,
    pub table_selected_bg: Color,

    // Health colors
    pub health_healthy: Color,
    pub health_degraded: Color,
    pub health_progressing: Color,
    pub health_missing: Color,
    pub health_unknown: Color,

    // Header / footer
    pub header_label: Color,
    pub header_value: Color,
    pub filter_prompt: Color,
    pub footer_key: Color,
    pub status_error: Color,
    pub status_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            foreground: Color::Rgb(245, 245, 245),
            background: Color::Reset,
            border: Color::Rgb(47, 79, 79),
            border_focused: Color::Rgb(135, 206, 235),

            table_header: Color::Gray,
            table_selected_fg: Color::Black,
            table_selected_bg: Color::Rgb(135, 206, 235),

            health_healthy: Color::LightGreen,
            health_degraded: Color::Red,
            health_progressing: Color::LightBlue,
            health_missing: Color::LightYellow,
            health_unknown: Color::DarkGray,

            header_label: Color::Gray,
            header_value: Color::Yellow,
            filter_prompt: Color::Yellow,
            footer_key: Color::Yellow,
            status_error: Color::Red,
            status_info: Color::Green,
        }
    }
}

impl Theme {
    /// Build a theme from configured colours
    pub fn from_colors(config: &ColorConfig) -> Self {
        let base = Self::default();
        let selected = colors::parse_or(&config.selected, base.table_selected_bg);
        let degraded = colors::parse_or(&config.degraded, base.health_degraded);

        Self {
            text: colors::parse_or(&config.text, base.text),
            foreground: colors::parse_or(&config.foreground, base.foreground),
            background: colors::parse_or(&config.background, base.background),
            border: colors::parse_or(&config.border, base.border),
            border_focused: selected,

            table_header: colors::parse_or(&config.header, base.table_header),
            table_selected_bg: selected,
            table_selected_fg: base.table_selected_fg,

            health_healthy: colors::parse_or(&config.healthy, base.health_healthy),
            health_degraded: degraded,
            health_progressing: colors::parse_or(&config.progressing, base.health_progressing),
            health_missing: colors::parse_or(&config.missing, base.health_missing),
            health_unknown: colors::parse_or(&config.unknown, base.health_unknown),

            header_label: colors::parse_or(&config.header, base.header_label),
            status_error: degraded,
            ..base
        }
    }

    pub fn health_color(&self, health: HealthStatus) -> Color {
        match health {
            HealthStatus::Healthy => self.health_healthy,
            HealthStatus::Degraded => self.health_degraded,
            HealthStatus::Progressing => self.health_progressing,
            HealthStatus::Missing => self.health_missing,
            HealthStatus::Unknown => self.health_unknown,
        }
    }

    pub fn health_style(&self, health: HealthStatus) -> Style {
        Style::default().fg(self.health_color(health))
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.table_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected_style(&self) -> Style {
        Style::default()
            .fg(self.table_selected_fg)
            .bg(self.table_selected_bg)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default()
            .fg(self.footer_key)
            .add_modifier(Modifier::BOLD)
    }

    pub fn filter_prompt_style(&self) -> Style {
        Style::default()
            .fg(self.filter_prompt)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self, is_error: bool) -> Style {
        Style::default()
            .fg(if is_error {
                self.status_error
            } else {
                self.status_info
            })
            .add_modifier(Modifier::BOLD)
    }
}
