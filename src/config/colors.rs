//! Colour parsing for the `colors` section of the config file

use super::schema::ColorConfig;
use anyhow::Result;
use ratatui::style::Color;

/// Every colour key paired with its configured value, in file order
pub fn entries(colors: &ColorConfig) -> [(&'static str, &str); 11] {
    [
        ("text", colors.text.as_str()),
        ("border", colors.border.as_str()),
        ("header", colors.header.as_str()),
        ("foreground", colors.foreground.as_str()),
        ("selected", colors.selected.as_str()),
        ("background", colors.background.as_str()),
        ("progressing", colors.progressing.as_str()),
        ("missing", colors.missing.as_str()),
        ("healthy", colors.healthy.as_str()),
        ("degraded", colors.degraded.as_str()),
        ("unknown", colors.unknown.as_str()),
    ]
}

/// Mutable slot for a colour key, used by `config set colors.<key>`
pub fn slot_mut<'a>(colors: &'a mut ColorConfig, key: &str) -> Option<&'a mut String> {
    match key {
        "text" => Some(&mut colors.text),
        "border" => Some(&mut colors.border),
        "header" => Some(&mut colors.header),
        "foreground" => Some(&mut colors.foreground),
        "selected" => Some(&mut colors.selected),
        "background" => Some(&mut colors.background),
        "progressing" => Some(&mut colors.progressing),
        "missing" => Some(&mut colors.missing),
        "healthy" => Some(&mut colors.healthy),
        "degraded" => Some(&mut colors.degraded),
        "unknown" => Some(&mut colors.unknown),
        _ => None,
    }
}

/// Parse a colour string
///
/// Accepts `default` (terminal colour), the 16 terminal colour names, hex
/// (`#rrggbb`, `#rgb`, with or without `#`) and any CSS colour name.
pub fn parse_color(color_str: &str) -> Result<Color> {
    let color_str = color_str.trim().to_lowercase();

    if color_str == "default" || color_str == "reset" {
        return Ok(Color::Reset);
    }

    // Terminal palette names map to the terminal's own colours
    match color_str.as_str() {
        "black" => return Ok(Color::Black),
        "red" => return Ok(Color::Red),
        "green" => return Ok(Color::Green),
        "yellow" => return Ok(Color::Yellow),
        "blue" => return Ok(Color::Blue),
        "magenta" => return Ok(Color::Magenta),
        "cyan" => return Ok(Color::Cyan),
        "white" => return Ok(Color::White),
        "gray" | "grey" => return Ok(Color::Gray),
        "darkgray" | "darkgrey" => return Ok(Color::DarkGray),
        "lightred" => return Ok(Color::LightRed),
        "lightgreen" => return Ok(Color::LightGreen),
        "lightyellow" => return Ok(Color::LightYellow),
        "lightblue" => return Ok(Color::LightBlue),
        "lightmagenta" => return Ok(Color::LightMagenta),
        "lightcyan" => return Ok(Color::LightCyan),
        _ => {}
    }

    // Bare hex without '#'
    let candidate = if (color_str.len() == 6 || color_str.len() == 3)
        && color_str.chars().all(|c| c.is_ascii_hexdigit())
    {
        format!("#{}", color_str)
    } else {
        color_str
    };

    let parsed = csscolorparser::parse(&candidate)
        .map_err(|e| anyhow::anyhow!("Unknown color '{}': {}", candidate, e))?;
    let [r, g, b, _] = parsed.to_rgba8();
    Ok(Color::Rgb(r, g, b))
}

/// Parse a colour, falling back to `fallback` when the value is invalid
pub fn parse_or(color_str: &str, fallback: Color) -> Color {
    match parse_color(color_str) {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!("{}, using {:?}", e, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red").unwrap(), Color::Red);
        assert_eq!(parse_color("Green").unwrap(), Color::Green);
        assert_eq!(parse_color("default").unwrap(), Color::Reset);
    }

    #[test]
    fn test_parse_css_names() {
        assert_eq!(parse_color("skyblue").unwrap(), Color::Rgb(135, 206, 235));
        assert_eq!(parse_color("darkslategray").unwrap(), Color::Rgb(47, 79, 79));
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#f00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("00ff00").unwrap(), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        assert!(parse_color("definitely-not-a-colour").is_err());
        assert_eq!(parse_or("#zzzzzz", Color::Blue), Color::Blue);
    }

    #[test]
    fn test_slot_mut_covers_entries() {
        let mut colors = ColorConfig::default();
        let keys: Vec<&str> = entries(&colors).iter().map(|(k, _)| *k).collect();
        for key in keys {
            assert!(slot_mut(&mut colors, key).is_some(), "missing slot {}", key);
        }
        assert!(slot_mut(&mut colors, "nope").is_none());
    }
}
