//! Landing page color themes.
//!
//! The same palette styles the ratatui view and colors plain CLI output.

use crossterm::style::{style, Color as CtColor, Stylize};
use ratatui::style::{Color, Modifier, Style};

/// Palette for the landing view and CLI messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Body text
    pub text_primary: Color,
    /// Muted text: navbar items, stats, key hints
    pub text_secondary: Color,
    /// Accent color for headings, the brand and keybindings
    pub accent: Color,
    /// Foreground of highlighted editor text
    pub highlight_fg: Color,
    /// Background of highlighted editor text
    pub highlight_bg: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::synapsis()
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const NAMES: &'static [&'static str] = &["synapsis", "classic", "ocean"];

    /// Synapsis theme - blue brand on light gray text.
    pub fn synapsis() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightBlue,
            highlight_fg: Color::Blue,
            highlight_bg: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// White text with a yellow marker-pen highlight.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            highlight_fg: Color::Black,
            highlight_bg: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Look a theme up by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "synapsis" => Some(Self::synapsis()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Body text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (headings, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted span in the editor.
    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    /// Style for the blinking caret.
    pub fn caret_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// `text` in the error color, for terminal output.
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// Color codes are skipped when `NO_COLOR` is set to a non-empty value.
fn ansi_enabled() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

fn paint(color: Color, text: &str) -> String {
    if ansi_enabled() {
        style(text).with(CtColor::from(color)).to_string()
    } else {
        text.to_string()
    }
}
