//! Theming and color definitions.
//!
//! A [`Theme`] is an explicit value handed to every render call. It maps
//! the renderer's [`StyleTag`]s to terminal styles using ANSI colors that
//! adapt to the terminal's palette.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;
use crate::markdown::StyleTag;

/// Theme configuration for the entire application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Heading level 1 style
    pub h1: Style,
    /// Heading level 2 style
    pub h2: Style,
    /// Heading level 3 style
    pub h3: Style,
    /// Heading level 4+ style
    pub h4: Style,
    /// Code block style
    pub code: Style,
    /// Raw fence line in the editor
    pub fence: Style,
    /// Inline code style
    pub inline_code: Style,
    /// Emphasis (italic) style
    pub emphasis: Style,
    /// Strong (bold) style
    pub strong: Style,
    /// List bullet/number style
    pub list_marker: Style,
    /// Horizontal rule style
    pub hr: Style,
    /// Header line of the viewer
    pub title: Style,
    /// Status bar background
    pub status_bg: Color,
    /// Status bar foreground
    pub status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            h4: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Indexed(245)),
            fence: Style::default()
                .fg(Color::Indexed(240))
                .add_modifier(Modifier::DIM),
            inline_code: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            list_marker: Style::default().fg(Color::Yellow),
            hr: Style::default().fg(Color::Indexed(240)),
            title: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Indexed(236), // Dark gray that works on both
            status_fg: Color::Indexed(252), // Light gray
        }
    }
}

impl Theme {
    /// Create a theme optimized for dark terminals.
    pub fn dark() -> Self {
        Self::default()
    }

    /// Create a theme optimized for light terminals.
    pub fn light() -> Self {
        Self {
            h1: Style::default()
                .fg(Color::Indexed(31)) // Darker cyan
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(Color::Indexed(28)) // Darker green
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(Color::Indexed(136)) // Darker yellow/olive
                .add_modifier(Modifier::BOLD),
            h4: Style::default()
                .fg(Color::Indexed(25)) // Darker blue
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Indexed(240)),
            fence: Style::default()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::DIM),
            inline_code: Style::default()
                .fg(Color::Indexed(124)) // Darker red
                .add_modifier(Modifier::BOLD),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            list_marker: Style::default().fg(Color::Indexed(136)),
            hr: Style::default().fg(Color::Indexed(245)),
            title: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Indexed(252),
            status_fg: Color::Indexed(235),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Terminal style for a run tagged `tag`.
    pub fn style_for(&self, tag: StyleTag) -> Style {
        match tag {
            StyleTag::Plain => Style::default(),
            StyleTag::Bold => self.strong,
            StyleTag::Italic => self.emphasis,
            StyleTag::InlineCode => self.inline_code,
            StyleTag::Heading(1) => self.h1,
            StyleTag::Heading(2) => self.h2,
            StyleTag::Heading(3) => self.h3,
            StyleTag::Heading(_) => self.h4,
            StyleTag::ListMarker => self.list_marker,
            StyleTag::Rule => self.hr,
            StyleTag::CodeBlock => self.code,
            StyleTag::FenceMarker => self.fence,
        }
    }

    pub fn status_style(&self) -> Style {
        Style::default().bg(self.status_bg).fg(self.status_fg)
    }
}
