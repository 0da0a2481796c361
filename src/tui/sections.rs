//! Static landing page sections below the hero.

use ratatui::text::{Line, Span};

use super::theme::Theme;

/// Page section reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Tool,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Tool, Section::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Tool => "Tool",
            Section::Contact => "Contact",
        }
    }

    /// Navbar shortcut key.
    pub fn key(self) -> char {
        match self {
            Section::About => 'a',
            Section::Tool => 't',
            Section::Contact => 'c',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    /// The following section, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Section::About => Section::Tool,
            Section::Tool => Section::Contact,
            Section::Contact => Section::About,
        }
    }

    /// The preceding section, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Section::About => Section::Contact,
            Section::Tool => Section::About,
            Section::Contact => Section::Tool,
        }
    }

    pub fn lines(self, theme: &Theme) -> Vec<Line<'static>> {
        match self {
            Section::About => about_lines(theme),
            Section::Tool => tool_lines(theme),
            Section::Contact => contact_lines(theme),
        }
    }
}

const FEATURES: [(&str, &str); 3] = [
    (
        "Smart Summarization",
        "Our AI understands context and identifies the most important information.",
    ),
    (
        "Time Saving",
        "Get through hours of reading in just minutes with AI-powered summaries.",
    ),
    (
        "Actionable Insights",
        "Extract key points and action items from any document instantly.",
    ),
];

fn heading(theme: &Theme, text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, theme.accent_bold_style()))
}

fn body(theme: &Theme, text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, theme.text_style()))
}

fn field(theme: &Theme, label: &'static str, placeholder: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<9}", label), theme.text_style()),
        Span::styled(format!("[ {:<30} ]", placeholder), theme.text_secondary_style()),
    ])
}

fn about_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(theme, "About Synapsis AI"),
        Line::from(""),
        body(
            theme,
            "Synapsis AI transforms overwhelming text into concise, actionable summaries. \
             Our cutting-edge AI understands context, extracts key information, and delivers \
             insights that matter to you.",
        ),
        Line::from(""),
        body(
            theme,
            "Whether you're dealing with research papers, news articles, or lengthy reports, \
             Synapsis AI helps you cut through the noise and focus on what's important.",
        ),
        Line::from(""),
    ];
    for (title, description) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled("◆ ", theme.accent_style()),
            Span::styled(title, theme.accent_bold_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", description),
            theme.text_secondary_style(),
        )));
    }
    lines
}

fn tool_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        heading(theme, "Synapsis Tool"),
        Line::from(""),
        body(theme, "Our actual tool will be available here soon. Stay tuned!"),
        Line::from(""),
        Line::from(Span::styled("Coming Soon", theme.accent_bold_style())),
        body(
            theme,
            "We're working hard to bring you the Synapsis AI tool. \
             Enter your email to be notified when we launch.",
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ your@email.com                ]", theme.text_secondary_style()),
            Span::raw(" "),
            Span::styled("[ Notify Me ]", theme.accent_bold_style()),
        ]),
    ]
}

fn contact_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        heading(theme, "Contact Us"),
        Line::from(""),
        field(theme, "Name", "Your name"),
        field(theme, "Email", "your@email.com"),
        field(theme, "Message", "Your message"),
        Line::from(""),
        Line::from(Span::styled("[ Send Message ]", theme.accent_bold_style())),
    ]
}

/// Footer line with brand, tagline and copyright.
pub fn footer_line(theme: &Theme, year: i32) -> Line<'static> {
    Line::from(vec![
        Span::styled("Synapsis AI", theme.accent_bold_style()),
        Span::styled(
            " · Transforming how you consume information · ",
            theme.text_secondary_style(),
        ),
        Span::styled(
            format!("© {} Synapsis AI. All rights reserved.", year),
            theme.text_secondary_style(),
        ),
    ])
}
