use ratatui::style::{palette::tailwind, Color, Modifier, Style};

use crate::domain_models::CheckStatus;

/// Application theme - centralized color and style management
///
/// Passed explicitly to the view models; nothing reads colors from globals.
#[derive(Debug, Clone)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_header: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_pass: Color,
    pub status_fail: Color,
    pub status_running: Color,
    pub status_skipped: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,
            text_header: tailwind::CYAN.c300,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::AMBER.c400,

            status_pass: tailwind::GREEN.c400,
            status_fail: tailwind::RED.c400,
            status_running: tailwind::YELLOW.c400,
            status_skipped: tailwind::SLATE.c500,

            selected_bg: tailwind::SLATE.c700,
            selected_fg: tailwind::SLATE.c50,
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn bold(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.text_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.status_fail)
    }

    pub fn underlined(&self) -> Style {
        self.text().add_modifier(Modifier::UNDERLINED)
    }

    pub fn repo(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn pr_number(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    /// Background of the selected picker entry
    pub fn selected(&self) -> Style {
        Style::default().bg(self.selected_bg).fg(self.selected_fg)
    }

    pub fn status(&self, status: CheckStatus) -> Style {
        let color = match status {
            CheckStatus::Pass => self.status_pass,
            CheckStatus::Fail => self.status_fail,
            CheckStatus::Running => self.status_running,
            CheckStatus::Skipped => self.status_skipped,
        };
        Style::default().fg(color)
    }
}
