//! Styled text lines
//!
//! View models describe the screen as lines of styled spans. Widths are
//! counted in characters, not terminal cells.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewLine {
    pub spans: Vec<StyledSpan>,
    /// Style applied to the whole row (e.g. selection background)
    pub style: Style,
}

impl ViewLine {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::blank().span(text, style)
    }

    pub fn span(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(StyledSpan {
            text: text.into(),
            style,
        });
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Plain text of the line
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Cut the line to at most `width` characters; 0 means unlimited
    pub fn truncated(mut self, width: usize) -> Self {
        if width == 0 {
            return self;
        }
        let mut remaining = width;
        for span in &mut self.spans {
            if remaining == 0 {
                span.text.clear();
                continue;
            }
            span.text = truncate(&span.text, remaining);
            remaining -= span.text.chars().count();
        }
        self.spans.retain(|span| !span.text.is_empty());
        self
    }
}

/// Cut `text` to at most `width` characters; 0 means unlimited
pub fn truncate(text: &str, width: usize) -> String {
    if width == 0 || text.chars().count() <= width {
        text.to_string()
    } else {
        text.chars().take(width).collect()
    }
}

impl From<&ViewLine> for Line<'static> {
    fn from(line: &ViewLine) -> Self {
        let spans: Vec<Span<'static>> = line
            .spans
            .iter()
            .map(|s| Span::styled(s.text.clone(), s.style))
            .collect();
        Line::from(spans).style(line.style)
    }
}
