//! Views
//!
//! Draw a `ScreenViewModel` into a frame. All text and styling decisions
//! are made by the view models; views only place lines.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::view_models::ScreenViewModel;

pub fn render(vm: &ScreenViewModel, area: Rect, f: &mut Frame) {
    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let body: Vec<Line<'static>> = vm.body.iter().map(Line::from).collect();
    f.render_widget(Paragraph::new(body), body_area);

    if let Some(footer) = &vm.footer {
        f.render_widget(Paragraph::new(Line::from(footer)), footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::ViewLine;
    use ratatui::{backend::TestBackend, style::Style, Terminal};

    #[test]
    fn test_footer_on_last_row() {
        let vm = ScreenViewModel {
            body: vec![ViewLine::styled("body", Style::default())],
            footer: Some(ViewLine::styled("q: quit", Style::default())),
        };
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render(&vm, area, f);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..20).map(|x| buffer[(x, y)].symbol()).collect() };
        assert_eq!(row(0).trim_end(), "body");
        assert_eq!(row(3).trim_end(), "q: quit");
    }
}
