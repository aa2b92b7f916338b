//! # StatusBar Component
//!
//! Single line at the top: demo title, then the status text. Errors are
//! drawn in red so a failed fetch is visible even when the body is empty.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct StatusBar {
    pub title: String,
    pub status: String,
    pub is_error: bool,
}

impl StatusBar {
    pub fn new(title: impl Into<String>, status: impl Into<String>, is_error: bool) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            is_error,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(format!("Roster: {}", self.title))];
        if !self.status.is_empty() {
            let style = if self.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status.clone(), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(bar: &mut StatusBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_status_bar_with_status() {
        let text = rendered(&mut StatusBar::new("People (5)", "Loading people...", false));
        assert!(text.contains("Roster: People (5)"));
        assert!(text.contains("| Loading people..."));
    }

    #[test]
    fn test_status_bar_without_status_has_no_separator() {
        let text = rendered(&mut StatusBar::new("Hello", "", false));
        assert!(text.contains("Roster: Hello"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_status_bar_error_is_red() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar::new("People", "GotNames: boom", true);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let start = "Roster: People | ".len() as u16;
        assert_eq!(buffer[(start, 0)].symbol(), "G");
        assert_eq!(buffer[(start, 0)].fg, Color::Red);
    }
}
