use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::core::vdom::Node;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{StatusBar, TreeView};

pub const PEOPLE_HELP: &str = "click/1-5 select · space or click [ ] toggle · ↑/↓ move · q quit";
pub const HELLO_HELP: &str = "q quit";

/// Status bar props derived from the people state.
pub fn people_status(app: &App) -> StatusBar {
    let title = format!("People ({})", app.len());
    if let Some(error) = &app.error {
        return StatusBar::new(title, error.clone(), true);
    }
    let status = if app.is_empty() {
        "Loading people...".to_string()
    } else {
        match app.selected {
            None => "Pick someone to see their bio".to_string(),
            Some(i) => format!("Selected: {}", app.names.get(i).map(String::as_str).unwrap_or("?")),
        }
    };
    StatusBar::new(title, status, false)
}

pub fn draw_ui(frame: &mut Frame, tree: &Node, status: &mut StatusBar, help: &str, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [status_area, _spacer, body_area, help_area] = layout.areas(frame.area());

    status.render(frame, status_area);
    TreeView::new(tree, &mut tui.tree_view).render(frame, body_area);
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
