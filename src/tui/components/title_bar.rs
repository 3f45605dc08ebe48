//! # TitleBar Component
//!
//! Single heading line: app name, cohort, and the transient status
//! message. Stateless - all three values arrive as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Cohort segment scoping the dataset (shown so it's obvious which
    /// group's parties are on screen).
    pub cohort: String,
    /// Transient status (e.g. "Loading parties...").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(cohort: String, status_message: String) -> Self {
        Self {
            cohort,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Party Planner (cohort: {})", self.cohort)
        } else {
            format!(
                "Party Planner (cohort: {}) | {}",
                self.cohort, self.status_message
            )
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}
