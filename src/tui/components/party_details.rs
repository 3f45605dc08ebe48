//! # PartyDetails Component
//!
//! Right column: details of the current selection plus the derived
//! guest list, or a placeholder prompt when nothing is selected.
//!
//! Purely presentational - the attendee filtering itself lives in
//! `App::attending_guests()` so it stays testable without a terminal;
//! this component just renders whatever names it is handed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::Party;
use crate::tui::component::Component;

/// Props for the details pane.
pub struct PartyDetails<'a> {
    /// The current selection, if any.
    pub party: Option<&'a Party>,
    /// Attendee names, already filtered to the selection and ordered by
    /// the guest collection (not rsvp order).
    pub attendees: Vec<&'a str>,
}

impl Component for PartyDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Party Details");

        let party = match self.party {
            Some(p) => p,
            None => {
                let placeholder = Paragraph::new("Select a party to view details.").block(block);
                frame.render_widget(placeholder, area);
                return;
            }
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} #{}", party.name, party.id),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(party.date.as_str()),
            Line::from(Span::styled(
                party.location.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(party.description.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Guest List",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
        ];
        for name in &self.attendees {
            lines.push(Line::from(format!("- {name}")));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
