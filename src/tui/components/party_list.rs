//! # PartyList Component
//!
//! Left column: one row per party, in the order the API returned them.
//!
//! Two highlights can apply to a row:
//! - The current selection (matched by id) is emphasized bold + italic.
//! - The keyboard cursor row is rendered reversed. Pressing Enter on it
//!   activates the party and starts the detail fetch chain.
//!
//! The two are independent: the cursor can sit on an unselected row
//! while a different row stays emphasized.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, List, ListItem};
use unicode_width::UnicodeWidthChar;

use crate::api::Party;
use crate::tui::component::Component;

/// Props for the party list. All data comes from the parent; the
/// component holds no state of its own.
pub struct PartyList<'a> {
    /// Full party list, rendered in existing order.
    pub parties: &'a [Party],
    /// Id of the current selection, if any.
    pub selected_id: Option<i64>,
    /// Keyboard cursor row, if any.
    pub cursor: Option<usize>,
}

/// Truncates `text` to at most `max_width` terminal columns, appending
/// an ellipsis when anything was cut.
fn truncate_to_width(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    let mut width = 0usize;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

impl Component for PartyList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Upcoming Parties");
        let inner_width = area.width.saturating_sub(2);

        let items: Vec<ListItem> = self
            .parties
            .iter()
            .enumerate()
            .map(|(index, party)| {
                let mut style = Style::default();
                if self.selected_id == Some(party.id) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::ITALIC);
                }
                if self.cursor == Some(index) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let name = truncate_to_width(&party.name, inner_width);
                ListItem::new(Span::styled(name, style))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::party;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Renders the component and returns the buffer rows as strings.
    fn render_rows(list: &mut PartyList, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_one_row_per_party_in_order() {
        let parties = vec![party(1, "Gala"), party(2, "Brunch"), party(3, "Mixer")];
        let mut list = PartyList {
            parties: &parties,
            selected_id: None,
            cursor: None,
        };
        let rows = render_rows(&mut list, 30, 6);
        // Rows 1..=3 are inside the border, in API order
        assert!(rows[1].contains("Gala"));
        assert!(rows[2].contains("Brunch"));
        assert!(rows[3].contains("Mixer"));
    }

    #[test]
    fn test_selected_party_is_emphasized() {
        let parties = vec![party(1, "Gala"), party(2, "Brunch")];
        let mut list = PartyList {
            parties: &parties,
            selected_id: Some(2),
            cursor: None,
        };
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();

        // Row 1: "Gala" (unselected), row 2: "Brunch" (selected)
        let gala_style = buffer.cell((1, 1)).unwrap().style();
        let brunch_style = buffer.cell((1, 2)).unwrap().style();
        assert!(!gala_style.add_modifier.contains(Modifier::BOLD));
        assert!(brunch_style.add_modifier.contains(Modifier::BOLD));
        assert!(brunch_style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_no_selection_emphasizes_nothing() {
        let parties = vec![party(1, "Gala"), party(2, "Brunch")];
        let mut list = PartyList {
            parties: &parties,
            selected_id: None,
            cursor: None,
        };
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();

        for y in 1..=2 {
            let style = buffer.cell((1, y)).unwrap().style();
            assert!(!style.add_modifier.contains(Modifier::BOLD));
            assert!(!style.add_modifier.contains(Modifier::ITALIC));
        }
    }

    #[test]
    fn test_cursor_row_is_reversed() {
        let parties = vec![party(1, "Gala"), party(2, "Brunch")];
        let mut list = PartyList {
            parties: &parties,
            selected_id: None,
            cursor: Some(1),
        };
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();

        let style = buffer.cell((1, 2)).unwrap().style();
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_empty_list_renders_only_frame() {
        let mut list = PartyList {
            parties: &[],
            selected_id: None,
            cursor: None,
        };
        let rows = render_rows(&mut list, 30, 4);
        assert!(rows[0].contains("Upcoming Parties"));
        assert!(rows[1].trim_matches(['│', ' ']).is_empty());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Gala", 20), "Gala");
        assert_eq!(truncate_to_width("Midsummer Banquet", 10), "Midsummer…");
    }
}
