//! # Application State
//!
//! Core business state for Mixer. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── parties: Vec<Party>            // full party list, API order
//! ├── selected_party: Option<Party>  // current selection, rsvp-enriched
//! ├── guests: Vec<Guest>             // full guest collection for the cohort
//! ├── phase: Phase                   // render-cycle state machine
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! `guests` always holds the whole cohort collection, never a filtered
//! view - filtering down to the selected party's attendees happens at
//! render time via [`App::attending_guests`].

use crate::api::{Guest, Party};

/// Render-cycle state machine. No terminal state; the cycle runs for
/// the lifetime of the process.
///
/// ```text
/// Uninitialized → LoadingParties → Idle ⇄ LoadingDetail → IdleWithSelection
///                                              ▲                │
///                                              └────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    LoadingParties,
    Idle,
    LoadingDetail,
    IdleWithSelection,
}

pub struct App {
    pub parties: Vec<Party>,
    pub selected_party: Option<Party>,
    pub guests: Vec<Guest>,
    pub phase: Phase,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            parties: Vec::new(),
            selected_party: None,
            guests: Vec::new(),
            phase: Phase::Uninitialized,
            status_message: String::from("Welcome to Mixer!"),
        }
    }

    /// True while a fetch chain is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::LoadingParties | Phase::LoadingDetail)
    }

    /// Whether the party with `id` is the current selection.
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_party.as_ref().is_some_and(|p| p.id == id)
    }

    /// Guests attending the selected party: the ids referenced by the
    /// selection's rsvps (empty if absent), applied as a filter over the
    /// full `guests` collection. Order follows `guests`, not rsvp order.
    pub fn attending_guests(&self) -> Vec<&Guest> {
        let guest_ids = match &self.selected_party {
            Some(party) => party.rsvp_guest_ids(),
            None => return Vec::new(),
        };
        self.guests
            .iter()
            .filter(|g| guest_ids.contains(&g.id))
            .collect()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Rsvp;
    use crate::test_support::{guest, party};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.status_message, "Welcome to Mixer!");
        assert_eq!(app.phase, Phase::Uninitialized);
        assert!(app.parties.is_empty());
        assert!(app.selected_party.is_none());
        assert!(app.guests.is_empty());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_is_selected_matches_by_id() {
        let mut app = App::new();
        assert!(!app.is_selected(1));
        app.selected_party = Some(party(1, "Gala"));
        assert!(app.is_selected(1));
        assert!(!app.is_selected(2));
    }

    #[test]
    fn test_attending_guests_without_selection() {
        let mut app = App::new();
        app.guests = vec![guest(1, "A")];
        assert!(app.attending_guests().is_empty());
    }

    #[test]
    fn test_attending_guests_filters_and_keeps_guest_order() {
        let mut app = App::new();
        let mut selected = party(1, "Gala");
        // rsvp order deliberately reversed relative to the guest list
        selected.rsvps = Some(vec![
            Rsvp { event_id: 1, guest_id: 5 },
            Rsvp { event_id: 1, guest_id: 2 },
        ]);
        app.selected_party = Some(selected);
        app.guests = vec![guest(1, "A"), guest(2, "B"), guest(5, "C")];

        let names: Vec<&str> = app
            .attending_guests()
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_attending_guests_absent_rsvps_is_empty() {
        let mut app = App::new();
        app.selected_party = Some(party(1, "Gala"));
        app.guests = vec![guest(1, "A")];
        assert!(app.attending_guests().is_empty());
    }
}
