//! Wire types for the party planner API.
//!
//! Every endpoint wraps its payload in a `{ "data": ... }` envelope.
//! Field names on the wire are camelCase; unknown fields are ignored.

use serde::Deserialize;

/// Generic response envelope: `{ "data": <payload> }`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

/// A plannable gathering. The API's event representation never includes
/// `rsvps`; it is attached client-side after the rsvp collection is
/// fetched and filtered (hence `#[serde(skip)]`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip)]
    pub rsvps: Option<Vec<Rsvp>>,
}

/// Attendance-intent record linking a guest to a party. Read-only;
/// only used to compute which guests attend a given party.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub event_id: i64,
    pub guest_id: i64,
}

/// A person who may attend one or more parties.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

impl Party {
    /// Guest ids referenced by this party's rsvps, in rsvp order.
    /// Empty when enrichment has not happened (or failed).
    pub fn rsvp_guest_ids(&self) -> Vec<i64> {
        self.rsvps
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|r| r.guest_id)
            .collect()
    }
}
