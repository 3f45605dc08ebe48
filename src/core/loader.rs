//! # Data Loaders
//!
//! The four fetch operations, composed over the [`PartyApi`] seam so
//! they can be unit-tested without a network:
//!
//! - party list (bulk)
//! - single party, enriched with its rsvps
//! - rsvps (internal to the detail load)
//! - guest list (bulk)
//!
//! Loaders return `Result` and never touch application state themselves;
//! the render cycle applies successful payloads through `update()` and
//! swallows failures after logging them. All loaders are idempotent:
//! re-invoking simply re-fetches and overwrites.

use log::error;

use crate::api::{ApiError, Guest, Party, PartyApi};

/// Fetch the full party list.
pub async fn load_parties(api: &dyn PartyApi) -> Result<Vec<Party>, ApiError> {
    api.fetch_parties().await
}

/// Fetch one party and attach its rsvps.
///
/// The rsvps collection has no server-side filter, so the whole thing is
/// fetched and narrowed to `event_id == id` here. If the rsvp fetch
/// fails, the party is still returned with `rsvps` unset: the selection
/// updates and the detail view shows an empty guest list.
pub async fn load_party_detail(api: &dyn PartyApi, id: i64) -> Result<Party, ApiError> {
    let mut party = api.fetch_party(id).await?;
    match api.fetch_rsvps().await {
        Ok(rsvps) => {
            party.rsvps = Some(rsvps.into_iter().filter(|r| r.event_id == id).collect());
        }
        Err(e) => {
            error!("Error fetching RSVPs: {e}");
        }
    }
    Ok(party)
}

/// Fetch the full guest collection for the cohort.
pub async fn load_guests(api: &dyn PartyApi) -> Result<Vec<Guest>, ApiError> {
    api.fetch_guests().await
}
