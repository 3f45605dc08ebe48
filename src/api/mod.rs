pub mod client;
pub mod types;

pub use client::{ApiError, HttpPartyApi, PartyApi};
pub use types::{Envelope, Guest, Party, Rsvp};
