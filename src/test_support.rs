//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{ApiError, Guest, Party, PartyApi, Rsvp};

/// Shorthand for a list-shaped party (empty detail fields).
pub fn party(id: i64, name: &str) -> Party {
    Party {
        id,
        name: name.to_string(),
        date: String::new(),
        location: String::new(),
        description: String::new(),
        rsvps: None,
    }
}

/// Shorthand for a guest.
pub fn guest(id: i64, name: &str) -> Guest {
    Guest {
        id,
        name: name.to_string(),
    }
}

/// A canned-data [`PartyApi`] for tests that don't need a real server.
///
/// Individual endpoints can be made to fail to exercise the swallowed
/// error paths.
#[derive(Default)]
pub struct StubApi {
    pub parties: Vec<Party>,
    pub rsvps: Vec<Rsvp>,
    pub guests: Vec<Guest>,
    pub fail_parties: bool,
    pub fail_rsvps: bool,
    pub fail_guests: bool,
}

impl StubApi {
    pub fn with_parties(mut self, parties: Vec<Party>) -> Self {
        self.parties = parties;
        self
    }

    pub fn with_rsvps(mut self, rsvps: Vec<Rsvp>) -> Self {
        self.rsvps = rsvps;
        self
    }

    pub fn with_guests(mut self, guests: Vec<Guest>) -> Self {
        self.guests = guests;
        self
    }

    pub fn failing_parties(mut self) -> Self {
        self.fail_parties = true;
        self
    }

    pub fn failing_rsvps(mut self) -> Self {
        self.fail_rsvps = true;
        self
    }

    pub fn failing_guests(mut self) -> Self {
        self.fail_guests = true;
        self
    }

    fn refused() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }
}

#[async_trait]
impl PartyApi for StubApi {
    async fn fetch_parties(&self) -> Result<Vec<Party>, ApiError> {
        if self.fail_parties {
            return Err(Self::refused());
        }
        Ok(self.parties.clone())
    }

    async fn fetch_party(&self, id: i64) -> Result<Party, ApiError> {
        if self.fail_parties {
            return Err(Self::refused());
        }
        self.parties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Api {
                status: 404,
                message: "not found".to_string(),
            })
    }

    async fn fetch_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        if self.fail_rsvps {
            return Err(Self::refused());
        }
        Ok(self.rsvps.clone())
    }

    async fn fetch_guests(&self) -> Result<Vec<Guest>, ApiError> {
        if self.fail_guests {
            return Err(Self::refused());
        }
        Ok(self.guests.clone())
    }
}
