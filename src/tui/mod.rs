//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Render Cycle
//!
//! Every loop iteration redraws the entire frame from `App` state -
//! discard and rebuild, no incremental diffing. Fetches run as spawned
//! tokio tasks that report back over an mpsc channel of Actions; all
//! state mutation happens on this thread inside `update()`.
//!
//! In-flight fetch tasks are never cancelled. Rapidly activating one
//! party after another can therefore interleave two fetch chains and
//! let a slower earlier response overwrite a faster later one. Accepted:
//! in practice every chain here is user-triggered and sequential.

mod component;
mod components;
mod event;
mod ui;

use log::{error, info};
use std::sync::{Arc, mpsc};

use crate::api::{HttpPartyApi, PartyApi};
use crate::core::action::{Action, Effect, FetchKind, update};
use crate::core::config::ResolvedConfig;
use crate::core::loader;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Keyboard cursor position in the party list. Clamped against the
    /// current list length at render time, so a shrinking list can't
    /// leave it dangling.
    cursor_index: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self { cursor_index: 0 }
    }

    /// Cursor row for a list of `len` entries, or None when empty.
    pub fn cursor(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.cursor_index.min(len - 1))
        }
    }

    pub fn move_up(&mut self, len: usize) {
        if let Some(current) = self.cursor(len) {
            self.cursor_index = current.saturating_sub(1);
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if let Some(current) = self.cursor(len)
            && current + 1 < len
        {
            self.cursor_index = current + 1;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn PartyApi> = Arc::new(HttpPartyApi::new(
        config.base_url.clone(),
        config.cohort.clone(),
    ));
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Initialization: enter loading-parties and kick off the first fetch
    let effect = update(&mut app, Action::Init);
    let mut should_quit = handle_effect(effect, &api, &tx);

    while !should_quit {
        terminal.draw(|f| ui::draw_ui(f, &app, &tui, &config.cohort))?;

        if let Some(event) = poll_event() {
            match event {
                TuiEvent::ForceQuit | TuiEvent::Quit => {
                    let effect = update(&mut app, Action::Quit);
                    should_quit |= handle_effect(effect, &api, &tx);
                }
                TuiEvent::CursorUp => tui.move_up(app.parties.len()),
                TuiEvent::CursorDown => tui.move_down(app.parties.len()),
                TuiEvent::Activate => {
                    if let Some(index) = tui.cursor(app.parties.len()) {
                        let id = app.parties[index].id;
                        let effect = update(&mut app, Action::ActivateParty(id));
                        should_quit |= handle_effect(effect, &api, &tx);
                    }
                }
                TuiEvent::Refresh => {
                    let effect = update(&mut app, Action::RefreshParties);
                    should_quit |= handle_effect(effect, &api, &tx);
                }
                TuiEvent::Resize => {} // next draw picks up the new size
            }
        }

        // Handle completed fetches
        while let Ok(action) = rx.try_recv() {
            let effect = update(&mut app, action);
            should_quit |= handle_effect(effect, &api, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs an effect returned by `update()`. Returns true when the app
/// should exit.
fn handle_effect(effect: Effect, api: &Arc<dyn PartyApi>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchParties => {
            spawn_parties_fetch(api.clone(), tx.clone());
            false
        }
        Effect::FetchDetail(id) => {
            spawn_detail_fetch(api.clone(), tx.clone(), id);
            false
        }
    }
}

fn spawn_parties_fetch(api: Arc<dyn PartyApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning party list fetch");
    tokio::spawn(async move {
        let action = match loader::load_parties(api.as_ref()).await {
            Ok(parties) => Action::PartiesLoaded(parties),
            Err(e) => {
                error!("{}: {e}", FetchKind::Parties.label());
                Action::FetchFailed(FetchKind::Parties)
            }
        };
        let _ = tx.send(action);
    });
}

/// One interaction's fetch chain: the detail fetch (with its nested
/// rsvp fetch) completes before the guest fetch begins, and the guest
/// fetch runs whether or not the detail fetch succeeded - two
/// sequential, independently error-swallowed steps.
fn spawn_detail_fetch(api: Arc<dyn PartyApi>, tx: mpsc::Sender<Action>, id: i64) {
    info!("Spawning detail fetch chain for party {id}");
    tokio::spawn(async move {
        let action = match loader::load_party_detail(api.as_ref(), id).await {
            Ok(party) => Action::DetailLoaded(party),
            Err(e) => {
                error!("{}: {e}", FetchKind::Detail.label());
                Action::FetchFailed(FetchKind::Detail)
            }
        };
        if tx.send(action).is_err() {
            return; // event loop gone
        }

        let action = match loader::load_guests(api.as_ref()).await {
            Ok(guests) => Action::GuestsLoaded(guests),
            Err(e) => {
                error!("{}: {e}", FetchKind::Guests.label());
                Action::FetchFailed(FetchKind::Guests)
            }
        };
        let _ = tx.send(action);
    });
}
