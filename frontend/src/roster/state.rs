//! The roster controller's state: which view occupies the content region,
//! the last fetched players, the creation form and the single pending
//! operation.
//!
//! At most one operation is in flight. `begin` refuses a second one until
//! `finish`/`finish_open` clears it, which serializes every mutation with the
//! refresh that follows it.

use common::model::player::{Player, PlayerId};

use super::form::NewPlayerForm;
use super::view_model::{render_all_players, render_single_player, RosterView};
use super::workflow::Refresh;
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOp {
    Remove(PlayerId),
    Create,
    Refresh,
    OpenPlayer(PlayerId),
}

#[derive(Debug)]
pub struct RosterState {
    view: RosterView,
    players: Vec<Player>,
    pending: Option<PendingOp>,
    form_mounted: bool,
    last_error: Option<String>,
    pub form: NewPlayerForm,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            view: RosterView::Loading,
            players: Vec::new(),
            pending: None,
            form_mounted: false,
            last_error: None,
            form: NewPlayerForm::default(),
        }
    }

    pub fn view(&self) -> &RosterView {
        &self.view
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn form_mounted(&self) -> bool {
        self.form_mounted
    }

    /// Hides the error banner. Returns `false` if there was nothing to hide.
    pub fn dismiss_error(&mut self) -> bool {
        self.last_error.take().is_some()
    }

    /// Marks the creation form as mounted. Returns `false` if it already was.
    pub fn mount_form(&mut self) -> bool {
        !std::mem::replace(&mut self.form_mounted, true)
    }

    /// Replaces the content region with the list view for `fetched`.
    /// A failed fetch draws the empty state and records the error.
    pub fn show_roster(&mut self, fetched: Result<Vec<Player>, ApiError>) {
        match fetched {
            Ok(players) => {
                self.players = players;
                self.view = render_all_players(Some(&self.players));
                self.last_error = None;
            }
            Err(err) => {
                self.players.clear();
                self.view = render_all_players(None);
                self.last_error = Some(format!("Could not load the roster: {}", err));
            }
        }
    }

    /// Switches to the detail view of an already fetched player. No network.
    pub fn see_details(&mut self, player_id: PlayerId) -> bool {
        if self.is_busy() {
            return false;
        }
        match self.players.iter().find(|p| p.id == player_id) {
            Some(player) => {
                self.view = render_single_player(player);
                true
            }
            None => false,
        }
    }

    /// Claims the pending slot for `op`. Returns `false` while another
    /// operation is in flight.
    pub fn begin(&mut self, op: PendingOp) -> bool {
        if self.is_busy() {
            return false;
        }
        self.pending = Some(op);
        true
    }

    /// Completes a mutation or refresh: redraws the list and, after a
    /// creation, clears the form.
    pub fn finish(&mut self, refresh: Refresh) {
        let op = self.pending.take();
        self.show_roster(refresh.roster);

        if let Some(err) = refresh.mutation_error {
            self.last_error = Some(match op {
                Some(PendingOp::Remove(id)) => format!("Could not remove player #{}: {}", id, err),
                Some(PendingOp::Create) => format!("Could not add player: {}", err),
                _ => err.to_string(),
            });
        }

        if op == Some(PendingOp::Create) {
            self.form.clear();
        }
    }

    /// Completes a single-player fetch. On failure the current view stays.
    pub fn finish_open(&mut self, fetched: Result<Player, ApiError>) {
        let op = self.pending.take();
        match fetched {
            Ok(player) => self.view = render_single_player(&player),
            Err(err) => {
                self.last_error = Some(match op {
                    Some(PendingOp::OpenPlayer(id)) => {
                        format!("Could not load player #{}: {}", id, err)
                    }
                    _ => err.to_string(),
                });
            }
        }
    }
}
