//! In-memory `RosterApi` and notifier that record every call.

use std::cell::{Cell, RefCell};

use common::model::envelope::{ApiResponse, NewPlayerData};
use common::model::player::{Player, PlayerId, TeamId};
use common::requests::NewPlayerRequest;

use crate::api::{ApiError, RosterApi};
use crate::roster::workflow::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchAll,
    FetchOne(PlayerId),
    Create(NewPlayerRequest),
    Remove(PlayerId),
}

pub fn player(id: PlayerId, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        breed: "Lab".to_string(),
        image_url: format!("http://img/{}.png", id),
        team_id: None,
    }
}

pub struct MockApi {
    players: RefCell<Vec<Player>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<PlayerId>,
    fail_list: Cell<bool>,
    fail_remove: Cell<bool>,
}

impl MockApi {
    pub fn with_players(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            players: RefCell::new(players),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(next_id),
            fail_list: Cell::new(false),
            fail_remove: Cell::new(false),
        }
    }

    pub fn fail_list(&self) {
        self.fail_list.set(true);
    }

    pub fn fail_remove(&self) {
        self.fail_remove.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl RosterApi for MockApi {
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ApiError> {
        self.record(Call::FetchAll);
        if self.fail_list.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(self.players.borrow().clone())
    }

    async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player, ApiError> {
        self.record(Call::FetchOne(player_id));
        self.players
            .borrow()
            .iter()
            .find(|p| p.id == player_id)
            .cloned()
            .ok_or_else(|| ApiError::Rejected(format!("Player #{} not found", player_id)))
    }

    async fn add_new_player(
        &self,
        request: &NewPlayerRequest,
    ) -> Result<ApiResponse<NewPlayerData>, ApiError> {
        self.record(Call::Create(request.clone()));
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let created = Player {
            id,
            name: request.name.clone(),
            breed: request.breed.clone(),
            image_url: request.image_url.clone(),
            team_id: Some(TeamId::Text(request.team_id.clone())),
        };
        self.players.borrow_mut().push(created.clone());

        Ok(ApiResponse {
            success: Some(true),
            error: None,
            data: Some(NewPlayerData {
                new_player: created,
            }),
        })
    }

    async fn remove_player(&self, player_id: PlayerId) -> Result<(), ApiError> {
        self.record(Call::Remove(player_id));
        if self.fail_remove.get() {
            return Err(ApiError::Status {
                status: 500,
                url: format!("/players/{}", player_id),
            });
        }
        self.players.borrow_mut().retain(|p| p.id != player_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
