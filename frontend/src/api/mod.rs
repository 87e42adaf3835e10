//! Client side of the roster API.
//!
//! `RosterApi` is the seam the controller talks to; `HttpRosterApi` is the
//! browser implementation over `gloo-net`. Every operation returns a typed
//! `Result` and leaves logging and user feedback to the caller.

mod endpoints;
mod error;
mod http;

use common::model::envelope::{ApiResponse, NewPlayerData};
use common::model::player::{Player, PlayerId};
use common::requests::NewPlayerRequest;

pub use endpoints::Endpoints;
pub use error::ApiError;
pub use http::HttpRosterApi;

/// The four remote operations the roster needs.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait RosterApi {
    /// `GET /players`, unwrapped to the list of players.
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ApiError>;

    /// `GET` a single player by id.
    async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player, ApiError>;

    /// `POST /players`. Returns the decoded envelope as sent by the server.
    async fn add_new_player(
        &self,
        player: &NewPlayerRequest,
    ) -> Result<ApiResponse<NewPlayerData>, ApiError>;

    /// `DELETE /players/{id}`.
    async fn remove_player(&self, player_id: PlayerId) -> Result<(), ApiError>;
}
