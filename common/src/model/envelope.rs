//! Response envelopes. Every body the roster API returns is wrapped as
//! `{ "success": bool, "error": {..} | null, "data": {..} | null }`.

use serde::{Deserialize, Serialize};

use crate::model::player::Player;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    /// A missing key reads as `None`.
    pub data: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// `data` of `GET /players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayersData {
    #[serde(default)]
    pub players: Vec<Player>,
}

/// `data` of `GET /players/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub player: Player,
}

/// `data` of `POST /players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerData {
    pub new_player: Player,
}

impl<T> ApiResponse<T> {
    /// Whether the service flagged this response as a failure. A missing
    /// `success` key is not a failure.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }

    /// Message to report for a rejected response.
    pub fn rejection_message(&self) -> String {
        match &self.error {
            Some(body) if !body.message.is_empty() => body.message.clone(),
            Some(body) if !body.name.is_empty() => body.name.clone(),
            _ => "request was rejected by the server".to_string(),
        }
    }

    /// Unwraps `data`, failing with a readable message when the service
    /// rejected the request or sent no payload.
    pub fn into_data(self) -> Result<T, String> {
        if self.is_rejected() {
            return Err(self.rejection_message());
        }
        self.data
            .ok_or_else(|| "response envelope has no `data`".to_string())
    }
}
