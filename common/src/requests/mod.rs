use serde::{Deserialize, Serialize};

/// Request payload for `POST /players`.
/// Fields are sent exactly as typed into the creation form; `team_id` stays a
/// string even though the API stores numeric team ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerRequest {
    pub name: String,
    pub breed: String,
    pub team_id: String,
    pub image_url: String,
}
