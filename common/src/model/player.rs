//! The `Player` record as served by the roster API.
//!
//! Decoding is lenient: the service owns these records and may omit fields or
//! add new ones, so missing or `null` strings decode as empty and unknown keys are
//! ignored.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned by the remote service.
pub type PlayerId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub breed: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

/// Reads a string field, treating `null` like a missing key.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Team reference. The API stores numbers, but players created through the
/// form carry whatever string was typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamId {
    Number(i64),
    Text(String),
}

impl TeamId {
    /// `0` and `""` count as "no team", same as a missing value.
    pub fn is_assigned(&self) -> bool {
        match self {
            TeamId::Number(n) => *n != 0,
            TeamId::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::Number(n) => write!(f, "{}", n),
            TeamId::Text(s) => f.write_str(s),
        }
    }
}

impl Player {
    /// The team this player belongs to, if any. Falsy ids are treated as absent.
    pub fn team(&self) -> Option<&TeamId> {
        self.team_id.as_ref().filter(|team| team.is_assigned())
    }
}
