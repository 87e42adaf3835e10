use common::model::player::PlayerId;

/// URL builder for the roster API, rooted at the cohort base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Collection endpoint: list and create.
    pub fn players(&self) -> String {
        format!("{}/players", self.base)
    }

    /// Single player, used by the detail fetch.
    #[cfg(not(feature = "legacy-player-path"))]
    pub fn player(&self, player_id: PlayerId) -> String {
        format!("{}/players/{}", self.base, player_id)
    }

    /// Single player with the id glued straight onto the collection path.
    #[cfg(feature = "legacy-player-path")]
    pub fn player(&self, player_id: PlayerId) -> String {
        format!("{}/players{}", self.base, player_id)
    }

    /// Deletion target. Always separated, regardless of `legacy-player-path`.
    pub fn remove_player(&self, player_id: PlayerId) -> String {
        format!("{}/players/{}", self.base, player_id)
    }
}
