use std::rc::Rc;

use crate::api::HttpRosterApi;
use crate::config::ApiConfig;
use crate::roster::state::RosterState;

/// State of the `RosterBoard` component.
///
/// `roster` is the controller state proper; `api` is shared with the tasks
/// spawned by `update`.
pub struct RosterBoard {
    pub roster: RosterState,
    pub api: Rc<HttpRosterApi>,
    /// Guard for the first-render fetch.
    pub loaded: bool,
}

impl RosterBoard {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            roster: RosterState::new(),
            api: Rc::new(HttpRosterApi::new(config)),
            loaded: false,
        }
    }
}
