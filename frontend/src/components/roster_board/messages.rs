use common::model::player::{Player, PlayerId};

use crate::api::ApiError;
use crate::roster::form::FormField;
use crate::roster::workflow::Refresh;

#[derive(Clone)]
pub enum Msg {
    /// Result of the initial roster fetch.
    RosterLoaded(Result<Vec<Player>, ApiError>),
    /// A mutation or "back" refresh finished.
    Refreshed(Refresh),
    /// Result of a deep-link single-player fetch.
    PlayerOpened(Result<Player, ApiError>),
    OpenPlayer(PlayerId),
    SeeDetails(PlayerId),
    Remove(PlayerId),
    BackToAll,
    FormInput(FormField, String),
    SubmitForm,
    DismissError,
}
