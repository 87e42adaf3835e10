//! Async steps behind each user action: call the API, report the outcome,
//! then re-fetch the whole roster.
//!
//! This is the layer where API failures stop. Each one is logged with the
//! operation and player id and handed back as data, so the controller can
//! still draw the empty state and an error banner.

use common::model::player::{Player, PlayerId};
use common::requests::NewPlayerRequest;
use tracing::{error, info};

use crate::api::{ApiError, RosterApi};

pub const PLAYER_ADDED: &str = "Puppy successfully added to roster!";
pub const PLAYER_REMOVED: &str = "Puppy successfully cut from the team!";

/// User-visible confirmations.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Outcome of a mutation followed by a full re-fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    /// Set when the mutation itself failed. The roster is re-fetched anyway.
    pub mutation_error: Option<ApiError>,
    pub roster: Result<Vec<Player>, ApiError>,
}

pub async fn load_roster<A: RosterApi>(api: &A) -> Result<Vec<Player>, ApiError> {
    let result = api.fetch_all_players().await;
    match &result {
        Ok(players) => info!("Fetched {} players", players.len()),
        Err(err) => error!("Uh oh, trouble fetching players! {}", err),
    }
    result
}

pub async fn load_player<A: RosterApi>(api: &A, player_id: PlayerId) -> Result<Player, ApiError> {
    let result = api.fetch_single_player(player_id).await;
    if let Err(err) = &result {
        error!("Oh no, trouble fetching player #{}! {}", player_id, err);
    }
    result
}

/// Re-fetch only, for "Back to all players".
pub async fn refresh<A: RosterApi>(api: &A) -> Refresh {
    Refresh {
        mutation_error: None,
        roster: load_roster(api).await,
    }
}

pub async fn remove_and_refresh<A: RosterApi, N: Notifier>(
    api: &A,
    notifier: &N,
    player_id: PlayerId,
) -> Refresh {
    let mutation_error = match api.remove_player(player_id).await {
        Ok(()) => {
            info!("Removed player #{}", player_id);
            notifier.notify(PLAYER_REMOVED);
            None
        }
        Err(err) => {
            error!(
                "Whoops, trouble removing player #{} from the roster! {}",
                player_id, err
            );
            Some(err)
        }
    };

    Refresh {
        mutation_error,
        roster: load_roster(api).await,
    }
}

pub async fn create_and_refresh<A: RosterApi, N: Notifier>(
    api: &A,
    notifier: &N,
    request: NewPlayerRequest,
) -> Refresh {
    let mutation_error = match api.add_new_player(&request).await {
        Ok(response) => {
            if let Some(created) = &response.data {
                info!("Added player #{} ({})", created.new_player.id, created.new_player.name);
            }
            notifier.notify(PLAYER_ADDED);
            None
        }
        Err(err) => {
            error!("Oops, something went wrong with adding that player! {}", err);
            Some(err)
        }
    };

    Refresh {
        mutation_error,
        roster: load_roster(api).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::testing::{player, Call, MockApi, RecordingNotifier};

    #[tokio::test]
    async fn remove_deletes_once_then_refetches_once() {
        let api = MockApi::with_players(vec![player(3, "Bella"), player(7, "Rex")]);
        let notifier = RecordingNotifier::default();

        let refresh = remove_and_refresh(&api, &notifier, 7).await;

        assert_eq!(api.calls(), vec![Call::Remove(7), Call::FetchAll]);
        assert_eq!(refresh.mutation_error, None);
        let roster = refresh.roster.unwrap();
        assert!(roster.iter().all(|p| p.id != 7));
        assert_eq!(
            notifier.messages(),
            vec!["Puppy successfully cut from the team!".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_remove_still_refetches_without_confirmation() {
        let api = MockApi::with_players(vec![player(7, "Rex")]);
        api.fail_remove();
        let notifier = RecordingNotifier::default();

        let refresh = remove_and_refresh(&api, &notifier, 7).await;

        assert_eq!(api.calls(), vec![Call::Remove(7), Call::FetchAll]);
        assert!(refresh.mutation_error.is_some());
        assert_eq!(refresh.roster.unwrap().len(), 1);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn create_posts_form_body_then_refetches() {
        let api = MockApi::with_players(vec![]);
        let notifier = RecordingNotifier::default();
        let request = NewPlayerRequest {
            name: "Rex".to_string(),
            breed: "Lab".to_string(),
            team_id: String::new(),
            image_url: "http://x/y.png".to_string(),
        };

        let refresh = create_and_refresh(&api, &notifier, request.clone()).await;

        assert_eq!(api.calls(), vec![Call::Create(request), Call::FetchAll]);
        let roster = refresh.roster.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Rex");
        assert_eq!(
            notifier.messages(),
            vec!["Puppy successfully added to roster!".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_list_fetch_is_returned_not_raised() {
        let api = MockApi::with_players(vec![player(1, "Rex")]);
        api.fail_list();

        let refresh = refresh(&api).await;

        assert_eq!(api.calls(), vec![Call::FetchAll]);
        assert!(refresh.roster.is_err());
    }

    #[tokio::test]
    async fn load_player_uses_single_fetch() {
        let api = MockApi::with_players(vec![player(1, "Rex"), player(2, "Fido")]);

        let fido = load_player(&api, 2).await.unwrap();
        assert_eq!(fido.name, "Fido");
        assert!(load_player(&api, 9).await.is_err());
        assert_eq!(api.calls(), vec![Call::FetchOne(2), Call::FetchOne(9)]);
    }
}
