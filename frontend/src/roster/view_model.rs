//! Pure description of what the content region shows.
//!
//! `render_all_players` and `render_single_player` never touch the DOM; the
//! Yew views in `components::roster_board` turn a `RosterView` into `Html`.
//! Each render produces a complete replacement for the previous view.

use common::model::player::{Player, PlayerId};

pub const NO_PLAYERS_MESSAGE: &str = "No players on the roster yet. Add one below!";
pub const UNASSIGNED: &str = "Unassigned";

pub const SEE_DETAILS_LABEL: &str = "See details";
pub const REMOVE_LABEL: &str = "Remove from roster";
pub const BACK_LABEL: &str = "Back to all players";

#[derive(Debug, Clone, PartialEq)]
pub enum RosterView {
    /// Nothing fetched yet.
    Loading,
    /// The fetched list was empty or absent.
    Empty { message: &'static str },
    /// One card per player, in server order.
    Cards(Vec<PlayerCard>),
    /// A single player's detail card.
    Detail(PlayerDetail),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub player_id: PlayerId,
    pub name: String,
    pub id_label: String,
    pub image_url: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDetail {
    pub player_id: PlayerId,
    pub name: String,
    pub id_label: String,
    pub breed_label: String,
    pub image_url: String,
    pub image_alt: String,
    pub team_label: String,
}

/// List view for `players`. `None` (failed fetch) and an empty list both give
/// the empty state.
pub fn render_all_players(players: Option<&[Player]>) -> RosterView {
    match players {
        Some(players) if !players.is_empty() => {
            RosterView::Cards(players.iter().map(player_card).collect())
        }
        _ => RosterView::Empty {
            message: NO_PLAYERS_MESSAGE,
        },
    }
}

pub fn render_single_player(player: &Player) -> RosterView {
    let team_label = match player.team() {
        Some(team) => format!("Team: {}", team),
        None => UNASSIGNED.to_string(),
    };

    RosterView::Detail(PlayerDetail {
        player_id: player.id,
        name: player.name.clone(),
        id_label: id_label(player.id),
        breed_label: format!("Breed: {}", player.breed),
        image_url: player.image_url.clone(),
        image_alt: player.name.clone(),
        team_label,
    })
}

fn player_card(player: &Player) -> PlayerCard {
    PlayerCard {
        player_id: player.id,
        name: player.name.clone(),
        id_label: id_label(player.id),
        image_url: player.image_url.clone(),
        image_alt: player.name.clone(),
    }
}

fn id_label(player_id: PlayerId) -> String {
    format!("ID: {}", player_id)
}
