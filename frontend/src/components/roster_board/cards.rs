use yew::html::Scope;
use yew::prelude::*;

use crate::roster::view_model::{
    PlayerCard, PlayerDetail, BACK_LABEL, REMOVE_LABEL, SEE_DETAILS_LABEL,
};

use super::messages::Msg;
use super::state::RosterBoard;

pub fn player_card(card: &PlayerCard, busy: bool, link: &Scope<RosterBoard>) -> Html {
    let player_id = card.player_id;

    html! {
        <div class="player-card" key={player_id.to_string()}>
            <h2>{ card.name.clone() }</h2>
            <p>{ card.id_label.clone() }</p>
            <img src={card.image_url.clone()} alt={card.image_alt.clone()} />
            <button disabled={busy} onclick={link.callback(move |_| Msg::SeeDetails(player_id))}>
                { SEE_DETAILS_LABEL }
            </button>
            <button disabled={busy} onclick={link.callback(move |_| Msg::Remove(player_id))}>
                { REMOVE_LABEL }
            </button>
        </div>
    }
}

pub fn player_detail(detail: &PlayerDetail, busy: bool, link: &Scope<RosterBoard>) -> Html {
    html! {
        <div class="player-card">
            <h2>{ detail.name.clone() }</h2>
            <p>{ detail.id_label.clone() }</p>
            <p>{ detail.breed_label.clone() }</p>
            <img src={detail.image_url.clone()} alt={detail.image_alt.clone()} />
            <p>{ detail.team_label.clone() }</p>
            <button disabled={busy} onclick={link.callback(|_| Msg::BackToAll)}>
                { BACK_LABEL }
            </button>
        </div>
    }
}
