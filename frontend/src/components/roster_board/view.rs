use yew::html::Scope;
use yew::prelude::*;

use crate::roster::state::RosterState;
use crate::roster::view_model::RosterView;

use super::cards::{player_card, player_detail};
use super::form::new_player_form;
use super::messages::Msg;
use super::state::RosterBoard;

/// Error banner, content region and form container.
pub fn view(board: &RosterBoard, ctx: &Context<RosterBoard>) -> Html {
    let link = ctx.link();
    let roster = &board.roster;

    html! {
        <>
            { error_banner(roster, link) }
            <main>
                { content(roster, link) }
            </main>
            <div id="playerform">
                {
                    if roster.form_mounted() {
                        new_player_form(roster, link)
                    } else {
                        html! {}
                    }
                }
            </div>
        </>
    }
}

fn content(roster: &RosterState, link: &Scope<RosterBoard>) -> Html {
    let busy = roster.is_busy();
    match roster.view() {
        RosterView::Loading => html! { <p class="loading">{"Loading players..."}</p> },
        RosterView::Empty { message } => html! { <p class="no-players">{ *message }</p> },
        RosterView::Cards(cards) => cards
            .iter()
            .map(|card| player_card(card, busy, link))
            .collect::<Html>(),
        RosterView::Detail(detail) => player_detail(detail, busy, link),
    }
}

fn error_banner(roster: &RosterState, link: &Scope<RosterBoard>) -> Html {
    match roster.last_error() {
        Some(message) => html! {
            <div class="error-banner" role="alert">
                <span>{ message.to_string() }</span>
                <button onclick={link.callback(|_| Msg::DismissError)}>{"✕"}</button>
            </div>
        },
        None => html! {},
    }
}
