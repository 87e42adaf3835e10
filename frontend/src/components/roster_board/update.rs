//! Message handling for the roster board.
//!
//! Actions that talk to the API first claim the pending slot in
//! `RosterState`; if another operation is still running the message is
//! dropped. The spawned task reports back with `Msg::Refreshed` or
//! `Msg::PlayerOpened`, which releases the slot.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::roster::state::PendingOp;
use crate::roster::workflow;

use super::helpers::{current_player_route, ToastNotifier};
use super::messages::Msg;
use super::state::RosterBoard;

pub fn update(board: &mut RosterBoard, ctx: &Context<RosterBoard>, msg: Msg) -> bool {
    match msg {
        Msg::RosterLoaded(fetched) => {
            board.roster.show_roster(fetched);
            board.roster.mount_form();

            if let Some(player_id) = current_player_route() {
                ctx.link().send_message(Msg::OpenPlayer(player_id));
            }
            true
        }
        Msg::OpenPlayer(player_id) => {
            if !board.roster.begin(PendingOp::OpenPlayer(player_id)) {
                return false;
            }
            let api = board.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let fetched = workflow::load_player(&*api, player_id).await;
                link.send_message(Msg::PlayerOpened(fetched));
            });
            true
        }
        Msg::PlayerOpened(fetched) => {
            board.roster.finish_open(fetched);
            true
        }
        Msg::SeeDetails(player_id) => board.roster.see_details(player_id),
        Msg::Remove(player_id) => {
            if !board.roster.begin(PendingOp::Remove(player_id)) {
                return false;
            }
            let api = board.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let refresh =
                    workflow::remove_and_refresh(&*api, &ToastNotifier, player_id).await;
                link.send_message(Msg::Refreshed(refresh));
            });
            true
        }
        Msg::BackToAll => {
            if !board.roster.begin(PendingOp::Refresh) {
                return false;
            }
            let api = board.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let refresh = workflow::refresh(&*api).await;
                link.send_message(Msg::Refreshed(refresh));
            });
            true
        }
        Msg::FormInput(field, value) => {
            board.roster.form.set(field, value);
            true
        }
        Msg::SubmitForm => {
            if !board.roster.begin(PendingOp::Create) {
                return false;
            }
            let request = board.roster.form.to_request();
            let api = board.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let refresh =
                    workflow::create_and_refresh(&*api, &ToastNotifier, request).await;
                link.send_message(Msg::Refreshed(refresh));
            });
            true
        }
        Msg::Refreshed(refresh) => {
            board.roster.finish(refresh);
            true
        }
        Msg::DismissError => board.roster.dismiss_error(),
    }
}
