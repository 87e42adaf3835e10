use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::roster::form::FormField;
use crate::roster::state::RosterState;

use super::messages::Msg;
use super::state::RosterBoard;

/// Creation form. Inputs are controlled by `RosterState::form`, so clearing
/// the form state clears the inputs.
pub fn new_player_form(roster: &RosterState, link: &Scope<RosterBoard>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitForm
    });

    html! {
        <form id="new-player-form" {onsubmit}>
            { for FormField::ALL.iter().map(|field| text_input(*field, roster, link)) }
            <button type="submit" disabled={roster.is_busy()}>{"Add Player"}</button>
        </form>
    }
}

fn text_input(field: FormField, roster: &RosterState, link: &Scope<RosterBoard>) -> Html {
    html! {
        <input
            type="text"
            placeholder={field.placeholder()}
            value={roster.form.value(field).to_string()}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::FormInput(field, input.value())
            })}
        />
    }
}
