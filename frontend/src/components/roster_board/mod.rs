//! Roster board: the application's controller component.
//!
//! It owns the content region (`<main>`) and the `#playerform` container and
//! wires the pure roster logic in `crate::roster` to Yew:
//! - `state`: the component struct (controller state + API client).
//! - `update`: message handling; spawns the async workflows.
//! - `view`, `cards`, `form`: `RosterView` and form state to `Html`.
//!
//! On first render the full roster is fetched; when it arrives the list is
//! drawn and the creation form is mounted.

use yew::platform::spawn_local;
use yew::prelude::*;

mod cards;
mod form;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::RosterBoard;

use crate::config::ApiConfig;
use crate::roster::workflow;

impl Component for RosterBoard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        RosterBoard::new(&ApiConfig::from_build_env())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let api = self.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let fetched = workflow::load_roster(&*api).await;
                link.send_message(Msg::RosterLoaded(fetched));
            });
        }
    }
}
