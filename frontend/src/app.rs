use crate::components::roster_board::RosterBoard;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="roster-app">
                <h1>{"Puppy Bowl Roster"}</h1>
                <RosterBoard />
            </div>
        }
    }
}
