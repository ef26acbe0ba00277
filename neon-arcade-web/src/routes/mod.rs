pub mod game;
pub mod gamelist;
pub mod not_found;

use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::Routable;

use crate::components::message_log::MessageLog;
use crate::components::swap_widget::SwapWidget;

use game::GamePage;
use gamelist::GameList;
use not_found::NotFound;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <div class="na-main">
                    <Switch<Route> render={Switch::render(switch)} />
                </div>
                <SwapWidget />
                <MessageLog />
            </BrowserRouter>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Index,
    #[at("/games/:id")]
    Game { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: &Route) -> Html {
    match route {
        Route::Index => html! { <GameList /> },
        Route::Game { id } => html! { <GamePage id={id.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
