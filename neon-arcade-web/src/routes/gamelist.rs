use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::statics::config;
use crate::Title;

/// The game catalog, one card per configured game.
pub struct GameList;

impl Component for GameList {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::clear();

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let games: Html = config()
            .games
            .iter()
            .map(|game| {
                html! {
                    <Link<Route> classes="na-game-card" to={Route::Game { id: game.id.clone() }}>
                        <img src={game.image.clone()} alt={game.title.clone()} />
                        <h2>{ game.title.clone() }</h2>
                        <p>{ game.platforms.clone() }</p>
                    </Link<Route>>
                }
            })
            .collect();

        html! {
            <div class="na-game-list">
                <h1>{ "Games" }</h1>
                <div class="na-game-grid">{ games }</div>
            </div>
        }
    }
}
