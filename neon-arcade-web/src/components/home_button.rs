use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// The header link back to the game catalog.
pub struct HomeButton;

impl Component for HomeButton {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Link<Route> classes="na-home-button" to={Route::Index}>
                <i aria-hidden="true" class="fa-solid fa-house"></i>
                <span>{ "Home" }</span>
            </Link<Route>>
        }
    }
}
