use yew::prelude::*;

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="na-not-found">
                <h1>{ "404" }</h1>
                <p>{ "This page does not exist." }</p>
            </div>
        }
    }
}
