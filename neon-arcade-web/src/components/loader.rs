use yew::prelude::*;

/// Centered loading indicator, shown while the embedded resource loads.
pub struct Loader;

impl Component for Loader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="na-loader">
                <span>{ "Loading..." }</span>
            </div>
        }
    }
}
