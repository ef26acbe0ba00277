use yew::prelude::*;

/// Inline error message.
pub struct ErrorMessage;

impl Component for ErrorMessage {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="na-error">
                <span>{ "Error: " }</span>
                <span>{ ctx.props().message.clone() }</span>
            </div>
        }
    }
}

#[derive(Clone, Debug, Properties, PartialEq, Eq)]
pub struct Props {
    pub message: String,
}
