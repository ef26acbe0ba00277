use gloo_events::EventListener;
use neon_arcade_core::swap::{self, PanelState, SwapPanel};
use yew::prelude::*;

use crate::components::error::ErrorMessage;
use crate::components::loader::Loader;
use crate::statics::config;
use crate::utils;

/// The floating swap trigger and its overlay panel.
///
/// The panel state machine lives in [`SwapPanel`]; this component owns the
/// iframe element, the resize subscription and nothing else. Below the
/// breakpoint neither the trigger nor the panel is rendered.
pub struct SwapWidget {
    panel: SwapPanel,
    viewport_width: u32,
    _resize: EventListener,
}

impl Component for SwapWidget {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // The integrator id is read once; the panel keeps it for the
        // lifetime of the page.
        let integrator_id = config().integrator_id().map(ToOwned::to_owned);

        // Every resize event recomputes synchronously, no debouncing.
        let link = ctx.link().clone();
        let resize = EventListener::new(&utils::window(), "resize", move |_| {
            link.send_message(Message::Resize(utils::viewport_width()));
        });

        Self {
            panel: SwapPanel::new(integrator_id),
            viewport_width: utils::viewport_width(),
            _resize: resize,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Toggle => self.panel.toggle(),
            // Late signals arriving after the panel was closed are dropped
            // by the state machine.
            Message::ResourceLoaded => self.panel.resource_loaded(),
            Message::ResourceFailed => self
                .panel
                .resource_failed(String::from("The swap widget failed to load")),
            Message::Resize(width) => self.viewport_width = width,
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !swap::is_visible(self.viewport_width) {
            return html! {};
        }

        let onclick = ctx.link().callback(|_| Message::Toggle);

        let trigger = if self.panel.state().is_open() {
            html! {
                <button class="na-swap-trigger" {onclick} title="Close swap panel">
                    <i aria-hidden="true" class="fa-solid fa-xmark"></i>
                    <span class="sr-only">{ "Close" }</span>
                </button>
            }
        } else {
            html! {
                <button class="na-swap-trigger" {onclick} title="Swap tokens">
                    <i aria-hidden="true" class="fa-solid fa-right-left"></i>
                    <span>{ "Swap" }</span>
                </button>
            }
        };

        html! {
            <>
                { trigger }
                { self.render_panel(ctx) }
            </>
        }
    }
}

impl SwapWidget {
    fn render_panel(&self, ctx: &Context<Self>) -> Html {
        let overlay = match self.panel.state() {
            PanelState::Closed => return html! {},
            PanelState::Loading => html! { <Loader /> },
            PanelState::Ready => html! {},
            PanelState::Failed(message) => html! {
                <ErrorMessage message={message.clone()} />
            },
        };

        let onload = ctx.link().callback(|_| Message::ResourceLoaded);
        let onerror = ctx.link().callback(|_| Message::ResourceFailed);

        // Always present while the panel is open.
        let src = self.panel.request_url().unwrap_or_default().to_owned();

        html! {
            <div class="na-swap-panel">
                { overlay }
                <iframe title="swap_widget" {src} {onload} {onerror} width="100%" height="100%" />
            </div>
        }
    }
}

pub enum Message {
    Toggle,
    ResourceLoaded,
    ResourceFailed,
    Resize(u32),
}
