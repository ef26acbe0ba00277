use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

use crate::services::messagelog::MessageLogBus;

/// The dismissible diagnostics overlay fed by
/// [`MessageLog`](crate::services::MessageLog).
pub struct MessageLog {
    log: Vec<String>,
    _producer: Box<dyn Bridge<MessageLogBus>>,
}

impl Component for MessageLog {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            log: Vec::new(),
            _producer: MessageLogBus::bridge(ctx.link().callback(Message::Append)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Append(msg) => self.log.push(msg),
            Message::Remove(index) => {
                self.log.remove(index);
            }
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let msgs: Html = self
            .log
            .iter()
            .enumerate()
            .map(|(index, msg)| {
                let onclick = ctx.link().callback(move |_| Message::Remove(index));

                html! {
                    <div class="na-msglog-msg">
                        <button {onclick} title="Dismiss">
                            <i aria-hidden="true" class="fa-solid fa-xmark"></i>
                            <span class="sr-only">{ "Dismiss" }</span>
                        </button>
                        <span>{ msg }</span>
                    </div>
                }
            })
            .collect();

        html! {
            <div class="na-msglog">
                { msgs }
            </div>
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Append(String),
    Remove(usize),
}
