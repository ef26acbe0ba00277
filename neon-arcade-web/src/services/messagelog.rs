use std::collections::HashSet;

use yew_agent::{Agent, AgentLink, Context, Dispatched, HandlerId};

/// Page wide diagnostics.
///
/// A message dispatched here shows up in the dismissible overlay rendered by
/// the message log component. Failures reported this way never abort the
/// page; they only surface to the user.
pub struct MessageLog;

impl MessageLog {
    /// Dispatches a new error message to the message log.
    #[inline]
    pub fn error<T>(msg: T)
    where
        T: ToString,
    {
        MessageLogBus::dispatcher().send(msg.to_string());
    }
}

pub struct MessageLogBus {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
}

impl Agent for MessageLogBus {
    type Reach = Context<Self>;
    type Message = ();
    type Input = String;
    type Output = String;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        for sub in self.subscribers.iter() {
            self.link.respond(*sub, msg.clone());
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
