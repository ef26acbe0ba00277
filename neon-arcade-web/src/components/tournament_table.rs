use std::rc::Rc;

use chrono::{Local, Utc};
use neon_arcade_core::{Category, Schedule, Tournament};
use yew::prelude::*;

/// The tabbed Live/Upcoming/Past tournament section of a game page.
///
/// The schedule is rebucketized on every render against the wall clock, so a
/// tournament crossing a boundary moves tabs on the next render.
pub struct TournamentTable {
    schedule: Schedule,
    timezone: Local,
}

impl Component for TournamentTable {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            schedule: Schedule::new(ctx.props().tournaments.to_vec()),
            timezone: Local::now().timezone(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        // A new tournament list resets the schedule; the tab selection is
        // page local state and starts over at Live.
        self.schedule = Schedule::new(ctx.props().tournaments.to_vec());
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Select(category) => {
                self.schedule.select(category);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.schedule.has_any_tournaments() {
            return html! {
                <div class="na-tournaments na-tournaments-empty">
                    <h2>{ "No Tournaments Yet" }</h2>
                    <p>{ "Stay tuned! Exciting tournaments are coming soon. Check back for updates." }</p>
                </div>
            };
        }

        let selected = self.schedule.selected();

        let tabs: Html = Category::all()
            .into_iter()
            .map(|category| {
                let class = if category == selected {
                    "na-tab na-tab-active"
                } else {
                    "na-tab"
                };

                let onclick = ctx.link().callback(move |_| Message::Select(category));

                html! {
                    <button {class} {onclick}>{ category.to_string() }</button>
                }
            })
            .collect();

        // The reference instant is captured freshly on every render pass.
        let now = Utc::now();

        let rows: Html = self
            .schedule
            .visible(now)
            .into_iter()
            .map(|tournament| self.render_row(tournament))
            .collect();

        html! {
            <div class="na-tournaments">
                <h2>{ "Tournaments" }</h2>
                <div class="na-tabs">{ tabs }</div>
                <table class="na-tournament-table">
                    <tr class="table-head">
                        <th>{ "Tournament" }</th>
                        <th>{ "Prize" }</th>
                        <th>{ "Start Time" }</th>
                        <th>{ "End Time" }</th>
                    </tr>
                    { rows }
                </table>
            </div>
        }
    }
}

impl TournamentTable {
    fn render_row(&self, tournament: &Tournament) -> Html {
        let start = tournament
            .start_time
            .with_timezone(&self.timezone)
            .format("%B %d, %Y %H:%M")
            .to_string();
        let end = tournament
            .end_time
            .with_timezone(&self.timezone)
            .format("%B %d, %Y %H:%M")
            .to_string();

        let name = match &tournament.link {
            Some(link) => html! {
                <a href={link.clone()} target="_blank" rel="noopener noreferrer">
                    { tournament.name.clone() }
                </a>
            },
            None => html! { tournament.name.clone() },
        };

        html! {
            <tr>
                <td>{ name }</td>
                <td>{ tournament.prize.clone() }</td>
                <td>{ start }</td>
                <td>{ end }</td>
            </tr>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Props {
    pub tournaments: Rc<Vec<Tournament>>,
}

pub enum Message {
    Select(Category),
}
