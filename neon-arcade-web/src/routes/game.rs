use std::rc::Rc;

use neon_arcade_core::{Game, Tournament};
use yew::prelude::*;

use crate::components::home_button::HomeButton;
use crate::components::tournament_table::TournamentTable;
use crate::routes::not_found::NotFound;
use crate::services::MessageLog;
use crate::statics::config;
use crate::Title;

/// A game detail page composed from the configured catalog entry.
///
/// The page itself carries no logic: it passes the catalog data through to
/// the view and hands the tournament list to [`TournamentTable`].
pub struct GamePage {
    tournaments: Rc<Vec<Tournament>>,
}

impl Component for GamePage {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            tournaments: Rc::new(load_tournaments(&ctx.props().id)),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        self.tournaments = Rc::new(load_tournaments(&ctx.props().id));
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let game = match config().game(&ctx.props().id) {
            Some(game) => game,
            None => return html! { <NotFound /> },
        };

        html! {
            <section class="na-game-page">
                <header class="na-game-header">
                    <HomeButton />
                </header>
                <div class="na-game-hero">
                    <img class="na-game-image" src={game.image.clone()} alt={game.title.clone()} />
                    <div class="na-game-info">
                        <h1>{ game.title.clone() }</h1>
                        <p class="na-game-description">{ game.description.clone() }</p>
                        <p class="na-game-platforms">{ game.platforms.clone() }</p>
                        <div class="na-play-links">{ play_links(game) }</div>
                    </div>
                </div>
                <TournamentTable tournaments={self.tournaments.clone()} />
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        Title::clear();
    }
}

fn play_links(game: &Game) -> Html {
    game.play_links
        .iter()
        .map(|link| {
            let icon = match &link.icon {
                Some(icon) => html! { <i aria-hidden="true" class={icon.clone()}></i> },
                None => html! {},
            };

            html! {
                <a class="na-play-button" href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                    { icon }
                    <span>{ link.label.clone() }</span>
                </a>
            }
        })
        .collect()
}

/// Parses the raw tournament list of the game with the given id.
///
/// A tournament with a malformed timestamp is excluded from the schedule and
/// reported through the message log; the rest of the page renders normally.
fn load_tournaments(id: &str) -> Vec<Tournament> {
    let game = match config().game(id) {
        Some(game) => game,
        None => return Vec::new(),
    };

    Title::set(&game.title);

    let mut tournaments = Vec::with_capacity(game.tournaments.len());

    for raw in &game.tournaments {
        match raw.parse() {
            Ok(tournament) => tournaments.push(tournament),
            Err(err) => {
                log::error!("Skipping tournament {:?}: {}", raw.name, err);
                MessageLog::error(format!("Tournament {:?} was skipped: {}", raw.name, err));
            }
        }
    }

    tournaments
}

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
pub struct Props {
    pub id: String,
}
