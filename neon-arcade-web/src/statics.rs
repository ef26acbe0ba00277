use std::mem::MaybeUninit;

use neon_arcade_core::Game;
use serde::{Deserialize, Serialize};

/// The global config.
///
/// This instance always lives for the lifetime of the program. It is set
/// once before the app starts and never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Id of the element the app mounts at.
    // We never need to resize this, so `Box<str>` saves us 1 * usize of space.
    pub mountpoint: Box<str>,
    /// Integrator id forwarded to the embedded swap widget. A missing id is
    /// tolerated and left out of the widget payload.
    #[serde(default)]
    pub integrator_id: Option<Box<str>>,
    /// The game catalog, one page per entry.
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Config {
    #[inline]
    pub fn mountpoint(&self) -> &str {
        &self.mountpoint
    }

    #[inline]
    pub fn integrator_id(&self) -> Option<&str> {
        self.integrator_id.as_deref()
    }

    /// Returns the catalog entry with the given page slug.
    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }
}

static mut CONFIG: MaybeUninit<Config> = MaybeUninit::uninit();

#[inline]
pub fn config() -> &'static Config {
    // SAFETY: `set_config` was called at the start of the program, CONFIG
    // is initialized.
    unsafe { CONFIG.assume_init_ref() }
}

/// Sets the config. You must call this function only once during the
/// lifetime of the program.
///
/// # Safety
///
/// While this function executes there must be no references to the config. A
/// reference can be obtained by calling [`config`]. You must also only call
/// this function once in the lifetime of the program.
#[inline]
pub(super) unsafe fn set_config(config: Config) {
    CONFIG.write(config);
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_config_from_json() {
        let config: Config = serde_json::from_str(
            r#"{
                "mountpoint": "main",
                "integratorId": "neon-arcade-prod",
                "games": [
                    {
                        "id": "starfall",
                        "title": "Starfall",
                        "description": "A fast arena shooter.",
                        "image": "/assets/games/starfall.webp",
                        "platforms": "Available on PC and mobile"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.mountpoint(), "main");
        assert_eq!(config.integrator_id(), Some("neon-arcade-prod"));
        assert!(config.game("starfall").is_some());
        assert!(config.game("unknown").is_none());
    }

    #[test]
    fn test_config_integrator_id_optional() {
        let config: Config = serde_json::from_str(r#"{ "mountpoint": "main" }"#).unwrap();

        assert_eq!(config.integrator_id(), None);
        assert!(config.games.is_empty());
    }
}
