//! The floating swap panel.
//!
//! The panel embeds an external swap widget in an iframe. This module owns
//! its state machine; the actual frame element and the event subscriptions
//! live in the presentation layer.

mod config;

pub use config::{SwapConfig, IFRAME_ENDPOINT};

/// Viewport widths below this never show the panel or its trigger.
pub const MIN_VIEWPORT_WIDTH: u32 = 768;

/// Returns `true` if the panel and its trigger are shown at
/// `viewport_width`.
///
/// Pure function of the supplied width; the caller decides how the width is
/// observed.
#[inline]
pub fn is_visible(viewport_width: u32) -> bool {
    viewport_width >= MIN_VIEWPORT_WIDTH
}

/// The state of the swap panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// The resting state. The panel is hidden.
    Closed,
    /// The panel is open and the embedded resource has not finished loading.
    Loading,
    /// The panel is open and the embedded resource finished loading.
    Ready,
    /// The panel is open and the embedded resource reported a failure.
    Failed(String),
}

impl PanelState {
    /// Returns `true` for every state except [`PanelState::Closed`].
    #[inline]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// The swap panel state machine.
///
/// ```text
/// Closed --toggle--> Loading --resource_loaded--> Ready
///   ^                  |  |                         |
///   |                  |  +--resource_failed--> Failed
///   +-----toggle-------+-----------+----------------+
/// ```
///
/// Opening always starts a fresh load: there is no caching of "already
/// loaded" across a close/reopen cycle. Resource signals received while the
/// panel is closed are dropped.
#[derive(Clone, Debug)]
pub struct SwapPanel {
    state: PanelState,
    config: SwapConfig,
    request_url: Option<String>,
}

impl SwapPanel {
    /// Creates a new closed panel.
    ///
    /// The integrator id is read once here; a missing id is tolerated and
    /// simply left out of the configuration payload.
    pub fn new(integrator_id: Option<String>) -> Self {
        Self {
            state: PanelState::Closed,
            config: SwapConfig::new(integrator_id),
            request_url: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Returns the request URL of the embedded resource, or `None` while the
    /// panel is closed.
    #[inline]
    pub fn request_url(&self) -> Option<&str> {
        self.request_url.as_deref()
    }

    /// Opens a closed panel or closes an open one.
    ///
    /// Opening always enters [`PanelState::Loading`], even if the resource
    /// had finished loading before the panel was last closed. The request
    /// URL is rebuilt on every open.
    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.state = PanelState::Closed;
            self.request_url = None;
        } else {
            self.request_url = Some(self.config.request_url());
            self.state = PanelState::Loading;
        }
    }

    /// Signals that the embedded resource finished loading.
    ///
    /// Only a panel in [`PanelState::Loading`] moves to
    /// [`PanelState::Ready`]. Repeated signals and signals arriving while
    /// the panel is closed are dropped.
    pub fn resource_loaded(&mut self) {
        if self.state == PanelState::Loading {
            self.state = PanelState::Ready;
        }
    }

    /// Signals that the embedded resource failed to load.
    ///
    /// Every open state moves to [`PanelState::Failed`]; signals arriving
    /// while the panel is closed are dropped. The failure is recoverable:
    /// closing and reopening the panel starts a fresh load.
    pub fn resource_failed(&mut self, message: String) {
        if self.state.is_open() {
            self.state = PanelState::Failed(message);
        }
    }
}
