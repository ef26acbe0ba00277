//! The configuration payload of the embedded swap widget.
//!
//! The widget treats the serialized payload as an opaque versioned contract:
//! key names, key order and the percent-encoding of the `config` query
//! parameter all have to match what the widget expects. Everything except
//! the integrator id is fixed.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::{json, Value};

/// Base URL of the embedded widget.
pub const IFRAME_ENDPOINT: &str = "https://studio.squidrouter.com/iframe";

/// API endpoint baked into the payload.
const API_URL: &str = "https://v2.api.squidrouter.com";

/// Characters kept verbatim by ECMA-262 `encodeURIComponent`. The widget
/// decodes the `config` parameter with its JavaScript counterpart.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The configuration payload handed to the embedded swap widget.
///
/// Keys are emitted in declaration order; a missing integrator id drops the
/// `integratorId` key entirely instead of sending an empty value.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    integrator_id: Option<String>,
    theme: Value,
    theme_type: &'static str,
    api_url: &'static str,
    price_impact_warnings: PriceImpactWarnings,
    initial_assets: InitialAssets,
    load_previous_state_from_local_storage: bool,
}

#[derive(Copy, Clone, Debug, Serialize)]
struct PriceImpactWarnings {
    warning: u32,
    critical: u32,
}

#[derive(Clone, Debug, Serialize)]
struct InitialAssets {
    from: AssetRef,
    to: AssetRef,
}

/// A token on a chain, both sides identified by the widget's own id scheme.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetRef {
    chain_id: &'static str,
    address: &'static str,
}

impl SwapConfig {
    /// Builds the payload for `integrator_id`.
    pub fn new(integrator_id: Option<String>) -> Self {
        Self {
            integrator_id,
            theme: theme(),
            theme_type: "dark",
            api_url: API_URL,
            price_impact_warnings: PriceImpactWarnings {
                warning: 3,
                critical: 5,
            },
            initial_assets: InitialAssets {
                // USDC on Base to the wormhole-wrapped form on Moonbeam.
                from: AssetRef {
                    chain_id: "8453",
                    address: "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
                },
                to: AssetRef {
                    chain_id: "1284",
                    address: "0xffffffff30478fafbe935e466da114e14fb3563d",
                },
            },
            load_previous_state_from_local_storage: true,
        }
    }

    /// Serializes the payload into the full iframe request URL.
    pub fn request_url(&self) -> String {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                // Unreachable with the fixed payload above; an empty config
                // lets the widget fall back to its defaults.
                log::error!("Failed to serialize swap config: {}", err);
                String::new()
            }
        };

        format!(
            "{}?config={}",
            IFRAME_ENDPOINT,
            utf8_percent_encode(&json, COMPONENT)
        )
    }
}

/// The fixed theme block.
fn theme() -> Value {
    json!({
        "borderRadius": {
            "button-lg-primary": "1.25rem",
            "button-lg-secondary": "1.25rem",
            "button-lg-tertiary": "1.25rem",
            "button-md-primary": "0.9375rem",
            "button-md-secondary": "0.9375rem",
            "button-md-tertiary": "0.9375rem",
            "button-sm-primary": "1.25rem",
            "button-sm-secondary": "1.25rem",
            "button-sm-tertiary": "1.25rem",
            "container": "1.25rem",
            "input": "0.9375rem",
            "menu-sm": "0.65rem",
            "menu-lg": "0.65rem",
            "modal": "1.25rem"
        },
        "fontSize": {
            "caption": "0.875rem",
            "body-small": "1.14375rem",
            "body-medium": "1.40625rem",
            "body-large": "1.75625rem",
            "heading-small": "2.1875rem",
            "heading-medium": "3.08125rem",
            "heading-large": "4.40625rem"
        },
        "fontWeight": {
            "caption": "400",
            "body-small": "400",
            "body-medium": "400",
            "body-large": "400",
            "heading-small": "400",
            "heading-medium": "400",
            "heading-large": "400"
        },
        "fontFamily": {
            "squid-main": "Geist, sans-serif"
        },
        "boxShadow": {
            "container": "0px 2px 4px 0px rgba(0, 0, 0, 0.20), 0px 5px 50px -1px rgba(0, 0, 0, 0.33)"
        },
        "color": {
            "grey-100": "#FBFBFD",
            "grey-200": "#EDEFF3",
            "grey-300": "#D1D6E0",
            "grey-400": "#A7ABBE",
            "grey-500": "#8A8FA8",
            "grey-600": "#676B7E",
            "grey-700": "#4C515D",
            "grey-800": "#292C32",
            "grey-900": "#17191C",
            "royal-300": "#D9BEF4",
            "royal-400": "#B893EC",
            "royal-500": "#f6339a",
            "royal-600": "#8353C5",
            "royal-700": "#6B45A1",
            "status-positive": "#7AE870",
            "status-negative": "#FF4D5B",
            "status-partial": "#F3AF25",
            "highlight-700": "#E4FE53",
            "animation-bg": "#f6339a",
            "animation-text": "#FBFBFD",
            "button-lg-primary-bg": "#f6339a",
            "button-lg-primary-text": "#FBFBFD",
            "button-lg-secondary-bg": "#FBFBFD",
            "button-lg-secondary-text": "#292C32",
            "button-lg-tertiary-bg": "#292C32",
            "button-lg-tertiary-text": "#D1D6E0",
            "button-md-primary-bg": "#f6339a",
            "button-md-primary-text": "#FBFBFD",
            "button-md-secondary-bg": "#FBFBFD",
            "button-md-secondary-text": "#292C32",
            "button-md-tertiary-bg": "#292C32",
            "button-md-tertiary-text": "#D1D6E0",
            "button-sm-primary-bg": "#9E79D2",
            "button-sm-primary-text": "#FBFBFD",
            "button-sm-secondary-bg": "#FBFBFD",
            "button-sm-secondary-text": "#292C32",
            "button-sm-tertiary-bg": "#292C32",
            "button-sm-tertiary-text": "#D1D6E0",
            "input-bg": "#17191C",
            "input-placeholder": "#676B7E",
            "input-text": "#D1D6E0",
            "input-selection": "#D1D6E0",
            "menu-bg": "#17191CA8",
            "menu-text": "#FBFBFDA8",
            "menu-backdrop": "#FBFBFD1A",
            "modal-backdrop": "#17191C54"
        }
    })
}
