//! Outbound navigation requests issued by the card buttons.
//!
//! Neither action is awaited or observed; a malformed link or a missing mail
//! client is the host's business.

use wasm_bindgen::JsValue;

use crate::config::{NEW_CONTEXT_FEATURES, NEW_CONTEXT_TARGET};
use crate::profiles::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Connect,
    Contact,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Connect => "Connect",
            Control::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    OpenInNewContext { url: &'static str },
    ComposeMail { to: &'static str },
}

impl OutboundAction {
    /// The string handed to the host, unvalidated.
    pub fn target(&self) -> String {
        match self {
            OutboundAction::OpenInNewContext { url } => (*url).to_string(),
            OutboundAction::ComposeMail { to } => format!("mailto:{to}"),
        }
    }
}

pub fn action_for(profile: &Profile, control: Control) -> OutboundAction {
    match control {
        Control::Connect => OutboundAction::OpenInNewContext {
            url: profile.linkedin_url,
        },
        Control::Contact => OutboundAction::ComposeMail { to: profile.email },
    }
}

/// The two navigation primitives the page needs from its environment.
pub trait Host {
    fn open_in_new_context(&self, url: &str) -> Result<(), String>;
    fn navigate(&self, href: &str) -> Result<(), String>;
}

pub struct BrowserHost;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window".to_string())
}

fn js_err(context: &str, e: JsValue) -> String {
    format!("{context}: {e:?}")
}

impl Host for BrowserHost {
    fn open_in_new_context(&self, url: &str) -> Result<(), String> {
        // With noopener the browser hands back no window handle.
        window()?
            .open_with_url_and_target_and_features(url, NEW_CONTEXT_TARGET, NEW_CONTEXT_FEATURES)
            .map(|_| ())
            .map_err(|e| js_err("window.open failed", e))
    }

    fn navigate(&self, href: &str) -> Result<(), String> {
        window()?
            .location()
            .set_href(href)
            .map_err(|e| js_err("location change failed", e))
    }
}

pub fn dispatch(host: &impl Host, action: &OutboundAction) -> Result<(), String> {
    let target = action.target();
    match action {
        OutboundAction::OpenInNewContext { .. } => host.open_in_new_context(&target),
        OutboundAction::ComposeMail { .. } => host.navigate(&target),
    }
}

/// Fire-and-forget dispatch from a click handler.
pub fn run(action: &OutboundAction) {
    if let Err(e) = dispatch(&BrowserHost, action) {
        gloo::console::warn!(format!("{} not delivered: {e}", action.target()));
    }
}
