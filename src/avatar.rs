//! Avatar image with an initials fallback.
//!
//! Each `Avatar` owns its own failure flag. Once the image reports an error
//! the flag flips and the card keeps showing initials for as long as the
//! component lives.

use yew::prelude::*;

use crate::config::{INITIALS_CAP, INITIALS_EMPTY};

/// First character of every whitespace-separated token, uppercased.
pub fn initials(name: &str) -> String {
    let glyph: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(INITIALS_CAP)
        .collect();

    if glyph.is_empty() {
        INITIALS_EMPTY.to_string()
    } else {
        glyph
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarView {
    Image {
        src: &'static str,
        alt: &'static str,
    },
    Initials(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvatarState {
    failed: bool,
}

impl AvatarState {
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Returns true only on the first call.
    pub fn mark_failed(&mut self) -> bool {
        let changed = !self.failed;
        self.failed = true;
        changed
    }

    pub fn resolve(&self, name: &'static str, src: &'static str) -> AvatarView {
        if self.failed() {
            AvatarView::Initials(initials(name))
        } else {
            AvatarView::Image { src, alt: name }
        }
    }
}

pub fn avatar_html(view: &AvatarView, onerror: Callback<Event>) -> Html {
    match view {
        AvatarView::Image { src, alt } => html! {
            <div class="avatar">
                <img class="avatar-image" src={*src} alt={*alt} {onerror} />
            </div>
        },
        AvatarView::Initials(glyph) => html! {
            <div class="avatar">
                <span class="avatar-fallback">{ glyph.clone() }</span>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: &'static str,
    pub src: &'static str,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let state = use_state(AvatarState::default);

    let onerror = {
        let state = state.clone();
        let name = props.name;
        Callback::from(move |_: Event| {
            let mut next = *state;
            if next.mark_failed() {
                gloo::console::log!(format!("avatar for {name} failed to load, using initials"));
                state.set(next);
            }
        })
    };

    avatar_html(&state.resolve(props.name, props.src), onerror)
}
