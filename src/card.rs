use yew::prelude::*;

use crate::actions::{action_for, run, Control};
use crate::avatar::Avatar;
use crate::profiles::Profile;

/// Layout flavour of a card. Content is identical across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Featured,
    Standard,
}

impl Variant {
    fn card_class(self) -> &'static str {
        match self {
            Variant::Featured => "profile-card profile-card--featured reveal",
            Variant::Standard => "profile-card profile-card--standard reveal",
        }
    }

    fn header_class(self) -> &'static str {
        match self {
            Variant::Featured => "card-header card-header--row",
            Variant::Standard => "card-header card-header--stacked",
        }
    }
}

/// CSS entrance timing. Only ever feeds an inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    pub fn style(self) -> String {
        format!(
            "animation-delay: {}ms; animation-duration: {}ms;",
            self.delay_ms, self.duration_ms
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub profile: &'static Profile,
    pub variant: Variant,
    pub reveal: Reveal,
}

fn action_button(profile: &'static Profile, control: Control, class: &'static str) -> Html {
    let action = action_for(profile, control);
    let onclick = Callback::from(move |_: MouseEvent| run(&action));
    let aria = format!("{} {}", control.label(), profile.name);

    html! {
        <button type="button" {class} aria-label={aria} {onclick}>
            { control.label() }
        </button>
    }
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let profile = props.profile;

    html! {
        <article class={props.variant.card_class()} style={props.reveal.style()}>
            <div class="card-body">
                <div class={props.variant.header_class()}>
                    <Avatar name={profile.name} src={profile.image} />
                    <div class="identity">
                        <h2 class="profile-name">{ profile.name }</h2>
                        <p class="profile-role">{ profile.role }</p>
                        if let Some(specialization) = profile.specialization {
                            <span class="chip chip-specialization">{ specialization }</span>
                        }
                        if !profile.achievements.is_empty() {
                            <div class="chips">
                                { for profile.achievements.iter().map(|a| html! {
                                    <span class="chip chip-achievement">{ *a }</span>
                                }) }
                            </div>
                        }
                    </div>
                </div>
                <p class="profile-description">{ profile.description }</p>
            </div>
            <footer class="card-actions">
                { action_button(profile, Control::Connect, "btn btn-primary") }
                { action_button(profile, Control::Contact, "btn btn-outline") }
            </footer>
        </article>
    }
}
