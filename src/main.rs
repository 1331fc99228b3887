// Leadership Team page (Rust + Yew + WASM)

mod actions;
mod avatar;
mod card;
mod config;
mod page;
mod profiles;

#[cfg(test)]
mod testing;

use yew::prelude::*;

use page::LeadershipPage;

#[function_component(App)]
fn app() -> Html {
    html! {
        <LeadershipPage featured={profiles::featured()} team={profiles::team()} />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
