//! The leadership page: heading, one featured card, then the team grid.

use yew::prelude::*;

use crate::card::{ProfileCard, Reveal, Variant};
use crate::config::{
    FEATURED_REVEAL_MS, HEADING_REVEAL_MS, PAGE_HEADING, PAGE_SUBHEADING, STAGGER_STEP_MS,
    TEAM_REVEAL_MS,
};
use crate::profiles::Profile;

/// Entrance delay for the team card at `index`.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

#[derive(Properties, PartialEq)]
pub struct LeadershipPageProps {
    pub featured: &'static Profile,
    pub team: &'static [Profile],
}

#[function_component(LeadershipPage)]
pub fn leadership_page(props: &LeadershipPageProps) -> Html {
    let heading = Reveal { delay_ms: 0, duration_ms: HEADING_REVEAL_MS };
    let featured = Reveal { delay_ms: 0, duration_ms: FEATURED_REVEAL_MS };

    html! {
        <div class="page">
            <div class="wrap">
                <header class="page-heading reveal reveal--down" style={heading.style()}>
                    <h1>{ PAGE_HEADING }</h1>
                    <p>{ PAGE_SUBHEADING }</p>
                </header>

                <section class="featured">
                    <ProfileCard profile={props.featured} variant={Variant::Featured} reveal={featured} />
                </section>

                <section class="team-grid">
                    { for props.team.iter().enumerate().map(|(i, profile)| html! {
                        <ProfileCard
                            key={i}
                            {profile}
                            variant={Variant::Standard}
                            reveal={Reveal { delay_ms: stagger_delay_ms(i), duration_ms: TEAM_REVEAL_MS }}
                        />
                    }) }
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{featured, team};
    use crate::testing::render;

    fn cards(html: &str) -> Vec<&str> {
        html.split("<article").skip(1).collect()
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(2), 200);
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[tokio::test]
    async fn sample_page_layout() {
        let html = render::<LeadershipPage>(|| LeadershipPageProps {
            featured: featured(),
            team: team(),
        })
        .await;

        assert!(html.contains("<h1>Leadership Team</h1>"));
        assert!(html.contains("petroleum geoscience education and research"));

        let cards = cards(&html);
        assert_eq!(cards.len(), 3);

        let first = cards[0];
        assert!(first.contains("profile-card--featured"));
        assert!(first.contains("Dr. Satish Kumar Sinha"));
        assert_eq!(first.matches("chip-achievement").count(), 3);
        assert_eq!(first.matches("chip-specialization").count(), 0);

        for card in &cards[1..] {
            assert!(card.contains("profile-card--standard"));
            assert_eq!(card.matches("chip-achievement").count(), 0);
            assert_eq!(card.matches("chip-specialization").count(), 1);
        }
    }

    #[tokio::test]
    async fn team_cards_are_staggered_in_list_order() {
        let html = render::<LeadershipPage>(|| LeadershipPageProps {
            featured: featured(),
            team: team(),
        })
        .await;

        let cards = cards(&html);
        assert!(cards[1].contains("Kishan Raj"));
        assert!(cards[1].contains("animation-delay: 0ms"));
        assert!(cards[2].contains("Abhishek Pandey"));
        assert!(cards[2].contains("animation-delay: 100ms"));
    }

    #[tokio::test]
    async fn empty_team_renders_only_featured_card() {
        let html = render::<LeadershipPage>(|| LeadershipPageProps {
            featured: featured(),
            team: &[],
        })
        .await;

        assert_eq!(cards(&html).len(), 1);
        assert!(html.contains("team-grid"));
    }
}
