//! Static profile table rendered by the page.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub linkedin_url: &'static str,
    pub email: &'static str,
    pub specialization: Option<&'static str>,
    /// Empty slice means the profile has no achievements to show.
    pub achievements: &'static [&'static str],
}

static FEATURED: Profile = Profile {
    name: "Dr. Satish Kumar Sinha",
    role: "Faculty Advisor",
    description: "Head of Department, Petroleum Engineering and GeoEngineering, serves as our \
                  chapter's distinguished faculty advisor. Under his visionary leadership, our \
                  organization has achieved unprecedented milestones.",
    image: "/satish_kumar_sinha.jpg",
    linkedin_url: "https://www.linkedin.com/in/satish-sinha-a7a8b4a7",
    email: "head_pegs@rgipt.ac.in",
    specialization: None,
    achievements: &[
        "Ph.D. in Petroleum Engineering",
        "20+ Years of Industry Experience",
        "Published 50+ Research Papers",
    ],
};

static TEAM: [Profile; 2] = [
    Profile {
        name: "Kishan Raj",
        role: "President",
        description: "A final-year Petroleum Engineering student at RGIPT with expertise in \
                      energy transition and CCUS.",
        image: "/kr.jpg",
        linkedin_url: "https://www.linkedin.com/in/kishan-raj-562322233/",
        email: "21pe3006@rgipt.ac.in",
        specialization: Some("Drilling Technology & CCUS"),
        achievements: &[],
    },
    Profile {
        name: "Abhishek Pandey",
        role: "Vice President",
        description: "A distinguished student specializing in reservoir engineering and \
                      geomechanics.",
        image: "/abhishek_pandey.jpg",
        linkedin_url: "https://www.linkedin.com/in/abhishek-pandey/",
        email: "21pe3002@rgipt.ac.in",
        specialization: Some("Reservoir Engineering"),
        achievements: &[],
    },
];

pub fn featured() -> &'static Profile {
    &FEATURED
}

pub fn team() -> &'static [Profile] {
    &TEAM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_has_achievements_and_no_specialization() {
        let p = featured();
        assert_eq!(p.name, "Dr. Satish Kumar Sinha");
        assert_eq!(p.achievements.len(), 3);
        assert!(p.specialization.is_none());
    }

    #[test]
    fn team_members_have_specializations_only() {
        let team = team();
        assert_eq!(team.len(), 2);
        for p in team {
            assert!(p.specialization.is_some());
            assert!(p.achievements.is_empty());
        }
        assert_eq!(team[0].name, "Kishan Raj");
        assert_eq!(team[1].name, "Abhishek Pandey");
    }

    #[test]
    fn descriptions_are_single_spaced() {
        for p in std::iter::once(featured()).chain(team()) {
            assert!(!p.description.contains("  "), "{}", p.name);
            assert!(!p.description.contains('\n'), "{}", p.name);
        }
    }
}
