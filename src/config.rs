// Page-level constants. Responsive breakpoints live in styles.css.

pub const PAGE_HEADING: &str = "Leadership Team";
pub const PAGE_SUBHEADING: &str =
    "Dedicated professionals driving innovation in petroleum geoscience education and research";

/// Gap between consecutive team card entrances.
pub const STAGGER_STEP_MS: u32 = 100;

pub const HEADING_REVEAL_MS: u32 = 600;
pub const FEATURED_REVEAL_MS: u32 = 700;
pub const TEAM_REVEAL_MS: u32 = 500;

/// Longest initials glyph shown in place of a broken avatar image.
pub const INITIALS_CAP: usize = 4;
pub const INITIALS_EMPTY: &str = "?";

pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";
