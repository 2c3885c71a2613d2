/// Canonical rule constants for builds and the stats engine.
///
/// These values are part of the shared numeric contract: two planners that
/// disagree on any of them will disagree on every derived stat.
pub struct BuildRules;

impl BuildRules {
    // ===== attributes =====
    pub const MIN_ATTRIBUTE: u8 = 1;
    pub const MAX_ATTRIBUTE: u8 = 99;
    /// Value every attribute takes in a freshly created build.
    pub const DEFAULT_ATTRIBUTE: u8 = 10;
    /// Subtracted from the attribute total to obtain the soul level.
    pub const SOUL_LEVEL_BASELINE: i32 = 79;

    // ===== build names (trimmed, counted in chars) =====
    pub const MIN_NAME_LEN: usize = 3;
    pub const MAX_NAME_LEN: usize = 50;

    // ===== usernames (trimmed, counted in chars) =====
    pub const MIN_USERNAME_LEN: usize = 3;
    /// Shown for builds whose owner never set a username.
    pub const ANONYMOUS_AUTHOR: &'static str = "Tarnished";

    // ===== fixed list capacities =====
    pub const TALISMAN_SLOTS: usize = 4;
    pub const SPELL_SLOTS: usize = 4;
    pub const TEAR_SLOTS: usize = 2;

    // ===== load tier breakpoints (fraction of max load) =====
    pub const MEDIUM_LOAD_RATIO: f64 = 0.30;
    pub const HEAVY_LOAD_RATIO: f64 = 0.70;
    pub const OVERLOAD_RATIO: f64 = 1.00;
}

/// Runtime-tunable planner settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Number of builds returned per page when browsing public builds.
    pub listing_page_size: usize,
}

impl PlannerConfig {
    pub const DEFAULT_LISTING_PAGE_SIZE: usize = 24;
    pub const MAX_LISTING_PAGE_SIZE: usize = 100;

    pub fn new() -> Self {
        Self {
            listing_page_size: Self::DEFAULT_LISTING_PAGE_SIZE,
        }
    }

    pub fn with_listing_page_size(listing_page_size: usize) -> Self {
        Self { listing_page_size }
    }

    /// Page size clamped to `1..=MAX_LISTING_PAGE_SIZE`.
    pub fn effective_page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.listing_page_size)
            .clamp(1, Self::MAX_LISTING_PAGE_SIZE)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
