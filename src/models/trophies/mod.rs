//! Trophy (achievement) data.
//!
//! The trophy service splits its data between "earned" endpoints (per-account
//! progress, no display metadata) and "title" endpoints (display metadata, no
//! progress). The `with_metadata` variants here fetch both and merge them,
//! which costs double the rate limit.

mod groups;
mod summary;
mod titles;
mod trophy;

pub use groups::{TrophyGroup, TrophyGroupsSummary};
pub use summary::TrophySummary;
pub use titles::{TrophyTitle, TrophyTitlesPage};
pub use trophy::{TrophiesPage, Trophy, TrophyType};

pub(crate) use groups::{
    earned_trophy_groups, earned_trophy_groups_with_metadata, title_trophy_groups,
};
pub(crate) use summary::trophy_summary;
pub(crate) use titles::{trophy_titles, trophy_titles_all, trophy_titles_for_title};
pub(crate) use trophy::{earned_trophies, earned_trophies_with_metadata, title_trophies};

use serde::Deserialize;

/// The platform a trophy set belongs to.
///
/// PS5 titles live on a different trophy service generation than everything
/// older, and every trophy request must say which one it is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    PS5,
    PS4,
    PS3,
    PSVita,
}

impl PlatformType {
    /// The `npServiceName` query value for this platform.
    pub(crate) fn service_name(self) -> &'static str {
        match self {
            PlatformType::PS5 => "trophy2",
            _ => "trophy",
        }
    }
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlatformType::PS5 => "PS5",
            PlatformType::PS4 => "PS4",
            PlatformType::PS3 => "PS3",
            PlatformType::PSVita => "PS Vita",
        };
        f.write_str(name)
    }
}

/// Trophy counts broken down by grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct EarnedTrophies {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
    pub platinum: u32,
}

impl EarnedTrophies {
    /// Total across all grades.
    pub fn total(&self) -> u32 {
        self.bronze + self.silver + self.gold + self.platinum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ps5_uses_second_generation_service() {
        assert_eq!(PlatformType::PS5.service_name(), "trophy2");
        assert_eq!(PlatformType::PS4.service_name(), "trophy");
        assert_eq!(PlatformType::PS3.service_name(), "trophy");
        assert_eq!(PlatformType::PSVita.service_name(), "trophy");
    }

    #[test]
    fn earned_totals() {
        let earned = EarnedTrophies {
            bronze: 10,
            silver: 5,
            gold: 2,
            platinum: 1,
        };
        assert_eq!(earned.total(), 18);
    }
}
