//! Account-wide trophy summary.

use serde::Deserialize;

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::EarnedTrophies;

/// Overall trophy standing of an account: counts by grade, trophy level,
/// progress toward the next level, and the current tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophySummary {
    pub account_id: String,
    pub trophy_level: u32,
    /// Percentage progress toward the next trophy level.
    pub progress: u32,
    pub tier: u32,
    pub earned_trophies: EarnedTrophies,
}

pub(crate) async fn trophy_summary(
    shared: &Shared,
    account_id: &str,
) -> Result<TrophySummary, Error> {
    shared
        .request_builder
        .request_json(RequestSpec::get(
            shared.endpoints.trophy_summary(account_id),
        ))
        .await
}
