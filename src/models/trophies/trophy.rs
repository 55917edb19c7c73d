//! Individual trophies.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::PlatformType;

/// A trophy grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrophyType {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// One trophy.
///
/// The earned endpoints populate the progress fields and leave the display
/// metadata empty; the title endpoints do the opposite. The
/// `with_metadata` accessors merge the two views by trophy id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trophy {
    pub trophy_id: u32,
    pub trophy_hidden: bool,
    pub trophy_type: TrophyType,
    pub trophy_group_id: String,
    #[serde(default)]
    pub earned: Option<bool>,
    #[serde(default)]
    pub earned_date_time: Option<DateTime<Utc>>,
    /// Rarity bucket, 0 (ultra rare) through 3 (common).
    #[serde(default)]
    pub trophy_rare: Option<u32>,
    /// Percentage of players holding the trophy, as reported.
    #[serde(default)]
    pub trophy_earned_rate: Option<String>,
    #[serde(default)]
    pub trophy_name: Option<String>,
    #[serde(default)]
    pub trophy_detail: Option<String>,
    #[serde(default)]
    pub trophy_icon_url: Option<String>,
}

/// One page of trophies.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophiesPage {
    pub trophies: Vec<Trophy>,
    pub total_item_count: u32,
    #[serde(default)]
    pub next_offset: Option<u32>,
}

fn trophies_spec(
    url: String,
    platform: PlatformType,
    limit: Option<u32>,
    offset: u32,
) -> RequestSpec {
    let mut spec = RequestSpec::get(url)
        .query("npServiceName", platform.service_name())
        .query("offset", offset);
    if let Some(limit) = limit {
        spec = spec.query("limit", limit);
    }
    spec
}

/// Earned-status trophies for one account and trophy group.
pub(crate) async fn earned_trophies(
    shared: &Shared,
    account_id: &str,
    np_communication_id: &str,
    platform: PlatformType,
    trophy_group_id: &str,
    limit: Option<u32>,
    offset: u32,
) -> Result<TrophiesPage, Error> {
    let url = shared
        .endpoints
        .earned_trophies(account_id, np_communication_id, trophy_group_id);
    shared
        .request_builder
        .request_json(trophies_spec(url, platform, limit, offset))
        .await
}

/// Trophy definitions for one trophy group, independent of any account.
pub(crate) async fn title_trophies(
    shared: &Shared,
    np_communication_id: &str,
    platform: PlatformType,
    trophy_group_id: &str,
    limit: Option<u32>,
    offset: u32,
) -> Result<TrophiesPage, Error> {
    let url = shared
        .endpoints
        .title_trophies(np_communication_id, trophy_group_id);
    shared
        .request_builder
        .request_json(trophies_spec(url, platform, limit, offset))
        .await
}

/// Earned-status trophies with display metadata merged in. Two requests.
pub(crate) async fn earned_trophies_with_metadata(
    shared: &Shared,
    account_id: &str,
    np_communication_id: &str,
    platform: PlatformType,
    trophy_group_id: &str,
    limit: Option<u32>,
    offset: u32,
) -> Result<TrophiesPage, Error> {
    let mut earned = earned_trophies(
        shared,
        account_id,
        np_communication_id,
        platform,
        trophy_group_id,
        limit,
        offset,
    )
    .await?;
    let metadata = title_trophies(
        shared,
        np_communication_id,
        platform,
        trophy_group_id,
        limit,
        offset,
    )
    .await?;

    merge_metadata(&mut earned.trophies, metadata.trophies);
    Ok(earned)
}

/// Fill display metadata into earned trophies, keyed by trophy id.
fn merge_metadata(earned: &mut [Trophy], metadata: Vec<Trophy>) {
    let by_id: HashMap<u32, Trophy> = metadata
        .into_iter()
        .map(|trophy| (trophy.trophy_id, trophy))
        .collect();
    for trophy in earned {
        if let Some(meta) = by_id.get(&trophy.trophy_id) {
            trophy.trophy_name = meta.trophy_name.clone();
            trophy.trophy_detail = meta.trophy_detail.clone();
            trophy.trophy_icon_url = meta.trophy_icon_url.clone();
        }
    }
}
