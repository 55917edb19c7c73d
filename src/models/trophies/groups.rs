//! Trophy groups: the base game plus one group per expansion.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::{EarnedTrophies, PlatformType};

/// Trophy groups of a title, with per-group counts and (when fetched through
/// an account) per-group progress.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyGroupsSummary {
    pub trophy_set_version: String,
    #[serde(default)]
    pub trophy_title_name: Option<String>,
    #[serde(default)]
    pub trophy_title_icon_url: Option<String>,
    #[serde(default)]
    pub trophy_title_platform: Option<String>,
    #[serde(default)]
    pub defined_trophies: Option<EarnedTrophies>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub earned_trophies: Option<EarnedTrophies>,
    #[serde(default)]
    pub last_updated_date_time: Option<DateTime<Utc>>,
    pub trophy_groups: Vec<TrophyGroup>,
}

/// One trophy group (`"default"` is the base game, expansions count up from
/// `"001"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyGroup {
    pub trophy_group_id: String,
    #[serde(default)]
    pub trophy_group_name: Option<String>,
    #[serde(default)]
    pub trophy_group_icon_url: Option<String>,
    #[serde(default)]
    pub defined_trophies: Option<EarnedTrophies>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub earned_trophies: Option<EarnedTrophies>,
    #[serde(default)]
    pub last_updated_date_time: Option<DateTime<Utc>>,
}

fn groups_spec(url: String, platform: PlatformType) -> RequestSpec {
    RequestSpec::get(url).query("npServiceName", platform.service_name())
}

/// An account's per-group progress for a title.
pub(crate) async fn earned_trophy_groups(
    shared: &Shared,
    account_id: &str,
    np_communication_id: &str,
    platform: PlatformType,
) -> Result<TrophyGroupsSummary, Error> {
    let url = shared
        .endpoints
        .earned_trophy_groups(account_id, np_communication_id);
    shared
        .request_builder
        .request_json(groups_spec(url, platform))
        .await
}

/// A title's trophy group definitions, independent of any account.
pub(crate) async fn title_trophy_groups(
    shared: &Shared,
    np_communication_id: &str,
    platform: PlatformType,
) -> Result<TrophyGroupsSummary, Error> {
    let url = shared.endpoints.title_trophy_groups(np_communication_id);
    shared
        .request_builder
        .request_json(groups_spec(url, platform))
        .await
}

/// Per-group progress with group names and icons merged in. Two requests.
pub(crate) async fn earned_trophy_groups_with_metadata(
    shared: &Shared,
    account_id: &str,
    np_communication_id: &str,
    platform: PlatformType,
) -> Result<TrophyGroupsSummary, Error> {
    let mut earned =
        earned_trophy_groups(shared, account_id, np_communication_id, platform).await?;
    let metadata = title_trophy_groups(shared, np_communication_id, platform).await?;

    earned.trophy_title_name = metadata.trophy_title_name.clone();
    earned.trophy_title_icon_url = metadata.trophy_title_icon_url.clone();
    merge_group_metadata(&mut earned.trophy_groups, metadata.trophy_groups);
    Ok(earned)
}

fn merge_group_metadata(earned: &mut [TrophyGroup], metadata: Vec<TrophyGroup>) {
    let by_id: HashMap<String, TrophyGroup> = metadata
        .into_iter()
        .map(|group| (group.trophy_group_id.clone(), group))
        .collect();
    for group in earned {
        if let Some(meta) = by_id.get(&group.trophy_group_id) {
            group.trophy_group_name = meta.trophy_group_name.clone();
            group.trophy_group_icon_url = meta.trophy_group_icon_url.clone();
            if group.defined_trophies.is_none() {
                group.defined_trophies = meta.defined_trophies;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, name: Option<&str>) -> TrophyGroup {
        TrophyGroup {
            trophy_group_id: id.to_string(),
            trophy_group_name: name.map(str::to_string),
            trophy_group_icon_url: None,
            defined_trophies: None,
            progress: Some(50),
            earned_trophies: None,
            last_updated_date_time: None,
        }
    }

    #[test]
    fn merge_matches_groups_by_id() {
        let mut earned = vec![group("default", None), group("001", None)];
        let metadata = vec![group("001", Some("Expansion")), group("default", Some("Base"))];
        merge_group_metadata(&mut earned, metadata);
        assert_eq!(earned[0].trophy_group_name.as_deref(), Some("Base"));
        assert_eq!(earned[1].trophy_group_name.as_deref(), Some("Expansion"));
        assert_eq!(earned[0].progress, Some(50));
    }
}
