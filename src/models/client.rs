//! The authenticated account.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::Stream;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::group::Group;
use super::trophies::{
    self, PlatformType, TrophiesPage, TrophyGroupsSummary, TrophySummary, TrophyTitle,
    TrophyTitlesPage,
};
use super::user::UserProfile;

const FRIENDS_LIMIT_MAX: u32 = 1000;
const TITLE_STATS_PAGE_SIZE: u32 = 200;

/// The account the npsso cookie belongs to.
///
/// Obtained via [`crate::Psn::me`]. The account id is fetched once and cached
/// for the lifetime of the handle.
pub struct Client {
    shared: Arc<Shared>,
    account_id: OnceCell<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountIdResponse {
    account_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountDevicesResponse {
    #[serde(default)]
    account_devices: Vec<AccountDevice>,
}

/// One device the account is signed in on.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDevice {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub activation_type: Option<String>,
    #[serde(default)]
    pub activation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub system_data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct FriendsResponse {
    friends: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AvailableToPlayResponse {
    settings: Vec<AvailabilitySetting>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilitySetting {
    account_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockedUsersResponse {
    block_list: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupsResponse {
    groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupEntry {
    group_id: String,
}

/// Play statistics for one title.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStats {
    pub title_id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    pub play_count: u32,
    pub first_played_date_time: DateTime<Utc>,
    pub last_played_date_time: DateTime<Utc>,
    /// ISO-8601 duration as reported by the service, e.g. `PT84H24M52S`.
    pub play_duration: String,
}

/// One page of title statistics.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStatsPage {
    pub titles: Vec<TitleStats>,
    pub total_item_count: u32,
    #[serde(default)]
    pub next_offset: Option<u32>,
}

impl Client {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self {
            shared,
            account_id: OnceCell::new(),
        }
    }

    /// The numeric account id, fetched on first use and cached.
    pub async fn account_id(&self) -> Result<&str, Error> {
        let account_id = self
            .account_id
            .get_or_try_init(|| async {
                debug!("resolving own account id");
                let response: AccountIdResponse = self
                    .shared
                    .request_builder
                    .request_json(RequestSpec::get(self.shared.endpoints.my_account()))
                    .await?;
                Ok::<_, Error>(response.account_id)
            })
            .await?;
        Ok(account_id)
    }

    /// The online id (gamer tag) currently attached to the account.
    pub async fn online_id(&self) -> Result<String, Error> {
        let account_id = self.account_id().await?.to_string();
        let profile: UserProfile = self
            .shared
            .request_builder
            .request_json(RequestSpec::get(self.shared.endpoints.profile(&account_id)))
            .await?;
        Ok(profile.online_id)
    }

    /// Profile info from the legacy endpoint. Useful for legacy console
    /// (PS3, PS4) presence.
    #[instrument(skip(self))]
    pub async fn get_profile_legacy(&self) -> Result<serde_json::Value, Error> {
        let online_id = self.online_id().await?;
        let spec = RequestSpec::get(self.shared.endpoints.legacy_profile(&online_id)).query(
            "fields",
            "npId,onlineId,accountId,avatarUrls,plus,aboutMe,\
             languagesUsed,trophySummary(@default,level,progress,earnedTrophies),\
             isOfficiallyVerified,personalDetail(@default,profilePictureUrls),\
             personalDetailSharing,personalDetailSharingRequestMessageFlag,\
             primaryOnlineStatus,presences(@default,@titleInfo,platform,\
             lastOnlineDate,hasBroadcastData),requestMessageFlag,blocking,friendRelation,\
             following,consoleAvailability",
        );
        self.shared.request_builder.request_json(spec).await
    }

    /// The devices this account is signed in on.
    pub async fn get_account_devices(&self) -> Result<Vec<AccountDevice>, Error> {
        let spec = RequestSpec::get(self.shared.endpoints.my_account())
            .query("includeFields", "device,systemData")
            .query("platform", "PS5,PS4,PS3,PSVita");
        let response: AccountDevicesResponse =
            self.shared.request_builder.request_json(spec).await?;
        Ok(response.account_devices)
    }

    /// Account ids of everyone on the friends list.
    ///
    /// `limit` is clamped to the service maximum of 1000. Hydrate entries
    /// with [`crate::Psn::user`] as needed.
    #[instrument(skip(self))]
    pub async fn friends_list(&self, limit: u32) -> Result<Vec<String>, Error> {
        let limit = limit.min(FRIENDS_LIMIT_MAX);
        let spec =
            RequestSpec::get(self.shared.endpoints.friends_list()).query("limit", limit);
        let response: FriendsResponse = self.shared.request_builder.request_json(spec).await?;
        Ok(response.friends)
    }

    /// Account ids on the "notify when available" subscription list.
    pub async fn available_to_play(&self) -> Result<Vec<String>, Error> {
        let response: AvailableToPlayResponse = self
            .shared
            .request_builder
            .request_json(RequestSpec::get(self.shared.endpoints.available_to_play()))
            .await?;
        Ok(response.settings.into_iter().map(|s| s.account_id).collect())
    }

    /// Account ids on the block list.
    pub async fn blocked_list(&self) -> Result<Vec<String>, Error> {
        let response: BlockedUsersResponse = self
            .shared
            .request_builder
            .request_json(RequestSpec::get(self.shared.endpoints.blocked_users()))
            .await?;
        Ok(response.block_list)
    }

    /// Messaging groups the account participates in. `offset` skips the
    /// first N groups.
    #[instrument(skip(self))]
    pub async fn get_groups(&self, limit: u32, offset: u32) -> Result<Vec<Group>, Error> {
        let spec = RequestSpec::get(self.shared.endpoints.my_groups())
            .query("includeFields", "members")
            .query("limit", limit)
            .query("offset", offset);
        let response: GroupsResponse = self.shared.request_builder.request_json(spec).await?;
        Ok(response
            .groups
            .into_iter()
            .map(|entry| Group::attach(self.shared.clone(), entry.group_id))
            .collect())
    }

    // ========================================================================
    // Trophies
    // ========================================================================

    /// Overall trophy counts, level, and progress toward the next level.
    pub async fn trophy_summary(&self) -> Result<TrophySummary, Error> {
        trophies::trophy_summary(&self.shared, "me").await
    }

    /// One page of trophy titles the account has earned trophies in.
    pub async fn trophy_titles(
        &self,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<TrophyTitlesPage, Error> {
        trophies::trophy_titles(&self.shared, "me", limit, offset).await
    }

    /// Every trophy title, walking all pages.
    pub fn trophy_titles_all(&self) -> impl Stream<Item = Result<TrophyTitle, Error>> + '_ {
        trophies::trophy_titles_all(self.shared.clone(), "me".to_string())
    }

    /// Trophy summaries for specific titles.
    pub async fn trophy_titles_for_title(
        &self,
        title_ids: &[&str],
    ) -> Result<Vec<TrophyTitle>, Error> {
        trophies::trophy_titles_for_title(&self.shared, "me", title_ids).await
    }

    /// Earned-status trophy detail for one trophy group of a title
    /// (`"all"` for every group, `"default"` for the base game).
    ///
    /// With `include_metadata` a second request fetches display metadata and
    /// merges it in by trophy id, at double the rate limit cost.
    pub async fn trophies(
        &self,
        np_communication_id: &str,
        platform: PlatformType,
        trophy_group_id: &str,
        limit: Option<u32>,
        offset: u32,
        include_metadata: bool,
    ) -> Result<TrophiesPage, Error> {
        if include_metadata {
            trophies::earned_trophies_with_metadata(
                &self.shared,
                "me",
                np_communication_id,
                platform,
                trophy_group_id,
                limit,
                offset,
            )
            .await
        } else {
            trophies::earned_trophies(
                &self.shared,
                "me",
                np_communication_id,
                platform,
                trophy_group_id,
                limit,
                offset,
            )
            .await
        }
    }

    /// Trophy groups of a title and the account's progress in each; most
    /// relevant for games with expansions.
    pub async fn trophy_groups_summary(
        &self,
        np_communication_id: &str,
        platform: PlatformType,
        include_metadata: bool,
    ) -> Result<TrophyGroupsSummary, Error> {
        if include_metadata {
            trophies::earned_trophy_groups_with_metadata(
                &self.shared,
                "me",
                np_communication_id,
                platform,
            )
            .await
        } else {
            trophies::earned_trophy_groups(&self.shared, "me", np_communication_id, platform).await
        }
    }

    // ========================================================================
    // Title statistics
    // ========================================================================

    /// One page of play statistics. PS4 titles and newer only.
    pub async fn title_stats(
        &self,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<TitleStatsPage, Error> {
        let mut spec = RequestSpec::get(self.shared.endpoints.title_stats("me"))
            .query("offset", offset);
        if let Some(limit) = limit {
            spec = spec.query("limit", limit);
        }
        self.shared.request_builder.request_json(spec).await
    }

    /// Play statistics for every title, walking all pages.
    pub fn title_stats_all(&self) -> impl Stream<Item = Result<TitleStats, Error>> + '_ {
        let shared = self.shared.clone();
        async_stream::try_stream! {
            let mut offset = 0;
            loop {
                let spec = RequestSpec::get(shared.endpoints.title_stats("me"))
                    .query("limit", TITLE_STATS_PAGE_SIZE)
                    .query("offset", offset);
                let page: TitleStatsPage = shared.request_builder.request_json(spec).await?;
                for title in page.titles {
                    yield title;
                }
                match page.next_offset {
                    Some(next) => offset = next,
                    None => break,
                }
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("account_id", &self.account_id.get())
            .finish()
    }
}
