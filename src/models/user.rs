//! Other PSN users.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::trophies::{self, TrophySummary};

/// A PSN user other than (or including) the authenticated account.
///
/// Both identifiers are resolved at lookup time, so the pair is always
/// consistent afterwards.
pub struct User {
    shared: Arc<Shared>,
    online_id: String,
    account_id: String,
    prev_online_id: Option<String>,
}

/// The profile endpoint payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub online_id: String,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub avatars: Vec<Avatar>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub is_plus: bool,
    #[serde(default)]
    pub is_officially_verified: bool,
    #[serde(default)]
    pub is_me: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Avatar {
    pub size: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct LegacyProfileEnvelope {
    profile: LegacyProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyProfile {
    online_id: String,
    account_id: String,
    #[serde(default)]
    current_online_id: Option<String>,
}

impl User {
    /// Resolve by online id through the legacy profile endpoint, which also
    /// reports the current online id when the user has renamed themselves.
    #[instrument(skip(shared))]
    pub(crate) async fn from_online_id(
        shared: Arc<Shared>,
        online_id: &str,
    ) -> Result<Self, Error> {
        debug!("resolving user by online id");
        let spec = RequestSpec::get(shared.endpoints.legacy_profile(online_id))
            .query("fields", "npId,onlineId,accountId,currentOnlineId");
        let envelope: LegacyProfileEnvelope = shared.request_builder.request_json(spec).await?;
        let profile = envelope.profile;

        // A rename leaves the old id resolvable; prefer the current one.
        let (resolved, previous) = match profile.current_online_id {
            Some(current) if current != profile.online_id => {
                (current, Some(profile.online_id))
            }
            _ => (profile.online_id, None),
        };
        Ok(Self {
            shared,
            online_id: resolved,
            account_id: profile.account_id,
            prev_online_id: previous,
        })
    }

    /// Resolve by numeric account id through the profile endpoint.
    #[instrument(skip(shared))]
    pub(crate) async fn from_account_id(
        shared: Arc<Shared>,
        account_id: &str,
    ) -> Result<Self, Error> {
        debug!("resolving user by account id");
        let profile: UserProfile = shared
            .request_builder
            .request_json(RequestSpec::get(shared.endpoints.profile(account_id)))
            .await?;
        Ok(Self {
            shared,
            online_id: profile.online_id,
            account_id: account_id.to_string(),
            prev_online_id: None,
        })
    }

    /// The current online id (gamer tag).
    pub fn online_id(&self) -> &str {
        &self.online_id
    }

    /// The numeric account id.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The online id this user was looked up under, when it differs from
    /// the current one.
    pub fn prev_online_id(&self) -> Option<&str> {
        self.prev_online_id.as_deref()
    }

    /// The full profile.
    pub async fn profile(&self) -> Result<UserProfile, Error> {
        self.shared
            .request_builder
            .request_json(RequestSpec::get(
                self.shared.endpoints.profile(&self.account_id),
            ))
            .await
    }

    /// Basic presence (online status, platform, current title).
    ///
    /// # Errors
    ///
    /// [`Error::Forbidden`] when the user's privacy settings hide presence.
    pub async fn get_presence(&self) -> Result<serde_json::Value, Error> {
        let spec = RequestSpec::get(self.shared.endpoints.basic_presences(&self.account_id))
            .query("type", "primary");
        let response: serde_json::Value = self.shared.request_builder.request_json(spec).await?;
        Ok(response
            .get("basicPresence")
            .cloned()
            .unwrap_or(response))
    }

    /// Friendship status between this user and the authenticated account.
    pub async fn friendship(&self) -> Result<serde_json::Value, Error> {
        self.shared
            .request_builder
            .request_json(RequestSpec::get(
                self.shared.endpoints.friendship(&self.account_id),
            ))
            .await
    }

    /// Whether this user appears on the authenticated account's block list.
    pub async fn is_blocked(&self) -> Result<bool, Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct BlockedUsersResponse {
            block_list: Vec<String>,
        }
        let response: BlockedUsersResponse = self
            .shared
            .request_builder
            .request_json(RequestSpec::get(self.shared.endpoints.blocked_users()))
            .await?;
        Ok(response.block_list.contains(&self.account_id))
    }

    /// This user's overall trophy summary.
    ///
    /// # Errors
    ///
    /// [`Error::Forbidden`] when the user's trophies are private.
    pub async fn trophy_summary(&self) -> Result<TrophySummary, Error> {
        trophies::trophy_summary(&self.shared, &self.account_id).await
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("online_id", &self.online_id)
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Online ID: {} Account ID: {}",
            self.online_id, self.account_id
        )
    }
}
