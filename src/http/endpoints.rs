//! Endpoint tables for the PSN web API.
//!
//! The service spreads its surface over several hosts (auth, profiles, the
//! DMS account service, messaging, trophies, search). The exact URI and path
//! strings are mandated by the service and must be reproduced byte-for-byte;
//! nothing here is negotiable.

/// Base URIs for every endpoint family.
///
/// [`Endpoints::default`] points at the production service. Tests and
/// proxy setups can route every family through a single origin with
/// [`Endpoints::with_base`].
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub auth_base: String,
    pub profile_base: String,
    pub legacy_profile_base: String,
    pub account_base: String,
    pub gaming_lounge_base: String,
    pub universal_search_base: String,
    pub trophy_base: String,
    pub games_list_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_base: "https://ca.account.sony.com/api/authz/v3/oauth".to_string(),
            profile_base: "https://m.np.playstation.com/api/userProfile/v1/internal/users"
                .to_string(),
            legacy_profile_base: "https://us-prof.np.community.playstation.net/userProfile/v1/users"
                .to_string(),
            account_base: "https://dms.api.np.km.playstation.net/dms/api/v1/devices/accounts"
                .to_string(),
            gaming_lounge_base: "https://m.np.playstation.com/api/gamingLoungeGroups/v1"
                .to_string(),
            universal_search_base: "https://m.np.playstation.com/api/search/v1/universalSearch"
                .to_string(),
            trophy_base: "https://m.np.playstation.com/api/trophy/v1".to_string(),
            games_list_base: "https://m.np.playstation.com/api/gamelist/v2".to_string(),
        }
    }
}

impl Endpoints {
    /// Route every endpoint family through one origin, keeping each family's
    /// path prefix. Intended for reverse proxies and mock servers.
    pub fn with_base(base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        Self {
            auth_base: format!("{base}/api/authz/v3/oauth"),
            profile_base: format!("{base}/api/userProfile/v1/internal/users"),
            legacy_profile_base: format!("{base}/userProfile/v1/users"),
            account_base: format!("{base}/dms/api/v1/devices/accounts"),
            gaming_lounge_base: format!("{base}/api/gamingLoungeGroups/v1"),
            universal_search_base: format!("{base}/api/search/v1/universalSearch"),
            trophy_base: format!("{base}/api/trophy/v1"),
            games_list_base: format!("{base}/api/gamelist/v2"),
        }
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    pub(crate) fn oauth_authorize(&self) -> String {
        format!("{}/authorize", self.auth_base)
    }

    pub(crate) fn oauth_token(&self) -> String {
        format!("{}/token", self.auth_base)
    }

    // ========================================================================
    // Account and profiles
    // ========================================================================

    pub(crate) fn my_account(&self) -> String {
        format!("{}/me", self.account_base)
    }

    pub(crate) fn profile(&self, account_id: &str) -> String {
        format!("{}/{account_id}/profiles", self.profile_base)
    }

    pub(crate) fn legacy_profile(&self, online_id: &str) -> String {
        format!("{}/{online_id}/profile2", self.legacy_profile_base)
    }

    pub(crate) fn basic_presences(&self, account_id: &str) -> String {
        format!("{}/{account_id}/basicPresences", self.profile_base)
    }

    // ========================================================================
    // Friends and blocks
    // ========================================================================

    pub(crate) fn friends_list(&self) -> String {
        format!("{}/me/friends", self.profile_base)
    }

    pub(crate) fn friendship(&self, account_id: &str) -> String {
        format!("{}/me/friends/{account_id}/summary", self.profile_base)
    }

    pub(crate) fn available_to_play(&self) -> String {
        format!("{}/me/friends/subscribing/availableToPlay", self.profile_base)
    }

    pub(crate) fn blocked_users(&self) -> String {
        format!("{}/me/blocks", self.profile_base)
    }

    // ========================================================================
    // Messaging groups
    // ========================================================================

    pub(crate) fn my_groups(&self) -> String {
        format!("{}/members/me/groups", self.gaming_lounge_base)
    }

    pub(crate) fn group_members(&self, group_id: &str) -> String {
        format!("{}/members/me/groups/{group_id}", self.gaming_lounge_base)
    }

    pub(crate) fn create_group(&self) -> String {
        format!("{}/groups", self.gaming_lounge_base)
    }

    pub(crate) fn group_settings(&self, group_id: &str) -> String {
        format!("{}/groups/{group_id}/groupName", self.gaming_lounge_base)
    }

    pub(crate) fn send_group_message(&self, group_id: &str) -> String {
        format!("{}/groups/{group_id}/messages", self.gaming_lounge_base)
    }

    pub(crate) fn conversation(&self, group_id: &str) -> String {
        format!("{}/members/me/groups/{group_id}/messages", self.gaming_lounge_base)
    }

    pub(crate) fn leave_group(&self, group_id: &str) -> String {
        format!("{}/groups/{group_id}/members/me", self.gaming_lounge_base)
    }

    // ========================================================================
    // Trophies
    // ========================================================================

    pub(crate) fn trophy_summary(&self, account_id: &str) -> String {
        format!("{}/users/{account_id}/trophySummary", self.trophy_base)
    }

    pub(crate) fn trophy_titles(&self, account_id: &str) -> String {
        format!("{}/users/{account_id}/trophyTitles", self.trophy_base)
    }

    pub(crate) fn trophy_titles_for_title(&self, account_id: &str) -> String {
        format!("{}/users/{account_id}/titles/trophyTitles", self.trophy_base)
    }

    pub(crate) fn earned_trophies(
        &self,
        account_id: &str,
        np_communication_id: &str,
        trophy_group_id: &str,
    ) -> String {
        format!(
            "{}/users/{account_id}/npCommunicationIds/{np_communication_id}/trophyGroups/{trophy_group_id}/trophies",
            self.trophy_base
        )
    }

    pub(crate) fn title_trophies(&self, np_communication_id: &str, trophy_group_id: &str) -> String {
        format!(
            "{}/npCommunicationIds/{np_communication_id}/trophyGroups/{trophy_group_id}/trophies",
            self.trophy_base
        )
    }

    pub(crate) fn earned_trophy_groups(
        &self,
        account_id: &str,
        np_communication_id: &str,
    ) -> String {
        format!(
            "{}/users/{account_id}/npCommunicationIds/{np_communication_id}/trophyGroups",
            self.trophy_base
        )
    }

    pub(crate) fn title_trophy_groups(&self, np_communication_id: &str) -> String {
        format!(
            "{}/npCommunicationIds/{np_communication_id}/trophyGroups",
            self.trophy_base
        )
    }

    // ========================================================================
    // Search and game lists
    // ========================================================================

    pub(crate) fn universal_search(&self) -> String {
        self.universal_search_base.clone()
    }

    pub(crate) fn title_concepts(&self, title_id: &str) -> String {
        format!("{}/titles/{title_id}/concepts", self.games_list_base)
    }

    pub(crate) fn title_stats(&self, account_id: &str) -> String {
        format!("{}/users/{account_id}/titles", self.games_list_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.oauth_token(),
            "https://ca.account.sony.com/api/authz/v3/oauth/token"
        );
        assert_eq!(
            endpoints.profile("1234"),
            "https://m.np.playstation.com/api/userProfile/v1/internal/users/1234/profiles"
        );
    }

    #[test]
    fn with_base_keeps_family_prefixes() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:9000/");
        assert_eq!(
            endpoints.oauth_authorize(),
            "http://127.0.0.1:9000/api/authz/v3/oauth/authorize"
        );
        assert_eq!(
            endpoints.trophy_summary("me"),
            "http://127.0.0.1:9000/api/trophy/v1/users/me/trophySummary"
        );
    }
}
