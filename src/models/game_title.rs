//! Video game titles.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::trophies::{self, PlatformType, TrophiesPage, TrophyGroupsSummary};

/// A PlayStation video game title.
///
/// Trophy data hangs off a title's np_communication_id, which is resolved
/// through the trophy-title listing of an account that has played the game;
/// see [`crate::Psn::game_title`].
pub struct GameTitle {
    shared: Arc<Shared>,
    title_id: String,
    np_communication_id: String,
}

impl GameTitle {
    pub(crate) fn new(shared: Arc<Shared>, title_id: String, np_communication_id: String) -> Self {
        Self {
            shared,
            title_id,
            np_communication_id,
        }
    }

    /// Resolve the np_communication_id via `account_id`'s trophy list.
    #[instrument(skip(shared))]
    pub(crate) async fn resolve(
        shared: Arc<Shared>,
        title_id: String,
        account_id: &str,
    ) -> Result<Self, Error> {
        debug!("resolving np communication id");
        let titles =
            trophies::trophy_titles_for_title(&shared, account_id, &[title_id.as_str()]).await?;
        let np_communication_id = titles
            .into_iter()
            .next()
            .map(|title| title.np_communication_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "no trophy data for title id {title_id}; the resolving account has not \
                     played it or the title does not exist"
                ))
            })?;
        Ok(Self::new(shared, title_id, np_communication_id))
    }

    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    pub fn np_communication_id(&self) -> &str {
        &self.np_communication_id
    }

    /// Catalogue details (name, concepts, media) for this title.
    pub async fn get_details(&self) -> Result<Vec<serde_json::Value>, Error> {
        self.shared
            .request_builder
            .request_json(RequestSpec::get(
                self.shared.endpoints.title_concepts(&self.title_id),
            ))
            .await
    }

    /// The title's trophy definitions (names, details, icons) for one
    /// trophy group, independent of any account's progress.
    pub async fn trophies(
        &self,
        platform: PlatformType,
        trophy_group_id: &str,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<TrophiesPage, Error> {
        trophies::title_trophies(
            &self.shared,
            &self.np_communication_id,
            platform,
            trophy_group_id,
            limit,
            offset,
        )
        .await
    }

    /// The title's trophy groups and per-group trophy counts.
    pub async fn trophy_groups_summary(
        &self,
        platform: PlatformType,
    ) -> Result<TrophyGroupsSummary, Error> {
        trophies::title_trophy_groups(&self.shared, &self.np_communication_id, platform).await
    }
}

impl std::fmt::Debug for GameTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameTitle")
            .field("title_id", &self.title_id)
            .field("np_communication_id", &self.np_communication_id)
            .finish()
    }
}
