//! Trophy titles: the games an account has earned trophies in.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::Stream;
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

use super::EarnedTrophies;

const TROPHY_TITLES_PAGE_SIZE: u32 = 200;

/// One game title with the account's trophy progress in it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyTitle {
    pub np_service_name: String,
    pub np_communication_id: String,
    pub trophy_set_version: String,
    pub trophy_title_name: String,
    #[serde(default)]
    pub trophy_title_detail: Option<String>,
    pub trophy_title_icon_url: String,
    pub trophy_title_platform: String,
    #[serde(default)]
    pub has_trophy_groups: bool,
    pub defined_trophies: EarnedTrophies,
    /// Percentage of the title's trophies earned.
    pub progress: u32,
    pub earned_trophies: EarnedTrophies,
    #[serde(default)]
    pub hidden_flag: bool,
    pub last_updated_date_time: DateTime<Utc>,
}

/// One page of an account's trophy titles.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrophyTitlesPage {
    pub trophy_titles: Vec<TrophyTitle>,
    pub total_item_count: u32,
    #[serde(default)]
    pub next_offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitlesForTitleResponse {
    titles: Vec<TitleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitleEntry {
    #[allow(dead_code)]
    np_title_id: String,
    trophy_titles: Vec<TrophyTitle>,
}

pub(crate) async fn trophy_titles(
    shared: &Shared,
    account_id: &str,
    limit: Option<u32>,
    offset: u32,
) -> Result<TrophyTitlesPage, Error> {
    let mut spec =
        RequestSpec::get(shared.endpoints.trophy_titles(account_id)).query("offset", offset);
    if let Some(limit) = limit {
        spec = spec.query("limit", limit);
    }
    shared.request_builder.request_json(spec).await
}

/// Walk every page of an account's trophy titles.
pub(crate) fn trophy_titles_all(
    shared: Arc<Shared>,
    account_id: String,
) -> impl Stream<Item = Result<TrophyTitle, Error>> {
    async_stream::try_stream! {
        let mut offset = 0;
        loop {
            debug!(offset, "fetching trophy title page");
            let page = trophy_titles(
                &shared,
                &account_id,
                Some(TROPHY_TITLES_PAGE_SIZE),
                offset,
            )
            .await?;
            for title in page.trophy_titles {
                yield title;
            }
            match page.next_offset {
                Some(next) => offset = next,
                None => break,
            }
        }
    }
}

/// Trophy progress for specific titles, keyed by their np title ids.
pub(crate) async fn trophy_titles_for_title(
    shared: &Shared,
    account_id: &str,
    title_ids: &[&str],
) -> Result<Vec<TrophyTitle>, Error> {
    let spec = RequestSpec::get(shared.endpoints.trophy_titles_for_title(account_id))
        .query("npTitleIds", title_ids.join(","));
    let response: TitlesForTitleResponse = shared.request_builder.request_json(spec).await?;
    Ok(response
        .titles
        .into_iter()
        .flat_map(|entry| entry.trophy_titles)
        .collect())
}
