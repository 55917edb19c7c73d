//! Universal search.

use std::sync::Arc;

use serde_json::json;
use tracing::instrument;

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

/// Which corner of the catalogue a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDomain {
    /// Game titles.
    FullGames,
    /// User accounts.
    SocialAllAccounts,
}

impl SearchDomain {
    fn as_str(self) -> &'static str {
        match self {
            SearchDomain::FullGames => "MobileUniversalSearchGame",
            SearchDomain::SocialAllAccounts => "SocialAllAccounts",
        }
    }
}

/// The universal search surface, obtained via [`crate::Psn::search`].
pub struct Search {
    shared: Arc<Shared>,
}

impl Search {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Run a raw universal search and return the service's response as-is.
    #[instrument(skip(self))]
    pub async fn universal_search(
        &self,
        search_term: &str,
        domain: SearchDomain,
    ) -> Result<serde_json::Value, Error> {
        let body = json!({
            "searchTerm": search_term,
            "domainRequests": [ { "domain": domain.as_str() } ],
        });
        let spec = RequestSpec::post(self.shared.endpoints.universal_search()).json(body);
        self.shared.request_builder.request_json(spec).await
    }

    /// Find the title id of a game by name. Returns the best match, or
    /// `None` when nothing in the catalogue fits.
    #[instrument(skip(self))]
    pub async fn get_title_id(&self, title_name: &str) -> Result<Option<String>, Error> {
        let body = json!({
            "searchTerm": title_name,
            "domainRequests": [ { "domain": SearchDomain::FullGames.as_str() } ],
        });
        // This endpoint variant takes the payload as a named JSON file part.
        let response: serde_json::Value = self
            .shared
            .request_builder
            .request_multipart_json(
                &self.shared.endpoints.universal_search(),
                "requestBody",
                body,
            )
            .await?;

        let title_id = response["domainResponses"][0]["results"][0]["defaultProduct"]["id"]
            .as_str()
            .map(str::to_string);
        Ok(title_id)
    }
}

impl std::fmt::Debug for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search").finish_non_exhaustive()
    }
}
