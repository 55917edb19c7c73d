//! The crate entry point.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::auth::{Authenticator, Npsso};
use crate::error::Error;
use crate::http::{Endpoints, RequestBuilder};
use crate::models::{Client, GameTitle, Group, Search, User};

/// Account that has played a very large share of the PSN catalogue; used so
/// np_communication_id resolution works for titles the caller never played.
const HIGH_COVERAGE_ACCOUNT_ID: &str = "6515971742264256071";

/// Everything the resource facade shares: the request pipeline and the
/// endpoint tables.
pub(crate) struct Shared {
    pub(crate) request_builder: RequestBuilder,
    pub(crate) endpoints: Endpoints,
}

/// The gateway to the PSN API.
///
/// A `Psn` handle owns one pooled HTTP client and one authentication
/// lifecycle. It is cheap to clone (internal `Arc`) and safe to share across
/// tasks; concurrent calls coalesce onto a single token exchange when the
/// cached token has expired.
///
/// # Example
///
/// ```no_run
/// use psn_api::{Psn, UserSelector};
///
/// # async fn example() -> Result<(), psn_api::Error> {
/// let psn = Psn::new("<64 character npsso cookie>")?;
///
/// let me = psn.me();
/// println!("signed in as {}", me.online_id().await?);
///
/// let friend = psn.user(UserSelector::online_id("VaultTec_Trading")).await?;
/// println!("{} => {}", friend.online_id(), friend.account_id());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Psn {
    shared: Arc<Shared>,
}

impl Psn {
    /// Create a handle with default configuration (`en-US`, `US`, 10 s
    /// timeout, production endpoints).
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] when the npsso cookie is blank.
    pub fn new(npsso: impl Into<Npsso>) -> Result<Self, Error> {
        Self::builder(npsso).build()
    }

    /// Start building a handle with custom configuration.
    pub fn builder(npsso: impl Into<Npsso>) -> PsnBuilder {
        PsnBuilder {
            npsso: npsso.into(),
            accept_language: "en-US".to_string(),
            country: "US".to_string(),
            timeout: Duration::from_secs(10),
            endpoints: Endpoints::default(),
        }
    }

    /// The authenticated account.
    pub fn me(&self) -> Client {
        Client::new(self.shared.clone())
    }

    /// Look up another user by online id (gamer tag) or account id.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] when the selector value is blank (checked
    /// before any network call); [`Error::NotFound`] when no such user
    /// exists.
    pub async fn user(&self, selector: UserSelector) -> Result<User, Error> {
        match selector {
            UserSelector::OnlineId(online_id) => {
                require_non_blank(&online_id, "online id")?;
                User::from_online_id(self.shared.clone(), &online_id).await
            }
            UserSelector::AccountId(account_id) => {
                require_non_blank(&account_id, "account id")?;
                User::from_account_id(self.shared.clone(), &account_id).await
            }
        }
    }

    /// Open an existing messaging group or create a new one from invitees.
    ///
    /// Opening by id validates that the group exists. Creating from invitees
    /// starts a fresh group every time; reuse a group id from
    /// [`Client::get_groups`] to continue an old conversation.
    ///
    /// # Errors
    ///
    /// [`Error::IllegalArgument`] when the invitee list is empty or the group
    /// id is blank; [`Error::NotFound`] for an unknown group id;
    /// [`Error::Forbidden`] when an invitee has blocked the caller or keeps
    /// messages private.
    pub async fn group(&self, selector: GroupSelector) -> Result<Group, Error> {
        match selector {
            GroupSelector::GroupId(group_id) => {
                require_non_blank(&group_id, "group id")?;
                Group::from_group_id(self.shared.clone(), group_id).await
            }
            GroupSelector::Invitees(invitees) => {
                if invitees.is_empty() {
                    return Err(Error::IllegalArgument(
                        "at least one invitee account id is required".to_string(),
                    ));
                }
                Group::create(self.shared.clone(), invitees).await
            }
        }
    }

    /// A video game title, resolving its np_communication_id through a
    /// high-coverage account so the lookup works for titles the
    /// authenticated user never played.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the title id is unknown or the resolving
    /// account holds no trophies for it.
    pub async fn game_title(&self, title_id: impl Into<String>) -> Result<GameTitle, Error> {
        GameTitle::resolve(self.shared.clone(), title_id.into(), HIGH_COVERAGE_ACCOUNT_ID).await
    }

    /// Like [`Psn::game_title`] but resolves through the given account
    /// (`"me"` for the authenticated user).
    pub async fn game_title_for_account(
        &self,
        title_id: impl Into<String>,
        account_id: &str,
    ) -> Result<GameTitle, Error> {
        GameTitle::resolve(self.shared.clone(), title_id.into(), account_id).await
    }

    /// A title handle with a known np_communication_id, skipping the
    /// resolution request.
    pub fn game_title_with_np_communication_id(
        &self,
        title_id: impl Into<String>,
        np_communication_id: impl Into<String>,
    ) -> GameTitle {
        GameTitle::new(self.shared.clone(), title_id.into(), np_communication_id.into())
    }

    /// The universal search surface.
    pub fn search(&self) -> Search {
        Search::new(self.shared.clone())
    }
}

impl std::fmt::Debug for Psn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Psn").finish_non_exhaustive()
    }
}

/// Selects which identifier a user lookup runs on.
///
/// The two identifier spaces are disjoint, so the lookup takes exactly one;
/// supplying both or neither is unrepresentable by construction.
#[derive(Debug, Clone)]
pub enum UserSelector {
    /// Online id (gamer tag), resolved through the legacy profile endpoint.
    OnlineId(String),
    /// Numeric account id, resolved through the profile endpoint.
    AccountId(String),
}

impl UserSelector {
    pub fn online_id(value: impl Into<String>) -> Self {
        Self::OnlineId(value.into())
    }

    pub fn account_id(value: impl Into<String>) -> Self {
        Self::AccountId(value.into())
    }
}

/// Selects how a group handle is obtained.
#[derive(Debug, Clone)]
pub enum GroupSelector {
    /// An existing group, usually discovered via [`Client::get_groups`].
    GroupId(String),
    /// Create a new group inviting these account ids.
    Invitees(Vec<String>),
}

impl GroupSelector {
    pub fn group_id(value: impl Into<String>) -> Self {
        Self::GroupId(value.into())
    }

    pub fn invitees<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Invitees(values.into_iter().map(Into::into).collect())
    }
}

/// Builder for [`Psn`] handles.
///
/// Construction is explicit and eager: the pooled HTTP client, the
/// authenticator, and the request pipeline all exist once [`PsnBuilder::build`]
/// returns. Only token acquisition remains on-demand.
pub struct PsnBuilder {
    npsso: Npsso,
    accept_language: String,
    country: String,
    timeout: Duration,
    endpoints: Endpoints,
}

impl PsnBuilder {
    /// Preferred language(s) for content negotiation. Default `en-US`.
    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = value.into();
        self
    }

    /// Client country for the `Country` header. Default `US`.
    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.country = value.into();
        self
    }

    /// Per-request deadline. Default 10 seconds.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Override the endpoint tables (proxies, mock servers).
    pub fn endpoints(mut self, value: Endpoints) -> Self {
        self.endpoints = value;
        self
    }

    /// # Errors
    ///
    /// [`Error::IllegalArgument`] for a blank cookie or header-invalid
    /// configuration strings; [`Error::Transport`] when the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<Psn, Error> {
        if self.npsso.is_blank() {
            return Err(Error::IllegalArgument(
                "npsso cookie must not be empty".to_string(),
            ));
        }

        // Redirects stay unfollowed process-wide: the OAuth authorize step
        // must observe the 302, and no API endpoint redirects on success.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let authenticator = Authenticator::new(self.npsso, http.clone(), self.endpoints.clone());
        let request_builder = RequestBuilder::new(
            http,
            authenticator,
            &self.accept_language,
            &self.country,
            self.timeout,
        )?;

        info!("PSN handle constructed");
        Ok(Psn {
            shared: Arc::new(Shared {
                request_builder,
                endpoints: self.endpoints,
            }),
        })
    }
}

fn require_non_blank(value: &str, what: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::IllegalArgument(format!("{what} must not be empty")));
    }
    Ok(())
}
