//! psn-api - Async PlayStation Network API client
//!
//! This library wraps PSN's private web API behind typed accessors for user
//! profiles, friends, blocked lists, messaging groups, and trophy data.
//! Authentication bootstraps from an npsso cookie and is managed entirely
//! inside the [`Psn`] handle: the cookie is exchanged once for an OAuth token
//! pair and the access token is refreshed transparently whenever it expires.
//!
//! # Example
//!
//! ```no_run
//! use psn_api::{Psn, UserSelector};
//!
//! # async fn example() -> Result<(), psn_api::Error> {
//! let psn = Psn::new("<64 character npsso cookie>")?;
//!
//! let client = psn.me();
//! println!("online id: {}", client.online_id().await?);
//! for friend in client.friends_list(100).await? {
//!     println!("friend account id: {friend}");
//! }
//!
//! let user = psn.user(UserSelector::online_id("VaultTec_Trading")).await?;
//! let summary = user.trophy_summary().await?;
//! println!("{} is trophy level {}", user.online_id(), summary.trophy_level);
//! # Ok(())
//! # }
//! ```
//!
//! Obtaining the npsso cookie (sign in on the PSN website and read the
//! `npsso` cookie value) is up to the caller.

pub mod auth;
pub mod error;
pub mod http;
pub mod models;

mod psn;

// Re-export primary types at crate root for convenience
pub use auth::Npsso;
pub use error::Error;
pub use http::Endpoints;
pub use models::trophies::PlatformType;
pub use models::{Client, GameTitle, Group, Search, SearchDomain, User};
pub use psn::{GroupSelector, Psn, PsnBuilder, UserSelector};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
