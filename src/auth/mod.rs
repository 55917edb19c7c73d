//! Authentication types and token lifecycle management.
//!
//! PSN bootstraps from a long-lived npsso cookie. The [`Authenticator`]
//! exchanges it once for an OAuth token pair and transparently refreshes the
//! access token for the lifetime of the process.

mod authenticator;
mod npsso;
mod tokens;

pub(crate) use authenticator::Authenticator;
pub use npsso::Npsso;
pub use tokens::{AccessToken, RefreshToken};
