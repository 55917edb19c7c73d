//! Resource facade built on top of the request pipeline.
//!
//! Each type wraps one family of endpoints: [`Client`] for the authenticated
//! account, [`User`] for everyone else, [`Group`] for messaging,
//! [`GameTitle`] for title data, [`Search`] for universal search, and the
//! `trophies` module for achievement data.

mod client;
mod game_title;
mod group;
mod search;
mod user;

pub mod trophies;

pub use client::{AccountDevice, Client, TitleStats, TitleStatsPage};
pub use game_title::GameTitle;
pub use group::{Conversation, Group, GroupMessage, MessageReceipt, MessageSender};
pub use search::{Search, SearchDomain};
pub use user::{Avatar, User, UserProfile};
