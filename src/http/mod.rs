//! HTTP transport and the authorized request pipeline.

mod client;
mod endpoints;

pub(crate) use client::{RequestBuilder, RequestSpec};
pub use endpoints::Endpoints;
