//! Property lead lookups against the Brevard County Property Appraiser (BCPAO) API.
//!
//! - [`bcpao`] - address search and account fetches over an injected HTTP transport
//! - [`domain`] - the normalized [`AccountInfo`] record and [`AccountMatch`] outcomes
//! - [`config`] - endpoint and client settings, read from the environment
//! - [`spreadsheets`] - XLSX export of account summaries

pub mod bcpao;
pub mod cli;
pub mod config;
pub mod domain;
pub mod spreadsheets;

#[cfg(test)]
mod tests;

pub use bcpao::{BcpaoDataFetcher, BcpaoError, HttpResponse, HttpTransport};
pub use config::FetcherConfig;
pub use domain::{AccountInfo, AccountMatch};
