//! Ursid Wiki
//!
//! Scrapes the species tables of Wikipedia's *List of ursids* into structured
//! bear records, resolves an image for every species, and ships the small
//! MediaWiki proxy that the bears website talks to.
//!
//! # Features
//!
//! - **Best-effort extraction**: malformed rows are skipped, never fatal
//! - **Total image resolution**: every record gets a usable image URL,
//!   falling back to a placeholder
//! - **Injectable capabilities**: wikitext sources, image resolvers and
//!   availability checkers are traits, so the pipeline runs against fakes
//! - **Backend proxy**: `/api/bear-data` and `/api/bear-image` on axum
//!
//! # Example
//!
//! ```no_run
//! use ursid_wiki::{BearService, Config, WikiClient};
//! use ursid_wiki::services::{DirectSource, WikiImageResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = WikiClient::new(&config)?;
//!
//!     let source = DirectSource::new(client.clone(), &config);
//!     let resolver = WikiImageResolver::new(client.clone(), client, &config);
//!     let bears = BearService::new(source, resolver).load_bears().await?;
//!
//!     println!("{} species", bears.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod services;

pub use client::{ProxyClient, WikiClient};
pub use config::Config;
pub use error::{ClientError, DataError, ProxyError};
pub use models::BearRecord;
pub use services::BearService;
