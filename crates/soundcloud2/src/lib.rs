// SPDX-License-Identifier: GPL-3.0-or-later

//! SoundCloud REST API client.
//!
//! A thin asynchronous wrapper over the SoundCloud HTTP API. Every call is
//! an HTTP GET against a resource endpoint (`groups`, `playlists`, `tracks`,
//! `users`, `comments`, or any other resource the API serves), with the API
//! key attached as the `client_id` query parameter and the JSON response
//! returned unmodified as a [`serde_json::Value`].
//!
//! ```no_run
//! use soundcloud2::{Params, SoundcloudClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SoundcloudClient::new("734a173874da8c420aeb59fd03623454")?;
//! let tracks = client.tracks(Params::new().param("q", "A new world")).await?;
//! println!("{}", tracks);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;

pub use client::SoundcloudClient;
pub use error::{Result, SoundcloudError};
pub use params::{ParamValue, Params};
