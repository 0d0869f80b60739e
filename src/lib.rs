// Copyright © 2014, Peter Atashian

pub mod config;
pub mod download;
pub mod export;
pub mod logging;
pub mod mirror;
pub mod resolve;

pub use crate::config::{Config, MarkupPatterns};
pub use crate::download::{Download, Outcome};
pub use crate::export::ImageIndex;
pub use crate::mirror::RunSummary;
pub use crate::resolve::{Resolution, Resolve};

use reqwest::blocking::{Client, Response};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error("Failed to download image: {url}")]
    TooSmall { url: String, size: u64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A handle on one wiki site: the HTTP client plus the settings for a run.
pub struct Mediawiki {
    client: Client,
    config: Config,
}
impl Mediawiki {
    pub fn new(config: Config) -> Result<Mediawiki> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Mediawiki {
            client: builder.build()?,
            config,
        })
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Plain GET; any non-success status is turned into an error.
    fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        Ok(response.error_for_status()?)
    }
}
