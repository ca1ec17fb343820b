use crate::prelude::*;
use landing_core::sources::Source;
use std::time::Duration;

const USER_AGENT: &str = concat!("landing/", env!("CARGO_PKG_VERSION"));

/// Create the HTTP client used for remote sources
pub fn create_client(timeout: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Read a single source, local file or URL
pub async fn fetch_source(client: &reqwest::Client, source: &Source) -> Result<String, Error> {
    match source {
        Source::Local(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| Error::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })
        }
        Source::Remote(url) => {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| Error::Network(format!("{url}: {e}")))?;

            if !response.status().is_success() {
                return Err(Error::Network(format!(
                    "{url}: HTTP {}",
                    response.status()
                )));
            }

            response
                .text()
                .await
                .map_err(|e| Error::Network(format!("{url}: {e}")))
        }
    }
}

/// Try each source in order and return the first one that loads.
///
/// Fails with [`Error::AllSourcesFailed`] naming every candidate only when
/// none of them could be read.
pub async fn fetch_first(client: &reqwest::Client, sources: &[Source]) -> Result<String, Error> {
    for source in sources {
        match fetch_source(client, source).await {
            Ok(text) => {
                log::info!("Loaded {source}");
                return Ok(text);
            }
            Err(err) => log::debug!("Skipping {source}: {err}"),
        }
    }

    let attempted = sources
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Err(Error::AllSourcesFailed(attempted))
}

/// Like [`fetch_first`], but a failure is logged and yields empty text
pub async fn fetch_or_empty(client: &reqwest::Client, label: &str, sources: &[Source]) -> String {
    match fetch_first(client, sources).await {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{label} fetch failed: {err}");
            String::new()
        }
    }
}
