use crate::domain::ReleaseMetadata;
use crate::error::{ReleaseError, Result};
use crate::registry::Registry;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Registry client speaking the npm registry HTTP API
pub struct HttpRegistry {
    base_url: String,
    client: Client,
}

impl HttpRegistry {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("merge-release/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReleaseError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(HttpRegistry {
            base_url: base_url.into(),
            client,
        })
    }

    /// URL of the `latest` dist-tag document for `package`
    pub fn latest_url(&self, package: &str) -> String {
        format!(
            "{}/{}/latest",
            self.base_url.trim_end_matches('/'),
            encode_package_name(package)
        )
    }
}

impl Registry for HttpRegistry {
    fn latest(&self, package: &str) -> Option<ReleaseMetadata> {
        let url = self.latest_url(package);
        debug!(%url, "querying registry");

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "registry request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(%url, status = %response.status(), "no published release");
            return None;
        }

        match response.json::<ReleaseMetadata>() {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!(%url, error = %e, "unreadable registry response");
                None
            }
        }
    }
}

/// Scoped names keep their `@` but the separating `/` must be escaped.
fn encode_package_name(package: &str) -> String {
    package.replace('/', "%2F")
}
