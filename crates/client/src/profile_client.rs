//! HTTP client for retrieving published social-profile documents.

use helvania_shared::{FetchError, SocialProfile};
use reqwest::Client;

/// HTTP client for the profile documents the game publishes under
/// `/data/players/`. Keeps the fetch step an explicit `Result`; the widget
/// layer decides what a failure degrades to.
#[derive(Debug, Clone, Default)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    /// Create a new profile client addressing the current origin.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for profile requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Fetch a player's profile document.
    ///
    /// Any non-2xx status is an error; so is a body that fails to parse.
    /// There is no retry and no timeout beyond what the transport imposes.
    pub async fn fetch_profile(&self, player_id: &str) -> Result<SocialProfile, FetchError> {
        let url = self.url(&format!("/data/players/social_profile_{player_id}.json"));

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(FetchError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| FetchError::Deserialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_path() {
        let client = ProfileClient::new().with_base_url("https://game.example/");
        assert_eq!(
            client.url("/data/players/social_profile_7.json"),
            "https://game.example/data/players/social_profile_7.json"
        );
    }

    #[test]
    fn empty_base_url_keeps_absolute_path() {
        let client = ProfileClient::new();
        assert_eq!(
            client.url("data/players/social_profile_7.json"),
            "/data/players/social_profile_7.json"
        );
    }
}
