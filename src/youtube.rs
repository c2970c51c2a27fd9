//! Client for the one YouTube Data API call this server makes.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::auth::Credential;
use crate::error::Error;

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Outbound calls get an explicit timeout; without one a stalled upstream
/// would pin the request forever.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for YouTube comment threads.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    base_url: String,
}

impl YouTubeClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Builds a client against an explicit base URL. Tests use this to
    /// point the insert call at a mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Unable to construct the HTTP client!");

        YouTubeClient {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Inserts a top-level comment on the given video. One network call,
    /// no retry; every failure collapses into the generic [`Error::Api`]
    /// with the cause kept server-side.
    pub async fn insert_comment(
        &self,
        credential: &Credential,
        video_id: &str,
        text: &str,
    ) -> Result<(), Error> {
        let body = json!({
            "snippet": {
                "videoId": video_id,
                "topLevelComment": {
                    "snippet": { "textOriginal": text }
                }
            }
        });

        let response = self
            .client
            .post(format!("{}/commentThreads", self.base_url))
            .query(&[("part", "snippet")])
            .bearer_auth(&credential.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|error| Error::Api(error.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(Error::Api(format!("{}: {}", status, detail)))
        }
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}
