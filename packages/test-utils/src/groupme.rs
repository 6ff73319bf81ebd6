//! Mock GroupMe server for testing alert delivery

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock serves bot posts on
const BOT_POST_PATH: &str = "/v3/bots/post";

/// Mock GroupMe bot endpoint
///
/// Records every post so tests can assert on the delivered texts.
pub struct MockGroupMeServer {
    server: MockServer,
    bot_id: String,
}

impl MockGroupMeServer {
    /// Start a new mock GroupMe server with the default bot id
    pub async fn start() -> Self {
        Self::start_with_bot_id("test-bot").await
    }

    /// Start a new mock GroupMe server expecting a custom bot id
    pub async fn start_with_bot_id(bot_id: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            bot_id: bot_id.to_string(),
        }
    }

    /// Full bot post URL to configure the client with
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.uri(), BOT_POST_PATH)
    }

    /// Expected bot id
    pub fn bot_id(&self) -> &str {
        &self.bot_id
    }

    /// Mount a mock that accepts posts from the expected bot
    pub async fn mock_accept(&self) {
        self.mock_respond(202).await;
    }

    /// Mount a mock that answers bot posts with the given status
    pub async fn mock_respond(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(BOT_POST_PATH))
            .and(body_partial_json(json!({ "bot_id": self.bot_id })))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock that accepts posts only after `delay`
    pub async fn mock_accept_after(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(BOT_POST_PATH))
            .and(body_partial_json(json!({ "bot_id": self.bot_id })))
            .respond_with(ResponseTemplate::new(202).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Texts of all posts received so far, in arrival order
    pub async fn posted_texts(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice::<serde_json::Value>(&request.body).ok())
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_posted_texts() {
        let server = MockGroupMeServer::start().await;
        server.mock_accept().await;

        let response = reqwest::Client::new()
            .post(server.api_url())
            .json(&json!({ "bot_id": "test-bot", "text": "hi" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 202);
        assert_eq!(server.posted_texts().await, vec!["hi".to_string()]);
    }
}
