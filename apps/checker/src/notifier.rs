//! Alert delivery
//!
//! Wraps an optional GroupMe bot. Without a bot the notifier is disabled
//! and every message only goes to the log. Delivery failures are logged
//! and swallowed so they never abort a check.

use scrobblewatch_groupme_client::{GroupMeClient, GroupMeResult};
use scrobblewatch_shared_config::GroupMeConfig;
use tracing::{debug, info, warn};

/// What happened to a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Delivered and acknowledged
    Sent,
    /// Delivery attempted but failed
    Failed,
    /// No destination configured; nothing sent
    Disabled,
}

/// Notification sink for checker messages
#[derive(Debug, Clone)]
pub struct Notifier {
    client: Option<GroupMeClient>,
}

impl Notifier {
    /// Build a notifier for the given destination, if any
    pub fn new(config: Option<&GroupMeConfig>) -> GroupMeResult<Self> {
        let client = config.map(GroupMeClient::new).transpose()?;
        Ok(Self { client })
    }

    /// Whether a destination is configured
    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Send `text` to the configured destination
    pub async fn notify(&self, text: &str) -> NotifyOutcome {
        let Some(client) = &self.client else {
            debug!(text, "Notifications disabled, message not sent");
            return NotifyOutcome::Disabled;
        };

        match client.post_message(text).await {
            Ok(()) => {
                info!("Message sent successfully");
                NotifyOutcome::Sent
            }
            Err(e) => {
                warn!(error = %e, "Failed to send message");
                NotifyOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrobblewatch_test_utils::MockGroupMeServer;
    use tracing_test::traced_test;

    fn notifier_for(server: &MockGroupMeServer) -> Notifier {
        let config = GroupMeConfig::new(server.bot_id()).with_api_url(server.api_url());
        Notifier::new(Some(&config)).unwrap()
    }

    #[tokio::test]
    async fn test_disabled_sends_nothing() {
        let notifier = Notifier::new(None).unwrap();
        assert!(!notifier.is_enabled());
        assert_eq!(notifier.notify("hello").await, NotifyOutcome::Disabled);
    }

    #[tokio::test]
    async fn test_sent_on_202() {
        let server = MockGroupMeServer::start().await;
        server.mock_accept().await;

        let notifier = notifier_for(&server);
        assert!(notifier.is_enabled());
        assert_eq!(notifier.notify("hello").await, NotifyOutcome::Sent);
        assert_eq!(server.posted_texts().await, vec!["hello".to_string()]);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_non_202_is_logged_not_raised() {
        let server = MockGroupMeServer::start().await;
        server.mock_respond(500).await;

        let outcome = notifier_for(&server).notify("hello").await;

        assert_eq!(outcome, NotifyOutcome::Failed);
        assert!(logs_contain("Failed to send message"));
        assert!(logs_contain("unexpected GroupMe status 500"));
    }

    #[test]
    fn test_blank_bot_id_rejected() {
        assert!(Notifier::new(Some(&GroupMeConfig::new(""))).is_err());
    }
}
