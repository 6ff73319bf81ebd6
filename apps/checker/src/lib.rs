//! Scrobble freshness checker
//!
//! Checks whether a Last.fm account has stopped scrobbling for longer than
//! a configured threshold and, if so, raises an alert through an optional
//! GroupMe bot. Each invocation performs a single check; run it from cron
//! or a similar scheduler.
//!
//! # Environment Variables
//!
//! - `LASTFM_API_KEY`, `LASTFM_USER`: Last.fm credentials (required)
//! - `GROUPME_BOT_ID`: bot to alert through; unset means log-only
//! - `SCROBBLE_STALENESS_HOURS`: threshold in hours (default 12)
//! - `NOTIFY_ON_START`: post a notice before each check (default false)
//! - `ALERT_ON_NO_DATA`: alert when Last.fm yields no data (default false)

pub mod checker;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod notifier;

pub use checker::{Checker, RunReport};
pub use config::Config;
pub use error::{CheckerError, CheckerResult};
pub use evaluator::{evaluate, CheckResult, Freshness};
pub use notifier::{Notifier, NotifyOutcome};
