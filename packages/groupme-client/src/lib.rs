//! GroupMe bot client
//!
//! Posts plain-text messages as a GroupMe bot. Used by the checker to
//! deliver staleness alerts.

mod client;
mod error;

pub use client::GroupMeClient;
pub use error::{GroupMeError, GroupMeResult};
