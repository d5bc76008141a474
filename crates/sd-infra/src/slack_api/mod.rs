//! Slack Web API adapter for the directory client port

mod client;
mod error;

pub use client::{AuthIdentity, SlackDirectoryClient};
