//! slackdir
//!
//! Bootstrap and command-line front end for the directory-entry cache.

pub mod bootstrap;
pub mod cli;
