//! Port interfaces for the application layer
//!
//! Ports define the contract between the entry cache and the collaborators
//! it does not own: the remote directory service and the host's color table.

pub mod directory_client;
pub mod errors;
pub mod nick_color;

pub use directory_client::DirectoryClientPort;
pub use errors::FetchError;
pub use nick_color::NickColorPort;

#[cfg(test)]
pub use nick_color::MockNickColors;
