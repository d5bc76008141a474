use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Names were requested before `ensure_initialized` succeeded.
    #[error("directory entry {id} is not initialized")]
    NotInitialized { id: String },
}
