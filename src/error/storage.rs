use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The persistent store cannot be reached (no window, storage disabled by the browser).
    #[error("Persistent storage is unavailable")]
    Unavailable,
    #[error("Failed to write {key:?} to persistent storage: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to remove {key:?} from persistent storage: {reason}")]
    Remove { key: String, reason: String },
}
