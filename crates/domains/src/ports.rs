//! # Ports
//!
//! The document store contract. A thread is read and written as a whole
//! document, replies included.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Thread, ThreadId};

/// Persistence for thread documents.
///
/// There is no version field on a document. Two callers that load the same
/// thread, mutate it and `save` it both succeed, and the second write
/// replaces the first (last write wins).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Stores a freshly created thread.
    async fn insert(&self, thread: &Thread) -> Result<()>;

    async fn find_by_id(&self, id: ThreadId) -> Result<Option<Thread>>;

    /// Threads on `board`, most recently bumped first, at most `limit`.
    async fn find_recent_by_board(&self, board: &str, limit: usize) -> Result<Vec<Thread>>;

    /// Replaces the stored document with `thread`.
    /// Fails with `ThreadNotFound` if the document no longer exists.
    async fn save(&self, thread: &Thread) -> Result<()>;

    /// Removes the document. Returns whether anything was removed.
    async fn delete(&self, id: ThreadId) -> Result<bool>;
}
