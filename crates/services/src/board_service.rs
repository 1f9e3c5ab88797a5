//! Thread lifecycle: create, list recent, report, delete.

use std::sync::Arc;

use chrono::Utc;
use domains::{DomainError, Result, Thread, ThreadId, ThreadRepository, ThreadView};

/// Threads returned by a board listing.
pub const RECENT_THREAD_LIMIT: usize = 10;
/// Replies shown per thread in a board listing.
pub const PREVIEW_REPLY_LIMIT: usize = 3;

#[derive(Clone)]
pub struct BoardService {
    repo: Arc<dyn ThreadRepository>,
}

impl BoardService {
    pub fn new(repo: Arc<dyn ThreadRepository>) -> Self {
        Self { repo }
    }

    /// Opens a new thread on `board`. `text` and `delete_password` are stored
    /// as given, empty strings included.
    #[tracing::instrument(skip(self, text, delete_password))]
    pub async fn create_thread(
        &self,
        board: &str,
        text: String,
        delete_password: String,
    ) -> Result<Thread> {
        let thread = Thread::new(board, text, delete_password, Utc::now());
        self.repo.insert(&thread).await?;

        tracing::info!(thread_id = %thread.id, "thread created");
        Ok(thread)
    }

    /// The most recently bumped threads on `board`, each trimmed to its last
    /// few replies.
    #[tracing::instrument(skip(self))]
    pub async fn list_recent_threads(&self, board: &str) -> Result<Vec<ThreadView>> {
        let threads = self
            .repo
            .find_recent_by_board(board, RECENT_THREAD_LIMIT)
            .await?;

        Ok(threads
            .iter()
            .take(RECENT_THREAD_LIMIT)
            .map(|t| ThreadView::preview(t, PREVIEW_REPLY_LIMIT))
            .collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn report_thread(&self, thread_id: ThreadId) -> Result<()> {
        let mut thread = self
            .repo
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound)?;

        thread.report();
        self.repo.save(&thread).await?;

        tracing::info!("thread reported");
        Ok(())
    }

    /// Removes the thread and all of its replies if `delete_password` matches.
    #[tracing::instrument(skip(self, delete_password))]
    pub async fn delete_thread(&self, thread_id: ThreadId, delete_password: &str) -> Result<()> {
        let thread = self
            .repo
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound)?;

        if !thread.password_matches(delete_password) {
            tracing::debug!("thread delete rejected");
            return Err(DomainError::IncorrectPassword);
        }

        if !self.repo.delete(thread_id).await? {
            return Err(DomainError::ThreadNotFound);
        }

        tracing::info!("thread deleted");
        Ok(())
    }
}
