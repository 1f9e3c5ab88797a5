//! Reply lifecycle, always scoped to a parent thread.

use std::sync::Arc;

use chrono::Utc;
use domains::{
    DomainError, Reply, ReplyId, Result, Thread, ThreadId, ThreadRepository, ThreadView,
};

#[derive(Clone)]
pub struct ReplyService {
    repo: Arc<dyn ThreadRepository>,
}

impl ReplyService {
    pub fn new(repo: Arc<dyn ThreadRepository>) -> Self {
        Self { repo }
    }

    async fn load(&self, thread_id: ThreadId) -> Result<Thread> {
        self.repo
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound)
    }

    /// Appends a reply and bumps the parent thread to the reply's creation
    /// time. The whole thread document is written back.
    #[tracing::instrument(skip(self, text, delete_password))]
    pub async fn create_reply(
        &self,
        thread_id: ThreadId,
        text: String,
        delete_password: String,
    ) -> Result<Reply> {
        let mut thread = self.load(thread_id).await?;
        let reply = thread
            .append_reply(Reply::new(text, delete_password, Utc::now()))
            .clone();
        self.repo.save(&thread).await?;

        tracing::info!(reply_id = %reply.id, "reply created");
        Ok(reply)
    }

    /// The thread with every reply, secrets stripped.
    #[tracing::instrument(skip(self))]
    pub async fn get_thread_with_replies(&self, thread_id: ThreadId) -> Result<ThreadView> {
        let thread = self.load(thread_id).await?;
        Ok(ThreadView::full(&thread))
    }

    #[tracing::instrument(skip(self))]
    pub async fn report_reply(&self, thread_id: ThreadId, reply_id: ReplyId) -> Result<()> {
        let mut thread = self.load(thread_id).await?;
        thread
            .reply_mut(reply_id)
            .ok_or(DomainError::ReplyNotFound)?
            .report();
        self.repo.save(&thread).await?;

        tracing::info!("reply reported");
        Ok(())
    }

    /// Soft delete: the reply stays in place with its text replaced.
    #[tracing::instrument(skip(self, delete_password))]
    pub async fn delete_reply(
        &self,
        thread_id: ThreadId,
        reply_id: ReplyId,
        delete_password: &str,
    ) -> Result<()> {
        let mut thread = self.load(thread_id).await?;
        let reply = thread
            .reply_mut(reply_id)
            .ok_or(DomainError::ReplyNotFound)?;

        if !reply.password_matches(delete_password) {
            tracing::debug!("reply delete rejected");
            return Err(DomainError::IncorrectPassword);
        }

        reply.soft_delete();
        self.repo.save(&thread).await?;

        tracing::info!("reply deleted");
        Ok(())
    }
}
