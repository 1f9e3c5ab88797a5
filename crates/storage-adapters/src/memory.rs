//! Process-local document store backed by a `DashMap`.

use async_trait::async_trait;
use dashmap::DashMap;
use domains::{DomainError, Result, Thread, ThreadId, ThreadRepository};

#[derive(Debug, Default)]
pub struct InMemoryThreadRepository {
    threads: DashMap<ThreadId, Thread>,
}

impl InMemoryThreadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn insert(&self, thread: &Thread) -> Result<()> {
        self.threads.insert(thread.id, thread.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ThreadId) -> Result<Option<Thread>> {
        Ok(self.threads.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_recent_by_board(&self, board: &str, limit: usize) -> Result<Vec<Thread>> {
        let mut threads: Vec<Thread> = self
            .threads
            .iter()
            .filter(|entry| entry.board == board)
            .map(|entry| entry.value().clone())
            .collect();

        threads.sort_by(|a, b| b.bumped_on.cmp(&a.bumped_on));
        threads.truncate(limit);
        Ok(threads)
    }

    async fn save(&self, thread: &Thread) -> Result<()> {
        match self.threads.get_mut(&thread.id) {
            Some(mut entry) => {
                *entry = thread.clone();
                Ok(())
            }
            None => Err(DomainError::ThreadNotFound),
        }
    }

    async fn delete(&self, id: ThreadId) -> Result<bool> {
        Ok(self.threads.remove(&id).is_some())
    }
}
