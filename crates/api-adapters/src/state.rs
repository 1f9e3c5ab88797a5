//! Application state shared across handlers

use std::sync::Arc;

use configs::ResponseMode;
use domains::ThreadRepository;
use services::{BoardService, ReplyService};

#[derive(Clone)]
pub struct AppState {
    pub boards: BoardService,
    pub replies: ReplyService,
    pub response_mode: ResponseMode,
}

impl AppState {
    /// Builds both services over the same store handle.
    pub fn new(repo: Arc<dyn ThreadRepository>, response_mode: ResponseMode) -> Self {
        Self {
            boards: BoardService::new(repo.clone()),
            replies: ReplyService::new(repo),
            response_mode,
        }
    }
}
