//! # services
//!
//! Business logic for the board. Each operation is a single read-modify-write
//! against the injected [`ThreadRepository`](domains::ThreadRepository).

pub mod board_service;
pub mod reply_service;

pub use board_service::{BoardService, PREVIEW_REPLY_LIMIT, RECENT_THREAD_LIMIT};
pub use reply_service::ReplyService;
