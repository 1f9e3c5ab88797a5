//! # Domain Models
//!
//! A `Thread` is one stored document: the opening post plus every reply,
//! embedded in insertion order. Replies have no existence outside their
//! thread.
//!
//! `Thread` and `Reply` carry the delete password and the report flag, so
//! they are never handed to clients directly. Reads go through `ThreadView`
//! and `ReplyView`, which have no fields for either.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ThreadId = Uuid;
pub type ReplyId = Uuid;

/// Text a reply is rewritten to when its author deletes it.
pub const DELETED_MARKER: &str = "[deleted]";

/// A message nested inside exactly one thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub reported: bool,
    pub delete_password: String,
}

impl Reply {
    pub fn new(text: String, delete_password: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            created_on: now,
            reported: false,
            delete_password,
        }
    }

    /// Plain string equality against the stored secret. Not hashed and not
    /// constant-time; passwords are stored exactly as submitted.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.delete_password == candidate
    }

    pub fn report(&mut self) {
        self.reported = true;
    }

    /// Replaces the body with [`DELETED_MARKER`]. Id, timestamp, report flag
    /// and position in the thread are untouched.
    pub fn soft_delete(&mut self) {
        self.text = DELETED_MARKER.to_string();
    }
}

/// Top-level discussion unit with its replies embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub board: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
    /// Sort key for board listings: the creation time of the newest reply,
    /// or of the thread itself while it has none.
    pub bumped_on: DateTime<Utc>,
    pub reported: bool,
    pub delete_password: String,
    pub replies: Vec<Reply>,
}

impl Thread {
    pub fn new(board: &str, text: String, delete_password: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            board: board.to_string(),
            text,
            created_on: now,
            bumped_on: now,
            reported: false,
            delete_password,
            replies: Vec::new(),
        }
    }

    /// Plain string equality, see [`Reply::password_matches`].
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.delete_password == candidate
    }

    pub fn report(&mut self) {
        self.reported = true;
    }

    /// Appends `reply` and bumps the thread to the reply's creation time.
    pub fn append_reply(&mut self, reply: Reply) -> &Reply {
        self.bumped_on = reply.created_on;
        self.replies.push(reply);
        &self.replies[self.replies.len() - 1]
    }

    pub fn reply(&self, id: ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    pub fn reply_mut(&mut self, id: ReplyId) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == id)
    }
}

/// Client-facing reply. Identifiers are serialized as `_id`, which is what
/// existing board front-ends read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyView {
    #[serde(rename = "_id")]
    pub id: ReplyId,
    pub text: String,
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

/// Client-facing thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadView {
    #[serde(rename = "_id")]
    pub id: ThreadId,
    pub board: String,
    pub text: String,
    pub created_on: DateTime<Utc>,
    pub bumped_on: DateTime<Utc>,
    pub replies: Vec<ReplyView>,
    /// Total replies on the thread, including any left out of a preview.
    pub replycount: usize,
}

impl ThreadView {
    /// The thread with every reply.
    pub fn full(thread: &Thread) -> Self {
        Self::with_replies(thread, &thread.replies)
    }

    /// The thread with only its `max_replies` most recent replies, still in
    /// chronological order.
    pub fn preview(thread: &Thread, max_replies: usize) -> Self {
        let skip = thread.replies.len().saturating_sub(max_replies);
        Self::with_replies(thread, &thread.replies[skip..])
    }

    fn with_replies(thread: &Thread, replies: &[Reply]) -> Self {
        Self {
            id: thread.id,
            board: thread.board.clone(),
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: replies.iter().map(ReplyView::from).collect(),
            replycount: thread.replies.len(),
        }
    }
}
