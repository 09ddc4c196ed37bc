//! Tickets and their comment threads
//!
//! A ticket owns its comments: the thread is embedded in the ticket record
//! and persisted with it, so a combined status/assignment/comment update is
//! a single atomic write.

use super::{CategoryId, PriorityId, StatusId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Generate a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An append-only comment on a ticket
///
/// Comments are never edited or deleted once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment authored by the given user
    #[must_use]
    pub fn new(author_id: UserId, content: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            author_id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub category_id: CategoryId,
    pub priority_id: PriorityId,
    pub status_id: StatusId,
    pub requester_id: UserId,
    pub assigned_to: Option<UserId>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Ticket {
    /// File a new ticket
    ///
    /// The requester is the actor filing it; the status starts at the
    /// store's initial status and the ticket starts unassigned.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category_id: CategoryId,
        priority_id: PriorityId,
        initial_status: StatusId,
        requester_id: UserId,
    ) -> Self {
        Self {
            id: TicketId::new(),
            title: title.into(),
            description: description.into(),
            category_id,
            priority_id,
            status_id: initial_status,
            requester_id,
            assigned_to: None,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    /// Whether the ticket sits in the unassigned pool
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.assigned_to.is_none()
    }

    /// Append a comment to the thread
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}
