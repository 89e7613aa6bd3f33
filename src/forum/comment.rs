//! Comments on a post.
//!
//! A comment belongs to exactly one post and is never shared or edited.
//! Comments are appended to their post in arrival order.

use crate::error::Result;
use crate::forum::types::{current_timestamp_millis, Actor, CommentId};
use crate::forum::validation::require_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reply attached to a post.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    /// Creation timestamp in milliseconds since Unix epoch.
    pub created_at: u64,
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comment")
            .field("id", &self.id)
            .field("author_id", &self.author_id)
            .field("content_len", &self.content.len())
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Comment {
    /// Creates a new comment authored by `author`.
    ///
    /// The content is trimmed. A fresh id and the current time are assigned.
    ///
    /// # Errors
    /// Returns a validation error if the content is blank.
    pub fn create(author: &Actor, content: &str) -> Result<Self> {
        let content = require_text("Comment", content)?;
        Ok(Self {
            id: CommentId::generate(),
            content,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            created_at: current_timestamp_millis(),
        })
    }
}
