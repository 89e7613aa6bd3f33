//! Post node of the forum feed.
//!
//! A Post is a top-level submission filed under one category. It owns its
//! comments (append-only, in arrival order) and its emoji reactions (one
//! entry per emoji).

use crate::error::Result;
use crate::forum::comment::Comment;
use crate::forum::reaction::Reactions;
use crate::forum::types::{current_timestamp_millis, Actor, Category, PostId};
use crate::forum::validation::require_text;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A forum post with its comment thread and reactions.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier, assigned at creation.
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub author_id: String,
    pub author_name: String,
    /// Creation timestamp in milliseconds since Unix epoch.
    pub created_at: u64,
    /// Comments in insertion order.
    pub comments: Vec<Comment>,
    pub reactions: Reactions,
}

impl fmt::Debug for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Post")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("title", &self.title)
            .field("content_len", &self.content.len())
            .field("comment_count", &self.comments.len())
            .field("reaction_count", &self.reactions.len())
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Post {
    /// Creates a new post authored by `author`.
    ///
    /// Title and content are trimmed. A fresh id and the current time are
    /// assigned; comments and reactions start empty.
    ///
    /// # Errors
    /// Returns a validation error if the title or content is blank after
    /// trimming.
    pub fn create(author: &Actor, title: &str, content: &str, category: Category) -> Result<Self> {
        let title = require_text("Post title", title)?;
        let content = require_text("Post content", content)?;

        Ok(Self {
            id: PostId::generate(),
            title,
            content,
            category,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            created_at: current_timestamp_millis(),
            comments: Vec::new(),
            reactions: Reactions::new(),
        })
    }

    /// Returns the number of comments on this post.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Returns the most recent comment, if any.
    pub fn last_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }

    /// Returns true if the title or content contains `lowered_query`.
    ///
    /// The caller lowercases the query once; the post text is lowercased here.
    pub(crate) fn matches_lowered(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self.content.to_lowercase().contains(lowered_query)
    }
}
