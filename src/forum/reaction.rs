//! Emoji reactions attached to a post.
//!
//! A post keeps one aggregate entry per distinct emoji: how many people used
//! it, and whether the current viewer is one of them. Toggling is a
//! single-viewer operation; it cannot tell two other reactors apart.

use crate::error::{ForumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated use of one emoji on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiReaction {
    /// The emoji value, compared byte-for-byte.
    pub emoji: String,
    /// Number of reactors. Always at least 1 while the entry exists.
    pub count: u32,
    /// Whether the current viewer contributed to `count`.
    pub user_reacted: bool,
}

impl EmojiReaction {
    /// Creates a reaction entry.
    pub fn new(emoji: impl Into<String>, count: u32, user_reacted: bool) -> Self {
        Self {
            emoji: emoji.into(),
            count,
            user_reacted,
        }
    }
}

/// What a toggle did to the reaction collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionChange {
    /// A new entry was created with count 1.
    Added,
    /// The viewer joined an existing entry.
    Incremented,
    /// The viewer left an entry that still has other reactors.
    Decremented,
    /// The viewer was the last reactor and the entry was deleted.
    Removed,
}

impl fmt::Display for ReactionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionChange::Added => write!(f, "Added"),
            ReactionChange::Incremented => write!(f, "Incremented"),
            ReactionChange::Decremented => write!(f, "Decremented"),
            ReactionChange::Removed => write!(f, "Removed"),
        }
    }
}

/// The reaction entries of a single post, in first-use order.
///
/// Holds at most one entry per emoji and never an entry with a zero count.
/// Deserialization goes through the same checks as [`Reactions::from_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EmojiReaction>", into = "Vec<EmojiReaction>")]
pub struct Reactions(pub(super) Vec<EmojiReaction>);

impl Reactions {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing entries.
    ///
    /// # Errors
    /// Returns a validation error if an emoji appears twice or an entry has a
    /// zero count.
    pub fn from_entries(entries: Vec<EmojiReaction>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.count == 0 {
                return Err(ForumError::validation(format!(
                    "Reaction {} has a zero count",
                    entry.emoji
                )));
            }
            if entries[..i].iter().any(|e| e.emoji == entry.emoji) {
                return Err(ForumError::validation(format!(
                    "Duplicate reaction entry for {}",
                    entry.emoji
                )));
            }
        }
        Ok(Self(entries))
    }

    /// Toggles the viewer's reaction with `emoji`.
    ///
    /// - absent: a new entry `{count: 1, user_reacted: true}` is appended
    /// - present and reacted: the viewer is removed; the entry is deleted when
    ///   its count would reach zero
    /// - present and not reacted: the viewer is added
    pub fn toggle(&mut self, emoji: &str) -> ReactionChange {
        let Some(index) = self.0.iter().position(|r| r.emoji == emoji) else {
            self.0.push(EmojiReaction::new(emoji, 1, true));
            return ReactionChange::Added;
        };

        let entry = &mut self.0[index];
        if entry.user_reacted {
            if entry.count <= 1 {
                self.0.remove(index);
                ReactionChange::Removed
            } else {
                entry.count -= 1;
                entry.user_reacted = false;
                ReactionChange::Decremented
            }
        } else {
            entry.count = entry.count.saturating_add(1);
            entry.user_reacted = true;
            ReactionChange::Incremented
        }
    }

    /// Looks up the entry for `emoji`.
    pub fn get(&self, emoji: &str) -> Option<&EmojiReaction> {
        self.0.iter().find(|r| r.emoji == emoji)
    }

    /// Returns the entries as a slice.
    pub fn as_slice(&self) -> &[EmojiReaction] {
        &self.0
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, EmojiReaction> {
        self.0.iter()
    }

    /// Number of distinct emoji.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nobody has reacted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<EmojiReaction>> for Reactions {
    type Error = ForumError;

    fn try_from(entries: Vec<EmojiReaction>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<Reactions> for Vec<EmojiReaction> {
    fn from(reactions: Reactions) -> Self {
        reactions.0
    }
}

impl<'a> IntoIterator for &'a Reactions {
    type Item = &'a EmojiReaction;
    type IntoIter = std::slice::Iter<'a, EmojiReaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
