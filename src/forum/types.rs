//! Forum-specific types shared by posts, comments and the store.
//!
//! This module contains:
//! - `Category`: the fixed set of post categories
//! - `PostId` / `CommentId`: string identifiers assigned at creation
//! - `Actor`: the identity an operation is performed on behalf of

use crate::error::{ForumError, Result};
use crate::forum::constants::{DEFAULT_VIEWER_ID, DEFAULT_VIEWER_NAME};
use crate::forum::validation::require_text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a post is filed under.
///
/// Serialized as its kebab-case wire value (`food-spots`, `campus-life`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Academics,
    Dorms,
    FoodSpots,
    FinancialAid,
    CampusLife,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Academics,
        Category::Dorms,
        Category::FoodSpots,
        Category::FinancialAid,
        Category::CampusLife,
    ];

    /// Returns the wire value of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Academics => "academics",
            Category::Dorms => "dorms",
            Category::FoodSpots => "food-spots",
            Category::FinancialAid => "financial-aid",
            Category::CampusLife => "campus-life",
        }
    }

    /// Returns the human-readable label shown in the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Academics => "Academics",
            Category::Dorms => "Dorms",
            Category::FoodSpots => "Food Spots",
            Category::FinancialAid => "Financial Aid",
            Category::CampusLife => "Campus Life",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ForumError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ForumError::validation(format!(
                    "Unknown category '{}' (expected one of: academics, dorms, food-spots, financial-aid, campus-life)",
                    wanted
                ))
            })
    }
}

/// Unique identifier of a post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Unique identifier of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(String);

impl CommentId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user an operation is performed on behalf of.
///
/// Store operations that author content take an `&Actor` rather than reading
/// a global "current user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Stable author identifier.
    pub id: String,
    /// Display name shown next to authored content.
    pub name: String,
}

impl Actor {
    /// Creates a validated actor. Both fields are trimmed.
    ///
    /// # Errors
    /// Returns a validation error if either field is blank.
    pub fn new(id: &str, name: &str) -> Result<Self> {
        Ok(Self {
            id: require_text("Author id", id)?,
            name: require_text("Author name", name)?,
        })
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            id: DEFAULT_VIEWER_ID.to_string(),
            name: DEFAULT_VIEWER_NAME.to_string(),
        }
    }
}

/// Returns the current time in milliseconds since the Unix epoch.
pub fn current_timestamp_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
