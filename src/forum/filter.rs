//! Category and text filtering over the post feed.
//!
//! Filtering is a pure function of the post list: it never mutates and it
//! keeps the source order (most recent first for the store's feed).

use crate::error::{ForumError, Result};
use crate::forum::post::Post;
use crate::forum::types::Category;
use std::fmt;
use std::str::FromStr;

/// Category selection of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// A single category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if posts of `category` pass this filter.
    pub fn allows(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ForumError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Returns the posts that pass both the category filter and the text query.
///
/// An empty query matches everything. A non-empty query is matched as a
/// case-insensitive substring of the title or the content; it is not trimmed.
pub fn filter_posts<'a, I>(posts: I, category: CategoryFilter, query: &str) -> Vec<&'a Post>
where
    I: IntoIterator<Item = &'a Post>,
{
    let lowered = query.to_lowercase();
    posts
        .into_iter()
        .filter(|post| category.allows(post.category))
        .filter(|post| lowered.is_empty() || post.matches_lowered(&lowered))
        .collect()
}
