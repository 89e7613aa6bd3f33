//! Forum in-memory state management.
//!
//! `ForumStore` owns the canonical post feed and is the only place posts,
//! comments and reactions are mutated. Every operation validates first and
//! mutates second, so a failed call leaves the store exactly as it was.
//!
//! ## Ordering
//!
//! The feed is kept most-recent-first: new posts are prepended. Filtered
//! views (see the `filter` module) preserve that order.
//!
//! ## Indexing
//!
//! A set of known post ids backs the uniqueness check on insert. Lookups by
//! id and filtering are linear scans over the feed.

use crate::config::ForumConfig;
use crate::error::{ForumError, Result};
use crate::forum::comment::Comment;
use crate::forum::filter::{filter_posts, CategoryFilter};
use crate::forum::post::Post;
use crate::forum::reaction::EmojiReaction;
use crate::forum::sample::sample_posts;
use crate::forum::types::{Actor, Category, PostId};
use crate::forum::validation::{require_text, validate_emoji};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// In-memory store for a single forum feed.
#[derive(Debug, Default, Clone)]
pub struct ForumStore {
    /// All posts, most recent first.
    posts: Vec<Post>,
    /// Ids of every post in `posts`.
    ids: HashSet<PostId>,
}

impl ForumStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the sample feed.
    pub fn with_sample_posts() -> Self {
        let posts = sample_posts();
        let ids = posts.iter().map(|p| p.id.clone()).collect();
        Self { posts, ids }
    }

    /// Creates a store as described by `config`.
    pub fn from_config(config: &ForumConfig) -> Self {
        if config.sample_data {
            Self::with_sample_posts()
        } else {
            Self::new()
        }
    }

    /// Creates a store from posts given in feed order (most recent first).
    ///
    /// # Errors
    /// Returns a validation error if two posts share an id or a post has a
    /// blank title or content.
    pub fn from_posts(posts: Vec<Post>) -> Result<Self> {
        let mut store = Self::new();
        for post in posts.into_iter().rev() {
            store.insert_post(post)?;
        }
        Ok(store)
    }

    /// Creates a new post and prepends it to the feed.
    ///
    /// Title and content are stored trimmed. The returned post has a fresh
    /// id, the current timestamp, and no comments or reactions.
    ///
    /// # Errors
    /// Returns a validation error if the title or content is blank after
    /// trimming. The store is unchanged on error.
    pub fn create_post(
        &mut self,
        author: &Actor,
        title: &str,
        content: &str,
        category: Category,
    ) -> Result<&Post> {
        let mut post = Post::create(author, title, content, category)?;
        while self.ids.contains(&post.id) {
            post.id = PostId::generate();
        }

        debug!(
            post_id = %post.id,
            category = %post.category,
            author_id = %post.author_id,
            "Created post"
        );

        self.ids.insert(post.id.clone());
        self.posts.insert(0, post);
        Ok(&self.posts[0])
    }

    /// Prepends an already-built post, keeping its id and timestamp.
    ///
    /// # Errors
    /// Returns a validation error if the id is already taken or the title or
    /// content is blank.
    pub fn insert_post(&mut self, post: Post) -> Result<()> {
        if self.ids.contains(&post.id) {
            return Err(ForumError::validation(format!(
                "Post id {} already exists",
                post.id
            )));
        }
        require_text("Post title", &post.title)?;
        require_text("Post content", &post.content)?;

        self.ids.insert(post.id.clone());
        self.posts.insert(0, post);
        Ok(())
    }

    /// Appends a comment by `author` to the post `post_id`.
    ///
    /// # Errors
    /// - Validation error if the content is blank after trimming
    /// - `NotFound` if no post has this id
    ///
    /// The store is unchanged on error.
    pub fn add_comment(
        &mut self,
        post_id: &PostId,
        author: &Actor,
        content: &str,
    ) -> Result<&Comment> {
        let comment = Comment::create(author, content)?;
        let post = self.post_mut(post_id)?;

        debug!(
            post_id = %post.id,
            comment_id = %comment.id,
            author_id = %comment.author_id,
            "Added comment"
        );

        post.comments.push(comment);
        let added = post.comments.len() - 1;
        Ok(&post.comments[added])
    }

    /// Toggles the viewer's `emoji` reaction on the post `post_id`.
    ///
    /// Returns the post's reaction entries after the toggle.
    ///
    /// # Errors
    /// - Validation error if the emoji is blank
    /// - `NotFound` if no post has this id
    pub fn toggle_reaction(&mut self, post_id: &PostId, emoji: &str) -> Result<&[EmojiReaction]> {
        validate_emoji(emoji)?;
        let post = self.post_mut(post_id)?;

        let change = post.reactions.toggle(emoji);
        debug!(
            post_id = %post.id,
            emoji = emoji,
            change = %change,
            "Toggled reaction"
        );

        Ok(post.reactions.as_slice())
    }

    /// Returns the feed, most recent first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Gets a post by id.
    pub fn get_post(&self, post_id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == post_id)
    }

    /// Checks if a post exists.
    pub fn contains(&self, post_id: &PostId) -> bool {
        self.ids.contains(post_id)
    }

    /// Returns the number of posts.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Returns true if the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Returns the feed filtered by category and text query.
    ///
    /// See [`filter_posts`] for the matching rules.
    pub fn filtered(&self, category: CategoryFilter, query: &str) -> Vec<&Post> {
        filter_posts(&self.posts, category, query)
    }

    /// Returns the number of posts in every category, including empty ones.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        for post in &self.posts {
            *counts.entry(post.category).or_default() += 1;
        }
        counts
    }

    fn post_mut(&mut self, post_id: &PostId) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| &p.id == post_id)
            .ok_or_else(|| ForumError::not_found(format!("Post {} does not exist", post_id)))
    }
}
