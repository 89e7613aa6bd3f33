//! In-memory community forum.
//!
//! The forum is a single feed of posts, newest first. Each post is filed
//! under one of five fixed categories and carries:
//! - **Comments**: an append-only thread, in arrival order
//! - **Reactions**: one aggregate entry per emoji, toggled by the viewer
//!
//! ## Hierarchy
//!
//! ```text
//! ForumStore
//!     └── Post (category, author, timestamp)
//!             ├── Comment
//!             └── EmojiReaction
//! ```
//!
//! All mutation goes through [`ForumStore`]. Filtering by category and text
//! is a pure view computed by [`filter_posts`].

mod comment;
pub mod constants;
mod filter;
mod post;
mod reaction;
mod sample;
mod state;
pub mod types;
pub mod validation;

pub use comment::Comment;
pub use filter::{filter_posts, CategoryFilter};
pub use post::Post;
pub use reaction::{EmojiReaction, ReactionChange, Reactions};
pub use sample::sample_posts;
pub use state::ForumStore;
pub use types::{current_timestamp_millis, Actor, Category, CommentId, PostId};
