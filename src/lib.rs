//! # campus-forum
//!
//! An in-memory community forum store: a post feed filed under fixed
//! categories, comment threads, and emoji reactions, with category and text
//! filtering over the feed.
//!
//! There is no persistence or networking. The store is a plain owned value;
//! every operation runs to completion on `&mut self` and either succeeds or
//! leaves the store untouched.
//!
//! ## Examples
//!
//! ```rust
//! use campus_forum::forum::{Actor, Category, CategoryFilter, ForumStore};
//! # fn main() -> campus_forum::Result<()> {
//! let viewer = Actor::default();
//! let mut store = ForumStore::new();
//!
//! let id = store
//!     .create_post(&viewer, "Best study spots?", "Somewhere quiet with wifi", Category::Academics)?
//!     .id
//!     .clone();
//! store.add_comment(&id, &viewer, "Founders Library, 4th floor")?;
//! let reactions = store.toggle_reaction(&id, "👍")?;
//! assert_eq!(reactions[0].count, 1);
//!
//! let matches = store.filtered(CategoryFilter::Only(Category::Academics), "WIFI");
//! assert_eq!(matches.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod forum;

pub use config::ForumConfig;
pub use error::{ForumError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
