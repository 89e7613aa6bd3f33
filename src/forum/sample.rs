//! Sample feed used to seed a fresh store.

use crate::forum::comment::Comment;
use crate::forum::post::Post;
use crate::forum::reaction::{EmojiReaction, Reactions};
use crate::forum::types::{Category, CommentId, PostId};

/// 2024-06-27T10:00:00Z
const STUDY_SPOTS_CREATED_AT: u64 = 1_719_482_400_000;
/// 2024-06-27T11:00:00Z
const LIBRARY_COMMENT_CREATED_AT: u64 = 1_719_486_000_000;
/// 2024-06-26T15:30:00Z
const HOMECOMING_CREATED_AT: u64 = 1_719_415_800_000;

/// Returns the sample posts in feed order (most recent first).
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId::new("1"),
            title: "📚 Best study spots on campus?".to_string(),
            content: "Looking for quiet places to study for finals. Any recommendations? \
                      Need somewhere with good wifi and comfy seats! ☕"
                .to_string(),
            category: Category::Academics,
            author_id: "user123".to_string(),
            author_name: "Study Beast 🤓".to_string(),
            created_at: STUDY_SPOTS_CREATED_AT,
            comments: vec![Comment {
                id: CommentId::new("c1"),
                content: "The Founders Library 4th floor is amazing! \
                          Super quiet and great for deep focus 💯"
                    .to_string(),
                author_id: "user456".to_string(),
                author_name: "Library Lover".to_string(),
                created_at: LIBRARY_COMMENT_CREATED_AT,
            }],
            reactions: seeded_reactions(&[("👍", 15, false), ("📚", 8, true), ("💯", 5, false)]),
        },
        Post {
            id: PostId::new("2"),
            title: "🏠 Howard Homecoming 2024 🎉".to_string(),
            content: "Who else is HYPED for Homecoming?! 🔥 What events are you most looking \
                      forward to? The yard show is gonna be INSANE this year! 💃🕺"
                .to_string(),
            category: Category::CampusLife,
            author_id: "user789".to_string(),
            author_name: "Bison Pride 💙❤️".to_string(),
            created_at: HOMECOMING_CREATED_AT,
            comments: Vec::new(),
            reactions: seeded_reactions(&[("🎉", 25, false), ("❤️", 18, true), ("🔥", 12, false)]),
        },
    ]
}

/// Seed entries are distinct emoji with non-zero counts.
fn seeded_reactions(entries: &[(&str, u32, bool)]) -> Reactions {
    Reactions(
        entries
            .iter()
            .map(|&(emoji, count, user_reacted)| EmojiReaction::new(emoji, count, user_reacted))
            .collect(),
    )
}
