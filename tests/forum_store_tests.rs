//! End-to-end tests for the forum store.
//!
//! These tests drive the public API the way a presentation layer would:
//! seed or create posts, comment, react, and filter the feed.

use campus_forum::forum::{
    filter_posts, sample_posts, Actor, Category, CategoryFilter, EmojiReaction, ForumStore, Post,
    PostId,
};
use campus_forum::ForumError;
use std::collections::HashSet;

fn viewer() -> Actor {
    Actor::default()
}

fn create(store: &mut ForumStore, title: &str, content: &str, category: Category) -> PostId {
    store
        .create_post(&viewer(), title, content, category)
        .expect("Failed to create post")
        .id
        .clone()
}

// =============================================================================
// Post Creation
// =============================================================================

#[test]
fn test_create_post_prepends_with_unique_id() {
    let mut store = ForumStore::with_sample_posts();
    let before: HashSet<PostId> = store.posts().iter().map(|p| p.id.clone()).collect();
    let count = store.post_count();

    let post = store
        .create_post(
            &viewer(),
            "  Financial aid deadline?  ",
            "When is the FAFSA due this year?",
            Category::FinancialAid,
        )
        .unwrap()
        .clone();

    assert_eq!(store.post_count(), count + 1);
    assert_eq!(store.posts()[0], post);
    assert!(!before.contains(&post.id));

    assert_eq!(post.title, "Financial aid deadline?");
    assert_eq!(post.author_id, "currentUser");
    assert_eq!(post.author_name, "Anonymous Bison");
    assert!(post.comments.is_empty());
    assert!(post.reactions.is_empty());
}

#[test]
fn test_create_post_uses_injected_actor() {
    let mut store = ForumStore::new();
    let actor = Actor::new("user999", "Dorm Captain").unwrap();

    let post = store
        .create_post(&actor, "Quiet hours", "Starting at 10pm", Category::Dorms)
        .unwrap();

    assert_eq!(post.author_id, "user999");
    assert_eq!(post.author_name, "Dorm Captain");
}

#[test]
fn test_create_post_blank_fields_do_not_mutate() {
    let mut store = ForumStore::with_sample_posts();
    let snapshot = store.posts().to_vec();

    for (title, content) in [("", "c"), ("t", ""), ("  ", "c"), ("t", "\n\t "), (" ", " ")] {
        let err = store
            .create_post(&viewer(), title, content, Category::CampusLife)
            .unwrap_err();
        assert!(matches!(err, ForumError::Validation(_)));
    }

    assert_eq!(store.posts(), &snapshot[..]);
}

#[test]
fn test_long_non_blank_input_is_accepted() {
    let mut store = ForumStore::with_sample_posts();
    let title = "a".repeat(513);
    let content = "b".repeat(200 * 1024);

    let id = create(&mut store, &title, &content, Category::Dorms);
    let post = store.get_post(&id).unwrap();
    assert_eq!(post.title, title);
    assert_eq!(post.content, content);

    let comment = "c".repeat(10 * 1024 + 1);
    store.add_comment(&PostId::new("1"), &viewer(), &comment).unwrap();
    assert_eq!(
        store.get_post(&PostId::new("1")).unwrap().last_comment().unwrap().content,
        comment
    );
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn test_add_comment_appends_only_to_target() {
    let mut store = ForumStore::new();
    let a = create(&mut store, "A", "first post", Category::Academics);
    let b = create(&mut store, "B", "second post", Category::Dorms);

    store.add_comment(&a, &viewer(), "one").unwrap();
    store.add_comment(&a, &viewer(), "two").unwrap();
    let comment = store.add_comment(&a, &viewer(), "hello").unwrap().clone();

    let post = store.get_post(&a).unwrap();
    let contents: Vec<_> = post.comments.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["one", "two", "hello"]);
    assert_eq!(post.last_comment(), Some(&comment));
    assert!(store.get_post(&b).unwrap().comments.is_empty());
}

#[test]
fn test_add_comment_unknown_post_is_not_found() {
    let mut store = ForumStore::with_sample_posts();
    let snapshot = store.posts().to_vec();

    let err = store
        .add_comment(&PostId::new("does-not-exist"), &viewer(), "x")
        .unwrap_err();

    assert!(matches!(err, ForumError::NotFound(_)));
    assert_eq!(store.posts(), &snapshot[..]);
}

// =============================================================================
// Reactions
// =============================================================================

#[test]
fn test_toggle_reaction_add_remove_recreate() {
    let mut store = ForumStore::with_sample_posts();
    let id = PostId::new("2");

    let reactions = store.toggle_reaction(&id, "👍").unwrap().to_vec();
    assert!(reactions.contains(&EmojiReaction::new("👍", 1, true)));

    let reactions = store.toggle_reaction(&id, "👍").unwrap().to_vec();
    assert!(reactions.iter().all(|r| r.emoji != "👍"));

    let reactions = store.toggle_reaction(&id, "👍").unwrap().to_vec();
    assert!(reactions.contains(&EmojiReaction::new("👍", 1, true)));
}

#[test]
fn test_toggle_reaction_on_seeded_entries() {
    let mut store = ForumStore::with_sample_posts();
    let id = PostId::new("1");

    // 👍 15, not reacted -> 16, reacted
    store.toggle_reaction(&id, "👍").unwrap();
    // 📚 8, reacted -> 7, not reacted
    store.toggle_reaction(&id, "📚").unwrap();

    let post = store.get_post(&id).unwrap();
    assert_eq!(post.reactions.get("👍"), Some(&EmojiReaction::new("👍", 16, true)));
    assert_eq!(post.reactions.get("📚"), Some(&EmojiReaction::new("📚", 7, false)));
    assert_eq!(post.reactions.get("💯"), Some(&EmojiReaction::new("💯", 5, false)));
}

#[test]
fn test_toggle_reaction_twice_restores_collection() {
    let mut store = ForumStore::with_sample_posts();

    for id in ["1", "2"] {
        let id = PostId::new(id);
        for emoji in ["👍", "📚", "💯", "🎉", "❤️", "🔥", "🤔"] {
            let before = store.get_post(&id).unwrap().reactions.clone();
            store.toggle_reaction(&id, emoji).unwrap();
            store.toggle_reaction(&id, emoji).unwrap();
            let after = &store.get_post(&id).unwrap().reactions;

            // Entries are compared as sets; a removed-then-recreated entry
            // moves to the end.
            let mut before: Vec<_> = before.iter().cloned().collect();
            let mut after: Vec<_> = after.iter().cloned().collect();
            before.sort_by(|a, b| a.emoji.cmp(&b.emoji));
            after.sort_by(|a, b| a.emoji.cmp(&b.emoji));
            assert_eq!(before, after, "round trip failed for {}", emoji);
        }
    }
}

#[test]
fn test_toggle_reaction_unknown_post() {
    let mut store = ForumStore::with_sample_posts();
    let snapshot = store.posts().to_vec();

    let err = store.toggle_reaction(&PostId::new("0"), "👍").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.posts(), &snapshot[..]);
}

// =============================================================================
// Filtering
// =============================================================================

fn campus_feed() -> ForumStore {
    let mut store = ForumStore::with_sample_posts();
    create(&mut store, "Dining hall review", "The jerk chicken slaps", Category::FoodSpots);
    create(&mut store, "Office hours", "Prof moved them to Thursday", Category::Academics);
    create(&mut store, "Homecoming parking", "Where do guests park?", Category::CampusLife);
    create(&mut store, "Roommate search", "Anyone need one for spring?", Category::Dorms);
    store
}

#[test]
fn test_filter_by_category_preserves_order() {
    let store = campus_feed();
    let result = filter_posts(store.posts(), CategoryFilter::Only(Category::Academics), "");

    let titles: Vec<_> = result.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Office hours", "📚 Best study spots on campus?"]);
    assert!(result.iter().all(|p| p.category == Category::Academics));
}

#[test]
fn test_filter_all_by_query() {
    let store = campus_feed();
    let result = filter_posts(store.posts(), CategoryFilter::All, "homecoming");

    let titles: Vec<_> = result.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Homecoming parking", "🏠 Howard Homecoming 2024 🎉"]);
}

#[test]
fn test_filter_does_not_mutate() {
    let store = campus_feed();
    let snapshot = store.posts().to_vec();

    let _ = store.filtered(CategoryFilter::Only(Category::Dorms), "spring");
    let _ = filter_posts(store.posts(), CategoryFilter::All, "x");

    assert_eq!(store.posts(), &snapshot[..]);
}

#[test]
fn test_filter_over_plain_slice() {
    let posts: Vec<Post> = sample_posts();
    assert_eq!(filter_posts(&posts, CategoryFilter::All, "FINALS").len(), 1);
    assert!(filter_posts(&posts, CategoryFilter::Only(Category::Dorms), "").is_empty());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_post_json_shape() {
    let store = ForumStore::with_sample_posts();
    let value = serde_json::to_value(&store.posts()[0]).unwrap();

    assert_eq!(value["id"], "1");
    assert_eq!(value["category"], "academics");
    assert_eq!(value["authorName"], "Study Beast 🤓");
    assert_eq!(value["comments"][0]["authorId"], "user456");
    assert_eq!(value["reactions"][1]["userReacted"], true);

    let back: Post = serde_json::from_value(value).unwrap();
    assert_eq!(back, store.posts()[0]);
}
