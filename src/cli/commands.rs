//! Command implementations for the forum CLI.
//!
//! Commands write their output to any `Write` so they can be driven from
//! tests as well as from stdout.

use crate::{
    cli::args::{parse_session_line, write_session_help, SessionCommand},
    cli::utils::{write_emoji_palette, write_json, write_post_detail, write_post_summary},
    forum::{current_timestamp_millis, Actor, CategoryFilter, ForumStore, PostId},
    ForumError, Result,
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Execute list command
pub fn list<W: Write>(
    store: &ForumStore,
    category: CategoryFilter,
    query: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let posts = store.filtered(category, query);
    info!(category = %category, query = query, matches = posts.len(), "Listing posts");

    if json {
        return write_json(out, &posts);
    }

    if posts.is_empty() {
        writeln!(out, "No posts found. Be the first to start the conversation!")?;
        return Ok(());
    }

    let now = current_timestamp_millis();
    for post in posts {
        write_post_summary(out, post, now)?;
    }
    Ok(())
}

/// Execute show command
pub fn show<W: Write>(store: &ForumStore, post_id: &PostId, json: bool, out: &mut W) -> Result<()> {
    let post = store
        .get_post(post_id)
        .ok_or_else(|| ForumError::not_found(format!("Post {} does not exist", post_id)))?;

    if json {
        write_json(out, post)
    } else {
        write_post_detail(out, post, current_timestamp_millis())
    }
}

/// Execute categories command
pub fn categories<W: Write>(store: &ForumStore, out: &mut W) -> Result<()> {
    for (category, count) in store.category_counts() {
        writeln!(
            out,
            "{:<14} {:<14} {}",
            category.as_str(),
            category.label(),
            count
        )?;
    }
    Ok(())
}

/// Run an interactive session, reading one command per line from `input`.
///
/// Store errors (blank fields, unknown post ids) and malformed lines are
/// reported and the session continues. I/O errors end the session.
pub fn session<R: BufRead, W: Write>(
    store: &mut ForumStore,
    viewer: &Actor,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!(viewer_id = %viewer.id, posts = store.post_count(), "Starting session");

    for line in input.lines() {
        let line = line?;
        let outcome = match parse_session_line(&line) {
            Ok(Some(command)) => execute_session_command(store, viewer, command, out),
            Ok(None) => Ok(true),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(ForumError::Io(e)) => return Err(ForumError::Io(e)),
            Err(e) => {
                warn!(error = %e, "Session command failed");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }

    info!(posts = store.post_count(), "Session ended");
    Ok(())
}

/// Execute one session command. Returns `Ok(false)` when the session should end.
pub fn execute_session_command<W: Write>(
    store: &mut ForumStore,
    viewer: &Actor,
    command: SessionCommand,
    out: &mut W,
) -> Result<bool> {
    match command {
        SessionCommand::Post {
            category,
            title,
            content,
        } => {
            let post = store.create_post(viewer, &title, &content, category)?;
            writeln!(out, "Created post {}", post.id)?;
        }
        SessionCommand::Comment { post_id, content } => {
            let comment = store.add_comment(&post_id, viewer, &content)?;
            writeln!(out, "Added comment {} to post {}", comment.id, post_id)?;
        }
        SessionCommand::React { post_id, emoji } => {
            let reactions = store.toggle_reaction(&post_id, &emoji)?;
            let summary: Vec<String> = reactions
                .iter()
                .map(|r| format!("{}{}", r.emoji, r.count))
                .collect();
            writeln!(out, "Reactions on {}: {}", post_id, summary.join(" "))?;
        }
        SessionCommand::List { category, query } => {
            list(store, category, &query, false, out)?;
        }
        SessionCommand::Show { post_id } => {
            show(store, &post_id, false, out)?;
        }
        SessionCommand::Emoji => {
            write_emoji_palette(out)?;
        }
        SessionCommand::Help => {
            write_session_help(out)?;
        }
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}
