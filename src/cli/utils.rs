//! Display helpers for CLI output.

use crate::forum::constants::EMOJI_PALETTE;
use crate::forum::{Comment, Post};
use crate::Result;
use serde::Serialize;
use std::io::Write;

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

const PALETTE_ROW: usize = 20;

/// Format a millisecond timestamp relative to `now_ms` ("3 days ago").
///
/// Timestamps in the future render as "just now".
pub fn format_relative(timestamp_ms: u64, now_ms: u64) -> String {
    let elapsed = now_ms.saturating_sub(timestamp_ms);

    if elapsed < MINUTE_MS {
        "just now".to_string()
    } else if elapsed < HOUR_MS {
        plural(elapsed / MINUTE_MS, "minute")
    } else if elapsed < DAY_MS {
        plural(elapsed / HOUR_MS, "hour")
    } else if elapsed < 2 * DAY_MS {
        "yesterday".to_string()
    } else {
        plural(elapsed / DAY_MS, "day")
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write the one-line feed entry for a post.
pub fn write_post_summary<W: Write>(out: &mut W, post: &Post, now_ms: u64) -> Result<()> {
    let reactions: Vec<String> = post
        .reactions
        .iter()
        .map(|r| {
            let mine = if r.user_reacted { "*" } else { "" };
            format!("{}{}{}", r.emoji, r.count, mine)
        })
        .collect();

    writeln!(
        out,
        "[{}] {} ({}) by {}, {} | {} comment(s) {}",
        post.id,
        post.title,
        post.category.label(),
        post.author_name,
        format_relative(post.created_at, now_ms),
        post.comment_count(),
        reactions.join(" ")
    )?;
    Ok(())
}

/// Write a post with its full content and comment thread.
pub fn write_post_detail<W: Write>(out: &mut W, post: &Post, now_ms: u64) -> Result<()> {
    write_post_summary(out, post, now_ms)?;
    writeln!(out)?;
    writeln!(out, "{}", post.content)?;
    writeln!(out)?;
    for comment in &post.comments {
        write_comment(out, comment, now_ms)?;
    }
    Ok(())
}

/// Write a single comment line.
pub fn write_comment<W: Write>(out: &mut W, comment: &Comment, now_ms: u64) -> Result<()> {
    writeln!(
        out,
        "  - {} ({}): {}",
        comment.author_name,
        format_relative(comment.created_at, now_ms),
        comment.content
    )?;
    Ok(())
}

/// Write the reaction picker palette, a fixed number of emoji per row.
pub fn write_emoji_palette<W: Write>(out: &mut W) -> Result<()> {
    for row in EMOJI_PALETTE.chunks(PALETTE_ROW) {
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}
