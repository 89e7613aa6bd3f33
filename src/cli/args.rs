//! Command-line and session-line parsing for the forum CLI.

use crate::error::{ForumError, Result};
use crate::forum::{Category, CategoryFilter, PostId};
use std::env;
use std::io::Write;

/// Command-line interface commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List {
        category: CategoryFilter,
        query: String,
        json: bool,
    },
    Show {
        post_id: PostId,
        json: bool,
    },
    Categories,
    Session,
    Help,
}

/// One line of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Post {
        category: Category,
        title: String,
        content: String,
    },
    Comment {
        post_id: PostId,
        content: String,
    },
    React {
        post_id: PostId,
        emoji: String,
    },
    List {
        category: CategoryFilter,
        query: String,
    },
    Show {
        post_id: PostId,
    },
    Emoji,
    Help,
    Quit,
}

/// Parse the process arguments into a Command
pub fn parse_args() -> Result<Command> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parse arguments (without the program name) into a Command
pub fn parse_args_from(args: &[String]) -> Result<Command> {
    let Some(name) = args.first() else {
        return Ok(Command::Help);
    };
    let rest = &args[1..];

    match name.as_str() {
        "list" => {
            let mut category = CategoryFilter::All;
            let mut query = String::new();
            let mut json = false;

            let mut iter = rest.iter();
            while let Some(arg) = iter.next() {
                match arg.as_str() {
                    "--category" | "-c" => {
                        let value = iter.next().ok_or_else(|| {
                            ForumError::invalid_input("--category requires a value")
                        })?;
                        category = value.parse()?;
                    }
                    "--search" | "-s" => {
                        let value = iter.next().ok_or_else(|| {
                            ForumError::invalid_input("--search requires a value")
                        })?;
                        query = value.clone();
                    }
                    "--json" => json = true,
                    other => {
                        return Err(ForumError::invalid_input(format!(
                            "Unknown option for list: '{}'",
                            other
                        )))
                    }
                }
            }

            Ok(Command::List {
                category,
                query,
                json,
            })
        }

        "show" => {
            let post_id = rest
                .first()
                .ok_or_else(|| ForumError::invalid_input("show requires a post id"))?;
            let json = match rest.get(1).map(String::as_str) {
                None => false,
                Some("--json") => true,
                Some(other) => {
                    return Err(ForumError::invalid_input(format!(
                        "Unknown option for show: '{}'",
                        other
                    )))
                }
            };
            Ok(Command::Show {
                post_id: PostId::new(post_id.as_str()),
                json,
            })
        }

        "categories" => Ok(Command::Categories),
        "session" => Ok(Command::Session),
        "help" | "--help" | "-h" => Ok(Command::Help),

        other => Err(ForumError::invalid_input(format!(
            "Unknown command '{}'",
            other
        ))),
    }
}

/// Parse one session line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_session_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let command = match verb {
        "post" => {
            let (category, rest) = split_word(rest);
            if category.is_empty() {
                return Err(ForumError::invalid_input(
                    "Usage: post <category> <title> | <content>",
                ));
            }
            let (title, content) = rest.split_once('|').ok_or_else(|| {
                ForumError::invalid_input("Usage: post <category> <title> | <content>")
            })?;
            SessionCommand::Post {
                category: category.parse()?,
                title: title.to_string(),
                content: content.to_string(),
            }
        }
        "comment" => {
            let (post_id, content) = split_word(rest);
            if post_id.is_empty() {
                return Err(ForumError::invalid_input("Usage: comment <post-id> <text>"));
            }
            SessionCommand::Comment {
                post_id: PostId::new(post_id),
                content: content.to_string(),
            }
        }
        "react" => {
            let (post_id, emoji) = split_word(rest);
            if post_id.is_empty() {
                return Err(ForumError::invalid_input("Usage: react <post-id> <emoji>"));
            }
            SessionCommand::React {
                post_id: PostId::new(post_id),
                emoji: emoji.to_string(),
            }
        }
        "list" => {
            let (first, remainder) = split_word(rest);
            match first.parse::<CategoryFilter>() {
                Ok(category) => SessionCommand::List {
                    category,
                    query: remainder.to_string(),
                },
                Err(_) => SessionCommand::List {
                    category: CategoryFilter::All,
                    query: rest.to_string(),
                },
            }
        }
        "show" => {
            let (post_id, _) = split_word(rest);
            if post_id.is_empty() {
                return Err(ForumError::invalid_input("Usage: show <post-id>"));
            }
            SessionCommand::Show {
                post_id: PostId::new(post_id),
            }
        }
        "emoji" => SessionCommand::Emoji,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => {
            return Err(ForumError::invalid_input(format!(
                "Unknown session command '{}' (try 'help')",
                other
            )))
        }
    };

    Ok(Some(command))
}

/// Splits off the first whitespace-delimited word; the remainder is trimmed.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

/// Print usage information
pub fn print_usage() {
    println!("campus-forum - community forum feed");
    println!("===================================");
    println!();
    println!("Usage: campus-forum <command> [args...]");
    println!();
    println!("Commands:");
    println!("  list [--category <c|all>] [--search <text>] [--json]  List posts, newest first");
    println!("  show <post-id> [--json]                              Show a post with comments");
    println!("  categories                                           List categories with post counts");
    println!("  session                                              Read commands from stdin");
    println!();
    print!("{}", SESSION_HELP);
    println!();
    println!("Categories: academics, dorms, food-spots, financial-aid, campus-life");
    println!();
    println!("Environment:");
    println!("  FORUM_VIEWER_ID     Author id for new content (default: currentUser)");
    println!("  FORUM_VIEWER_NAME   Display name for new content (default: Anonymous Bison)");
    println!("  FORUM_SAMPLE_DATA   Seed the sample feed (default: true)");
    println!("  RUST_LOG            Log filter (default: campus_forum=info)");
}

const SESSION_HELP: &str = "\
Session commands:
  post <category> <title> | <content>   Create a post
  comment <post-id> <text>              Comment on a post
  react <post-id> <emoji>               Toggle your reaction
  emoji                                 Show the reaction palette
  list [<category|all>] [query...]      List matching posts
  show <post-id>                        Show a post with comments
  help                                  Show this help
  quit                                  End the session
";

/// Write the session command reference
pub fn write_session_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.write_all(SESSION_HELP.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_list() {
        let cmd = parse_args_from(&args(&["list", "--category", "dorms", "--search", "laundry"]))
            .unwrap();
        assert_eq!(
            cmd,
            Command::List {
                category: CategoryFilter::Only(Category::Dorms),
                query: "laundry".to_string(),
                json: false,
            }
        );

        let cmd = parse_args_from(&args(&["list", "--json"])).unwrap();
        assert_eq!(
            cmd,
            Command::List {
                category: CategoryFilter::All,
                query: String::new(),
                json: true,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args_from(&args(&["list", "--category"])).is_err());
        assert!(parse_args_from(&args(&["list", "--category", "sports"])).is_err());
        assert!(parse_args_from(&args(&["show"])).is_err());
        assert!(parse_args_from(&args(&["frobnicate"])).is_err());
    }

    #[test]
    fn test_parse_show_and_defaults() {
        assert_eq!(
            parse_args_from(&args(&["show", "1", "--json"])).unwrap(),
            Command::Show {
                post_id: PostId::new("1"),
                json: true
            }
        );
        assert_eq!(parse_args_from(&[]).unwrap(), Command::Help);
        assert_eq!(parse_args_from(&args(&["session"])).unwrap(), Command::Session);
    }

    #[test]
    fn test_session_post() {
        let cmd = parse_session_line("post food-spots Late night eats | Where is open after 11?")
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            SessionCommand::Post {
                category: Category::FoodSpots,
                title: "Late night eats ".to_string(),
                content: " Where is open after 11?".to_string(),
            }
        );

        assert!(parse_session_line("post dorms no separator").is_err());
        assert!(parse_session_line("post sports a | b").is_err());
    }

    #[test]
    fn test_session_comment_and_react() {
        assert_eq!(
            parse_session_line("comment 1 see you there").unwrap(),
            Some(SessionCommand::Comment {
                post_id: PostId::new("1"),
                content: "see you there".to_string(),
            })
        );
        assert_eq!(
            parse_session_line("react 2 🎉").unwrap(),
            Some(SessionCommand::React {
                post_id: PostId::new("2"),
                emoji: "🎉".to_string(),
            })
        );
        assert!(parse_session_line("comment").is_err());
    }

    #[test]
    fn test_session_list() {
        assert_eq!(
            parse_session_line("list academics study spots").unwrap(),
            Some(SessionCommand::List {
                category: CategoryFilter::Only(Category::Academics),
                query: "study spots".to_string(),
            })
        );
        assert_eq!(
            parse_session_line("list homecoming").unwrap(),
            Some(SessionCommand::List {
                category: CategoryFilter::All,
                query: "homecoming".to_string(),
            })
        );
        assert_eq!(
            parse_session_line("list").unwrap(),
            Some(SessionCommand::List {
                category: CategoryFilter::All,
                query: String::new(),
            })
        );
    }

    #[test]
    fn test_session_blank_and_unknown() {
        assert_eq!(parse_session_line("   ").unwrap(), None);
        assert_eq!(parse_session_line("# note").unwrap(), None);
        assert_eq!(parse_session_line("quit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_session_line("emoji").unwrap(), Some(SessionCommand::Emoji));
        assert!(parse_session_line("dance").is_err());
    }

    #[test]
    fn test_session_help_lists_every_command() {
        let mut out = Vec::new();
        write_session_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Session commands:\n"));
        for verb in ["post", "comment", "react", "emoji", "list", "show", "help", "quit"] {
            assert!(text.contains(&format!("\n  {} ", verb)), "missing {}", verb);
        }
    }
}
