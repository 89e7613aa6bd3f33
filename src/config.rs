//! Runtime configuration read from the environment.
//!
//! | Variable            | Default           |
//! |---------------------|-------------------|
//! | `FORUM_VIEWER_ID`   | `currentUser`     |
//! | `FORUM_VIEWER_NAME` | `Anonymous Bison` |
//! | `FORUM_SAMPLE_DATA` | `true`            |
//!
//! Log filtering is controlled separately through `RUST_LOG`.

use crate::error::{ForumError, Result};
use crate::forum::constants::{DEFAULT_VIEWER_ID, DEFAULT_VIEWER_NAME};
use crate::forum::Actor;
use std::env;

/// Environment variable holding the viewer's author id.
pub const VIEWER_ID_VAR: &str = "FORUM_VIEWER_ID";
/// Environment variable holding the viewer's display name.
pub const VIEWER_NAME_VAR: &str = "FORUM_VIEWER_NAME";
/// Environment variable toggling the sample feed.
pub const SAMPLE_DATA_VAR: &str = "FORUM_SAMPLE_DATA";

/// Configuration for a forum session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumConfig {
    /// Identity used for posts and comments created in this session.
    pub viewer: Actor,
    /// Whether the store starts with the sample feed.
    pub sample_data: bool,
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            viewer: Actor::default(),
            sample_data: true,
        }
    }
}

impl ForumConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to their defaults.
    ///
    /// # Errors
    /// Returns a configuration error if the viewer identity is blank or the
    /// sample-data flag is not a recognised boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let viewer_id = lookup(VIEWER_ID_VAR).unwrap_or_else(|| DEFAULT_VIEWER_ID.to_string());
        let viewer_name =
            lookup(VIEWER_NAME_VAR).unwrap_or_else(|| DEFAULT_VIEWER_NAME.to_string());
        let viewer = Actor::new(&viewer_id, &viewer_name)
            .map_err(|e| ForumError::config(format!("Invalid viewer identity: {}", e)))?;

        let sample_data = match lookup(SAMPLE_DATA_VAR) {
            Some(value) => parse_flag(SAMPLE_DATA_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            viewer,
            sample_data,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ForumError::config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
