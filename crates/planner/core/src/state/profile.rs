//! Per-user records kept next to builds.

use chrono::{DateTime, Utc};

use crate::config::BuildRules;

use super::error::ValidationError;
use super::ids::{BuildId, UserId};

/// Public display name of a user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub user_id: UserId,
    pub username: String,
}

impl Profile {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Trims and length-checks a username before it is stored.
    pub fn parse(user_id: UserId, raw: &str) -> Result<Self, ValidationError> {
        let username = raw.trim();
        let len = username.chars().count();
        if len < BuildRules::MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameLength {
                len,
                min: BuildRules::MIN_USERNAME_LEN,
            });
        }
        Ok(Self::new(user_id, username))
    }
}

/// Author label for a listing: the username, or the anonymous fallback.
pub fn author_name(profile: Option<&str>) -> String {
    profile
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(BuildRules::ANONYMOUS_AUTHOR)
        .to_string()
}

/// A user liking a build. At most one per `(user, build)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Favorite {
    pub user_id: UserId,
    pub build_id: BuildId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: UserId, build_id: BuildId, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            build_id,
            created_at,
        }
    }

    pub fn key(&self) -> (UserId, BuildId) {
        (self.user_id, self.build_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed_and_checked() {
        let user = UserId::new_v4();
        assert_eq!(Profile::parse(user, "  Melina ").unwrap().username, "Melina");
        assert_eq!(
            Profile::parse(user, " ab "),
            Err(ValidationError::UsernameLength { len: 2, min: 3 })
        );
    }

    #[test]
    fn missing_author_falls_back() {
        assert_eq!(author_name(Some("Ranni")), "Ranni");
        assert_eq!(author_name(Some("  ")), "Tarnished");
        assert_eq!(author_name(None), "Tarnished");
    }
}
