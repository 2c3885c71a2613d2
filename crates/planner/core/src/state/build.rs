//! Saved builds.

use chrono::{DateTime, Utc};

use crate::config::BuildRules;
use crate::stats::AttributeBlock;

use super::equipment::Loadout;
use super::error::ValidationError;
use super::ids::{BuildId, UserId};

/// Display name of a build: trimmed, 3 to 50 characters.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct BuildName(String);

impl BuildName {
    /// Trims and length-checks a raw name. Length counts characters, not bytes.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(BuildRules::MIN_NAME_LEN..=BuildRules::MAX_NAME_LEN).contains(&len) {
            return Err(ValidationError::NameLength {
                len,
                min: BuildRules::MIN_NAME_LEN,
                max: BuildRules::MAX_NAME_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BuildName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BuildName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BuildName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BuildName> for String {
    fn from(name: BuildName) -> Self {
        name.0
    }
}

/// A character configuration owned by one user.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Build {
    pub id: BuildId,
    pub owner: UserId,
    pub name: BuildName,
    pub attributes: AttributeBlock,
    pub loadout: Loadout,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Build {
    /// Creates a build stamped with `now` for both timestamps.
    pub fn new(
        id: BuildId,
        owner: UserId,
        name: BuildName,
        attributes: AttributeBlock,
        loadout: Loadout,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            attributes,
            loadout,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner == user
    }

    pub fn soul_level(&self) -> u32 {
        self.attributes.soul_level()
    }
}
