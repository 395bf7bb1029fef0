//! Language tags of the form `xx` or `xx-XX`.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::InvalidLanguageTag;

static LANGUAGE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").unwrap());

/// A validated language tag: two lowercase letters, optionally followed by a
/// hyphen and a two-letter uppercase region.
///
/// No registry lookup is performed, so `zz-ZZ` is as valid as `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse a tag, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, InvalidLanguageTag> {
        let tag = input.trim();
        if LANGUAGE_TAG_REGEX.is_match(tag) {
            Ok(Self(tag.to_string()))
        } else {
            Err(InvalidLanguageTag(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, e.g. `en` for `en-US`.
    pub fn language(&self) -> &str {
        &self.0[..2]
    }

    /// The region subtag, e.g. `US` for `en-US`.
    pub fn region(&self) -> Option<&str> {
        self.0.get(3..)
    }
}

impl FromStr for LanguageTag {
    type Err = InvalidLanguageTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
