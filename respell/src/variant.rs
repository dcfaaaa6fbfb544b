//! The two recognized regional spelling conventions.

use std::fmt;
use std::str::FromStr;

use language_tags::LanguageTag;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two recognized regional spelling conventions.
///
/// The variant is the unit of both dictionary lookup and persisted
/// preference; its persisted form is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// British English spellings (`colour`, `optimise`).
    British,
    /// American English spellings (`color`, `optimize`).
    American,
}

/// Error returned when parsing an unrecognized variant name.
///
/// Callers that read persisted preferences treat this as "value absent"
/// and fall through to the next source; it is never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized spelling variant: {0:?}")]
pub struct ParseVariantError(String);

impl Variant {
    /// The persisted string form of this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::British => "british",
            Variant::American => "american",
        }
    }

    /// Derives the default variant from a BCP-47 language tag.
    ///
    /// American English (`en-US`, with or without further subtags)
    /// yields [`Variant::American`]; every other tag, including
    /// malformed or empty ones, yields [`Variant::British`].
    pub fn from_locale(tag: &str) -> Variant {
        match tag.parse::<LanguageTag>() {
            Ok(tag)
                if tag.primary_language().eq_ignore_ascii_case("en")
                    && tag.region().map_or(false, |r| r.eq_ignore_ascii_case("US")) =>
            {
                Variant::American
            }
            _ => Variant::British,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Variant, ParseVariantError> {
        if s.eq_ignore_ascii_case("british") {
            Ok(Variant::British)
        } else if s.eq_ignore_ascii_case("american") {
            Ok(Variant::American)
        } else {
            Err(ParseVariantError(s.to_string()))
        }
    }
}
