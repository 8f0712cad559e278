//! Identifier casing conversion for language naming conventions.

use crate::constants::{CAMEL_CONVENTION, SNAKE_CONVENTION};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::str::FromStr;

/// Identifier casing style a target language's generated names follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    Snake,
    Camel,
}

impl FromStr for NamingConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            SNAKE_CONVENTION => Ok(NamingConvention::Snake),
            CAMEL_CONVENTION => Ok(NamingConvention::Camel),
            other => Err(Error::UnknownConventionError { convention: other.to_string() }),
        }
    }
}

/// Maps each identifier name to the spelling the convention expects.
/// Identifiers are written in snake_case, so snake-style languages need no
/// adjustments and the map is empty.
pub fn convention_name_map(
    names: &[String],
    convention: NamingConvention,
) -> IndexMap<String, String> {
    match convention {
        NamingConvention::Snake => IndexMap::new(),
        NamingConvention::Camel => {
            names.iter().map(|name| (name.clone(), to_camel_case(name))).collect()
        }
    }
}

/// Converts a snake_case identifier to camelCase. Only an underscore
/// directly followed by a lowercase letter is collapsed; every other
/// character passes through untouched.
pub fn to_camel_case(name: &str) -> String {
    let pair = Regex::new("_[a-z]").unwrap();
    pair.replace_all(name, |caps: &Captures| caps[0][1..].to_uppercase()).into_owned()
}
