//! Configuration handling for skelgen.
//! This module provides functionality for loading the run configuration and
//! resolving per-language attributes against the built-in default tables.

use crate::casing::NamingConvention;
use crate::constants::{
    self, CC_KEY, LANG_TO_COMMENT_CHAR, LANG_TO_NAMING_CONVENTION, LANG_TO_NULL_LITERAL,
    NAMING_CONVENTION_KEY, NULL_KEY,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level run configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Target languages, in document order
    pub languages: IndexMap<String, LanguageSpec>,

    /// Directory containing the per-language template files
    pub template_dir: PathBuf,

    /// Root of the generated output tree
    pub dest_dir: PathBuf,

    /// Token substitutions shared by all languages
    #[serde(default)]
    pub token_subs: IndexMap<String, TokenValue>,

    /// Identifier names subject to casing conversion
    #[serde(default)]
    pub style_adjustments: Vec<String>,
}

/// Per-language section of the configuration.
///
/// Everything is optional: a language without `filename` is skipped by the
/// renderer, one without `run_cmd` is skipped by the verifier, and the
/// attribute overrides fall back to the built-in default tables.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageSpec {
    /// Output file name, also used to derive the template file name
    pub filename: Option<String>,

    /// Verification command template with `<FILE>`, `{dest_dir}` and
    /// `{lang}` placeholders
    pub run_cmd: Option<String>,

    /// Comment character override
    #[serde(rename = "CC")]
    pub comment_char: Option<String>,

    /// Null literal override
    #[serde(rename = "null")]
    pub null_literal: Option<String>,

    /// Naming convention override ("snake" or "camel")
    pub naming_convention: Option<String>,
}

/// A token substitution value: either one spelling shared by every language
/// or a per-language mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Literal(String),
    PerLanguage(IndexMap<String, String>),
}

impl LanguageSpec {
    /// Returns the explicit override for an attribute key, treating an empty
    /// string as absent.
    fn explicit_override(&self, attribute: &str) -> Option<&str> {
        let value = match attribute {
            CC_KEY => self.comment_char.as_deref(),
            NULL_KEY => self.null_literal.as_deref(),
            NAMING_CONVENTION_KEY => self.naming_convention.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Resolves a per-language attribute: an explicit override wins, then the
/// built-in table keyed by lowercased language name.
///
/// # Errors
/// * `Error::MissingAttributeError` if neither source has a value
pub fn resolve_attribute(
    spec: &LanguageSpec,
    lang: &str,
    attribute: &str,
    defaults: &'static [(&'static str, &'static str)],
) -> Result<String> {
    if let Some(value) = spec.explicit_override(attribute) {
        return Ok(value.to_string());
    }
    if let Some(value) = constants::builtin_default(defaults, &lang.to_lowercase()) {
        return Ok(value.to_string());
    }
    Err(Error::MissingAttributeError {
        attribute: attribute.to_string(),
        language: lang.to_string(),
    })
}

/// Resolves the comment character(s) for a language.
pub fn resolve_comment_char(spec: &LanguageSpec, lang: &str) -> Result<String> {
    resolve_attribute(spec, lang, CC_KEY, LANG_TO_COMMENT_CHAR)
}

/// Resolves the null literal for a language.
pub fn resolve_null_literal(spec: &LanguageSpec, lang: &str) -> Result<String> {
    resolve_attribute(spec, lang, NULL_KEY, LANG_TO_NULL_LITERAL)
}

/// Resolves the naming convention for a language.
///
/// # Errors
/// * `Error::MissingAttributeError` if no convention is configured or built in
/// * `Error::UnknownConventionError` if the resolved value is not supported
pub fn resolve_naming_convention(spec: &LanguageSpec, lang: &str) -> Result<NamingConvention> {
    resolve_attribute(spec, lang, NAMING_CONVENTION_KEY, LANG_TO_NAMING_CONVENTION)?.parse()
}

/// Loads and parses the configuration file.
///
/// # Errors
/// * `Error::ConfigError` if the path is not a readable file or the content
///   cannot be parsed
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    if !config_path.exists() || !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid configuration path: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(Error::IoError)?;
    parse_config(&content)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}
