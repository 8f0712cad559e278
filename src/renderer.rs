//! Token substitution for skeleton templates.
//! Builds the per-language substitution map and applies it to template text.

use crate::casing;
use crate::config::{
    resolve_comment_char, resolve_naming_convention, resolve_null_literal, Config, LanguageSpec,
    TokenValue,
};
use crate::constants::{CC_KEY, NULL_KEY};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Wraps a token name in the angle-bracket delimiters templates use.
fn delimited(token: &str) -> String {
    format!("<{}>", token)
}

/// Builds the substitution map for one language.
///
/// Starts from the shared `token_subs` (per-language values resolved to this
/// language's entry), overwrites the comment-character and null-literal
/// tokens with the language's resolved attributes, wraps every key in angle
/// brackets while trimming trailing newlines from literal values, and merges
/// in the casing aliases for the language's naming convention.
///
/// The map is built fresh on every call; nothing leaks between languages.
///
/// # Errors
/// * `Error::ConfigError` if a per-language token value has no entry for
///   this language
/// * `Error::MissingAttributeError` / `Error::UnknownConventionError` from
///   attribute resolution
pub fn build_substitutions(
    config: &Config,
    lang: &str,
    spec: &LanguageSpec,
) -> Result<IndexMap<String, String>> {
    let mut resolved: IndexMap<String, String> = IndexMap::new();

    for (token, value) in &config.token_subs {
        let value = match value {
            TokenValue::Literal(text) => text.trim_end_matches('\n').to_string(),
            TokenValue::PerLanguage(by_lang) => by_lang.get(lang).cloned().ok_or_else(|| {
                Error::ConfigError(format!(
                    "Token \"{}\" has no entry for language \"{}\"",
                    token, lang
                ))
            })?,
        };
        resolved.insert(token.clone(), value);
    }

    // Language attributes overwrite same-named shared tokens.
    let comment_char = resolve_comment_char(spec, lang)?;
    let null_literal = resolve_null_literal(spec, lang)?;
    resolved.insert(CC_KEY.to_string(), comment_char.trim_end_matches('\n').to_string());
    resolved.insert(NULL_KEY.to_string(), null_literal.trim_end_matches('\n').to_string());

    let mut subs: IndexMap<String, String> =
        resolved.into_iter().map(|(token, value)| (delimited(&token), value)).collect();

    let convention = resolve_naming_convention(spec, lang)?;
    for (name, adjusted) in casing::convention_name_map(&config.style_adjustments, convention) {
        subs.insert(delimited(&name), adjusted);
    }

    Ok(subs)
}

/// Applies the substitution map to the template text.
///
/// The whole map is applied twice in sequence so a value that itself
/// contains another token is resolved on the second pass. Nesting stops
/// there: tokens introduced by the second pass stay as-is. Replacement is
/// plain substring replacement in map order, not token-boundary aware;
/// templates may rely on that.
pub fn apply_substitutions(template: &str, subs: &IndexMap<String, String>) -> String {
    let mut contents = template.to_string();
    for _ in 0..2 {
        for (token, value) in subs {
            contents = contents.replace(token.as_str(), value);
        }
    }
    contents
}
