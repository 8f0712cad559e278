//! Common constants used throughout the skelgen application.

/// Naming convention spelling for snake_case languages
pub const SNAKE_CONVENTION: &str = "snake";

/// Naming convention spelling for camelCase languages
pub const CAMEL_CONVENTION: &str = "camel";

/// Attribute key for a language's comment character(s)
pub const CC_KEY: &str = "CC";

/// Attribute key for a language's null literal
pub const NULL_KEY: &str = "null";

/// Attribute key for a language's naming convention
pub const NAMING_CONVENTION_KEY: &str = "naming_convention";

/// Suffix inserted before the extension to derive a template file name
pub const TEMPLATE_SUFFIX: &str = "_template";

/// Built-in comment characters, keyed by lowercased language name
pub const LANG_TO_COMMENT_CHAR: &[(&str, &str)] = &[
    ("csharp", "//"),
    ("javascript", "//"),
    ("python", "#"),
    ("ruby", "#"),
];

/// Built-in null literals, keyed by lowercased language name
pub const LANG_TO_NULL_LITERAL: &[(&str, &str)] = &[
    ("csharp", "null"),
    ("javascript", "null"),
    ("python", "None"),
    ("ruby", "nil"),
];

/// Built-in naming conventions, keyed by lowercased language name
pub const LANG_TO_NAMING_CONVENTION: &[(&str, &str)] = &[
    ("csharp", CAMEL_CONVENTION),
    ("javascript", CAMEL_CONVENTION),
    ("python", SNAKE_CONVENTION),
    ("ruby", SNAKE_CONVENTION),
];

/// Looks up a built-in default in one of the per-language tables.
pub fn builtin_default(
    table: &'static [(&'static str, &'static str)],
    lang: &str,
) -> Option<&'static str> {
    table.iter().find(|(name, _)| *name == lang).map(|(_, value)| *value)
}
