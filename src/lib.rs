//! Skelgen generates per-language "skeleton" source files by substituting
//! configured tokens into shared template files, then optionally runs a
//! per-language command to sanity-check each generated file.

/// Identifier casing conversion for language naming conventions
pub mod casing;

/// Command-line interface module for the skelgen application
pub mod cli;

/// Configuration handling and per-language attribute resolution
/// Supports JSON and YAML configuration files
pub mod config;

/// Common constants and built-in per-language default tables
pub mod constants;

/// Error types and handling for the skelgen application
pub mod error;

/// Logger initialization
pub mod logger;

/// Skeleton generation orchestration
/// Combines template loading, rendering, and file output per language
pub mod processor;

/// Token substitution over template text
/// Handles the actual rendering logic
pub mod renderer;

/// Verification command execution for generated skeletons
pub mod verifier;
