//! Skeleton generation orchestration.
//! Derives template paths, renders each configured language, and writes the
//! output tree.

use crate::config::{Config, LanguageSpec};
use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::renderer::{apply_substitutions, build_substitutions};
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Splits a file name into stem and extension at the last dot.
/// A dot that leads the name does not start an extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename.split_at(idx),
        _ => (filename, ""),
    }
}

/// Derives the template file path for an output file name by inserting the
/// template suffix between stem and extension.
pub fn template_path(template_dir: &Path, filename: &str) -> PathBuf {
    let (stem, ext) = split_extension(filename);
    template_dir.join(format!("{}{}{}", stem, TEMPLATE_SUFFIX, ext))
}

/// Renders one language's skeleton and writes it under the destination tree,
/// overwriting any previous output.
///
/// # Returns
/// * `Ok(Some(path))` - Path of the written skeleton
/// * `Ok(None)` - The language has no configured output file name
///
/// # Errors
/// * `Error::TemplateError` if the template file cannot be read
/// * Fatal configuration errors from substitution-map building
pub fn render_language(
    config: &Config,
    lang: &str,
    spec: &LanguageSpec,
) -> Result<Option<PathBuf>> {
    let Some(filename) = spec.filename.as_deref() else {
        debug!("Language '{}' has no filename, nothing to render", lang);
        return Ok(None);
    };

    let template_file = template_path(&config.template_dir, filename);
    debug!("Reading template {}", template_file.display());
    let template = fs::read_to_string(&template_file).map_err(|e| {
        Error::TemplateError(format!("Cannot read '{}': {}", template_file.display(), e))
    })?;

    let subs = build_substitutions(config, lang, spec)?;
    let rendered = apply_substitutions(&template, &subs);

    let lang_dir = config.dest_dir.join(lang);
    fs::create_dir_all(&lang_dir).map_err(Error::IoError)?;
    let dest_path = lang_dir.join(filename);
    fs::write(&dest_path, rendered).map_err(Error::IoError)?;

    Ok(Some(dest_path))
}

/// Renders every configured language in document order.
///
/// A language whose template cannot be read is logged and skipped; fatal
/// configuration errors abort the run.
pub fn render_all(config: &Config) -> Result<()> {
    for (lang, spec) in &config.languages {
        match render_language(config, lang, spec) {
            Ok(Some(path)) => info!("Generated skeleton '{}'", path.display()),
            Ok(None) => {}
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => error!("Skipping language '{}': {}", lang, err),
        }
    }
    Ok(())
}
