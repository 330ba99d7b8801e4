//! # Renderer
//!
//! Substitutes `{{ KEY }}` tokens in the template with the collected values.
//! Unknown tokens stay verbatim; keys without a token are ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::types::ProfileData;

/// The exact token for `key`, including its single-space padding
pub fn placeholder(key: &str) -> String {
    format!("{{{{ {} }}}}", key)
}

pub fn render(template: &str, data: &ProfileData) -> String {
    data.iter()
        .fold(template.to_string(), |doc, (key, value)| {
            doc.replace(&placeholder(key), value)
        })
}

/// Read the template, substitute every placeholder and return the document.
pub fn render_file(template_path: &Path, data: &ProfileData) -> Result<String> {
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;
    Ok(render(&template, data))
}

/// Render the template and write the result to `output_path` (may be the template itself).
pub fn render_to(template_path: &Path, output_path: &Path, data: &ProfileData) -> Result<()> {
    let document = render_file(template_path, data)?;
    fs::write(output_path, document)
        .with_context(|| format!("Failed to write {}", output_path.display()))
}
