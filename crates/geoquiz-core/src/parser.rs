//! TOML catalog parser.
//!
//! Loads question catalogs from TOML files and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::QuizCatalog;
use crate::model::Question;

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    countries: Vec<TomlCountry>,
}

#[derive(Debug, Deserialize)]
struct TomlCountry {
    name: String,
    #[serde(default)]
    questions: Vec<Question>,
}

/// Parse a single TOML file into a `QuizCatalog`.
pub fn parse_catalog(path: &Path) -> Result<QuizCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `QuizCatalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<QuizCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut entries = BTreeMap::new();
    for country in parsed.countries {
        if entries.contains_key(&country.name) {
            anyhow::bail!(
                "country '{}' is listed more than once in {}",
                country.name,
                source_path.display()
            );
        }
        entries.insert(country.name, country.questions);
    }

    tracing::debug!(
        countries = entries.len(),
        "loaded catalog from {}",
        source_path.display()
    );
    Ok(QuizCatalog::new(entries))
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The country (if applicable).
    pub country: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common authoring mistakes.
pub fn validate_catalog(catalog: &QuizCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.is_empty() {
        warnings.push(ValidationWarning {
            country: None,
            message: "catalog has no countries".into(),
        });
    }

    for (country, questions) in catalog.iter() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                country: Some(country.to_string()),
                message,
            })
        };

        if country.trim() != country {
            warn("country name has surrounding whitespace and will never match".into());
        }

        if questions.is_empty() {
            warn("no questions".into());
        }

        let mut seen_prompts = HashSet::new();
        for (i, q) in questions.iter().enumerate() {
            let n = i + 1;
            if q.prompt.trim().is_empty() {
                warn(format!("question {n}: prompt is empty"));
            } else if !seen_prompts.insert(q.prompt.trim()) {
                warn(format!("question {n}: duplicate prompt: {}", q.prompt));
            }

            if q.expected_answer.trim().is_empty() {
                warn(format!("question {n}: expected answer is empty"));
            } else if q.expected_answer.trim() != q.expected_answer {
                // Only the user's answer is trimmed before comparison.
                warn(format!(
                    "question {n}: expected answer {:?} has surrounding whitespace and can never be matched",
                    q.expected_answer
                ));
            }
        }
    }

    warnings
}
