//! The `geoquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = geoquiz_core::parser::parse_catalog(&catalog_path)?;

    let total_questions: usize = catalog.iter().map(|(_, q)| q.len()).sum();
    println!(
        "Catalog: {} ({} countries, {} questions)",
        catalog_path.display(),
        catalog.len(),
        total_questions
    );

    let warnings = geoquiz_core::parser::validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .country
            .as_ref()
            .map(|c| format!("  [{c}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
