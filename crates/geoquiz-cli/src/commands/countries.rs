//! The `geoquiz countries` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = super::load_catalog(catalog_path.as_deref(), None)?;

    if catalog.is_empty() {
        println!("Catalog has no countries.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Country", "Questions"]);
    for (country, questions) in catalog.iter() {
        table.add_row(vec![Cell::new(country), Cell::new(questions.len())]);
    }

    println!("{table}");
    Ok(())
}
