//! The `geoquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("geoquiz.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("catalog.toml"), EXAMPLE_CATALOG)?;

    println!("\nNext steps:");
    println!("  1. Edit geoquiz.toml with your coordinates and a User-Agent for the geocoder");
    println!("  2. Run: geoquiz validate --catalog catalog.toml");
    println!("  3. Run: geoquiz play");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# geoquiz configuration

catalog = "catalog.toml"
resolve_timeout_secs = 30

[geocoder]
base_url = "https://nominatim.openstreetmap.org"
# Nominatim requires an identifying User-Agent.
user_agent = "geoquiz/0.1 (${USER})"
timeout_secs = 10

[location]
permission = "granted"
latitude = 48.8584
longitude = 2.2945
"#;

const EXAMPLE_CATALOG: &str = r#"# Country names must match the geocoder's spelling exactly.

[[countries]]
name = "France"

[[countries.questions]]
question = "Qual é a capital da França?"
answer = "Paris"

[[countries.questions]]
question = "Quantos departamentos a França tem?"
answer = "101"

[[countries.questions]]
question = "Qual é o famoso monumento em Paris?"
answer = "Torre Eiffel"

[[countries]]
name = "Japan"

[[countries.questions]]
question = "Qual é a capital do Japão?"
answer = "Tóquio"

[[countries.questions]]
question = "Qual é a moeda do Japão?"
answer = "Iene"

[[countries.questions]]
question = "Qual é o símbolo nacional do Japão?"
answer = "Crisântemo"
"#;
