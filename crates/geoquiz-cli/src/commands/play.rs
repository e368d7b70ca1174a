//! The `geoquiz play` command.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};

use geoquiz_core::{Coordinates, Country, OrchestratorError, SessionOrchestrator};

use crate::LocationArgs;

pub async fn execute(
    location: LocationArgs,
    answers: Option<String>,
    format: String,
    output: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}', expected text or json"
    );
    // In JSON mode stdout carries only the report.
    let human = format == "text";
    let say = |line: String| {
        if human {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    };

    let config = super::load_config(config_path.as_deref(), &location)?;
    let catalog = super::load_catalog(catalog_path.as_deref(), Some(&config))?;
    let resolver = super::build_resolver(&config)?;
    let mut session = SessionOrchestrator::new(resolver, &catalog, config.orchestrator_config());

    let resolution = match session.start().await {
        Ok(resolution) => resolution,
        Err(OrchestratorError::Resolve(e)) if e.is_user_facing() => return Err(e.into()),
        Err(OrchestratorError::Resolve(e)) => {
            tracing::warn!("could not determine country: {e}");
            say("Country: unresolved".to_string());
            say("No questions available for this location.".to_string());
            if !human {
                print_empty_session(None, &Country::Unresolved)?;
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    say(format!("Latitude: {}", resolution.coordinates.latitude));
    say(format!("Longitude: {}", resolution.coordinates.longitude));
    say(format!("Country: {}", resolution.country));

    if session.questions().is_empty() {
        match resolution.country.name() {
            Some(name) => say(format!("No questions available for {name}.")),
            None => say("No questions available for this location.".to_string()),
        }
        if !human {
            print_empty_session(Some(resolution.coordinates), &resolution.country)?;
        }
        return Ok(());
    }

    let questions = session.questions().to_vec();
    say(format!("\nQuestions for {}:", resolution.country));

    let provided: Option<Vec<String>> =
        answers.map(|list| list.split(';').map(str::to_string).collect());
    if let Some(list) = &provided {
        if list.len() != questions.len() {
            tracing::warn!(
                given = list.len(),
                expected = questions.len(),
                "answer count does not match question count"
            );
        }
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    for (i, question) in questions.iter().enumerate() {
        say(format!("{}. {}", i + 1, question.prompt));
        let answer = match &provided {
            Some(list) => list.get(i).cloned().unwrap_or_default(),
            None => lines
                .next()
                .transpose()
                .context("failed to read answer from stdin")?
                .unwrap_or_default(),
        };
        session.set_answer(i, answer)?;
    }

    session.submit()?;
    let report = session
        .report()
        .context("session finished without a report")?;

    if human {
        println!();
        print!("{}", report.to_text());
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

/// JSON-mode output for a session that never reached the questions.
fn print_empty_session(coordinates: Option<Coordinates>, country: &Country) -> Result<()> {
    let summary = serde_json::json!({
        "country": country,
        "coordinates": coordinates,
        "questions": 0,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
