//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `geoquiz` command isolated from any config on the host.
fn geoquiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("geoquiz").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GEOQUIZ_GEOCODER_URL")
        .env_remove("GEOQUIZ_USER_AGENT");
    cmd
}

async fn nominatim(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

async fn nominatim_country(country: &str) -> MockServer {
    nominatim(serde_json::json!({ "address": { "country": country } })).await
}

const CATALOG: &str = r#"
[[countries]]
name = "Portugal"

[[countries.questions]]
question = "Qual é a capital de Portugal?"
answer = "Lisboa"
"#;

#[test]
fn countries_lists_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    geoquiz(&dir)
        .arg("countries")
        .assert()
        .success()
        .stdout(predicate::str::contains("France"))
        .stdout(predicate::str::contains("Japan"))
        .stdout(predicate::str::contains("India"));
}

#[test]
fn countries_from_catalog_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("custom.toml"), CATALOG).unwrap();

    geoquiz(&dir)
        .args(["countries", "--catalog", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portugal"))
        .stdout(predicate::str::contains("France").not());
}

#[test]
fn validate_valid_catalog() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.toml"), CATALOG).unwrap();

    geoquiz(&dir)
        .args(["validate", "--catalog", "catalog.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 countries, 1 questions"))
        .stdout(predicate::str::contains("Catalog valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("catalog.toml"),
        r#"
[[countries]]
name = "Japan"

[[countries.questions]]
question = "Qual é a moeda do Japão?"
answer = " Iene"
"#,
    )
    .unwrap();

    geoquiz(&dir)
        .args(["validate", "--catalog", "catalog.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Japan] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    geoquiz(&dir)
        .args(["validate", "--catalog", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created geoquiz.toml"))
        .stdout(predicate::str::contains("Created catalog.toml"));

    assert!(dir.path().join("geoquiz.toml").exists());
    assert!(dir.path().join("catalog.toml").exists());

    geoquiz(&dir)
        .args(["validate", "--catalog", "catalog.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    geoquiz(&dir).arg("init").assert().success();

    geoquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn play_with_denied_permission_fails() {
    let dir = TempDir::new().unwrap();
    geoquiz(&dir)
        .args(["play", "--lat", "48.8584", "--lon", "2.2945", "--deny-location"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("location permission denied"));
}

#[test]
fn play_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    geoquiz(&dir)
        .args(["play", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_all_correct() {
    let server = nominatim_country("France").await;
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "48.8584", "--lon", "2.2945"])
        .args(["--answers", "Paris;101;Torre Eiffel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country: France"))
        .stdout(predicate::str::contains("1. Qual é a capital da França?"))
        .stdout(predicate::str::contains("You got 3 of 3 questions right."))
        .stdout(predicate::str::contains("Congratulations"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_reads_answers_from_stdin() {
    let server = nominatim_country("France").await;
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "48.8584", "--lon", "2.2945"])
        .write_stdin(" paris \n100\nTorre Eiffel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You got 2 of 3 questions right."))
        .stdout(predicate::str::contains("Try again!"))
        .stdout(predicate::str::contains("Missed questions:"))
        .stdout(predicate::str::contains(
            "1. Quantos departamentos a França tem?",
        ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_json_output_and_report_file() {
    let server = nominatim_country("France").await;
    let dir = TempDir::new().unwrap();

    let output = geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "48.8584", "--lon", "2.2945"])
        .args(["--answers", "paris;100;Torre Eiffel"])
        .args(["--format", "json", "--output", "out/report.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["country"], "France");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["score"]["correct_count"], 2);
    assert_eq!(report["score"]["total_count"], 3);
    assert_eq!(
        report["score"]["missed"][0]["question"],
        "Quantos departamentos a França tem?"
    );
    assert_eq!(report["score"]["missed"][0]["answer"], "101");

    assert!(dir.path().join("out/report.json").exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_country_without_questions() {
    let server = nominatim_country("Brazil").await;
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "-15.7939", "--lon", "-47.8828"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country: Brazil"))
        .stdout(predicate::str::contains("No questions available for Brazil."))
        .stdout(predicate::str::contains("You got").not());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_without_address_degrades() {
    let server = nominatim(serde_json::json!({ "error": "Unable to geocode" })).await;
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "0", "--lon", "-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country: unresolved"))
        .stdout(predicate::str::contains("No questions available"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_empty_country_name_is_unresolved() {
    let server = nominatim_country("").await;
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "1", "--lon", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country: unresolved"))
        .stdout(predicate::str::contains("No questions available for this location."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_json_without_questions_still_prints_json() {
    let server = nominatim_country("Brazil").await;
    let dir = TempDir::new().unwrap();

    let output = geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "-15.7939", "--lon", "-47.8828", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["country"], "Brazil");
    assert_eq!(summary["questions"], 0);
    assert_eq!(summary["coordinates"]["latitude"], -15.7939);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_json_unresolved_prints_null_country() {
    let server = nominatim(serde_json::json!({ "error": "Unable to geocode" })).await;
    let dir = TempDir::new().unwrap();

    let output = geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["play", "--lat", "0", "--lon", "-30", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(summary["country"].is_null());
    assert!(summary["coordinates"].is_null());
    assert_eq!(summary["questions"], 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn play_with_custom_catalog_from_config() {
    let server = nominatim_country("Portugal").await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.toml"), CATALOG).unwrap();
    std::fs::write(
        dir.path().join("geoquiz.toml"),
        format!(
            "catalog = \"catalog.toml\"\n\n[geocoder]\nbase_url = \"{}\"\n\n[location]\nlatitude = 38.7223\nlongitude = -9.1393\n",
            server.uri()
        ),
    )
    .unwrap();

    geoquiz(&dir)
        .args(["play", "--answers", "lisboa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country: Portugal"))
        .stdout(predicate::str::contains("You got 1 of 1 questions right."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn resolve_prints_country() {
    let server = nominatim_country("Japan").await;
    let dir = TempDir::new().unwrap();

    geoquiz(&dir)
        .env("GEOQUIZ_GEOCODER_URL", server.uri())
        .args(["resolve", "--lat", "35.6812", "--lon", "139.7671"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Latitude: 35.6812"))
        .stdout(predicate::str::contains("Country: Japan"))
        .stdout(predicate::str::contains("Questions available: 3"));
}

#[test]
fn resolve_without_coordinates_fails() {
    let dir = TempDir::new().unwrap();
    geoquiz(&dir)
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("location unavailable"));
}
