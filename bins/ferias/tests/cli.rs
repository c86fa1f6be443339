//! Command-line behavior of the `ferias` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

/// Runs from an empty directory so no stray ferias.toml is picked up
fn ferias(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ferias").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_days_lists_every_weekday() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .arg("days")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunes"))
        .stdout(predicate::str::contains("Domingo"));
}

#[test]
fn test_list_monday_json() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ferias(&dir).args(["list", "--day", "monday", "--format", "json"]));

    assert_eq!(value["day"], "monday");
    assert_eq!(value["barrio"], "all");
    assert_eq!(value["count"], 3);
    assert!(value.get("origin").is_none());
    assert!(value["markets"][0].get("distance_km").is_none());
}

#[test]
fn test_list_sorted_from_coordinates() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ferias(&dir).args([
        "list", "--day", "saturday", "--lat", "-34.9011", "--lng", "-56.1881", "--format", "json",
    ]));

    let markets = value["markets"].as_array().unwrap();
    assert!(!markets.is_empty());
    let distances: Vec<f64> = markets.iter().map(|m| m["distance_km"].as_f64().unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(value["origin"]["display_address"], "Mi ubicación actual");
}

#[test]
fn test_list_accepts_spanish_day_names() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ferias(&dir).args(["list", "--day", "Lunes", "--format", "json"]));
    assert_eq!(value["day"], "monday");
    assert_eq!(value["count"], 3);
}

#[test]
fn test_list_unknown_day_is_empty() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ferias(&dir).args(["list", "--day", "funday", "--format", "json"]));
    assert_eq!(value["count"], 0);
}

#[test]
fn test_lat_requires_lng() {
    let dir = TempDir::new().unwrap();
    ferias(&dir).args(["list", "--lat", "-34.9"]).assert().failure();
}

#[test]
fn test_distance_one_degree_of_longitude_at_equator() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .args(["distance", "0", "0", "0", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("111.19"))
        .stdout(predicate::str::contains("Lejos"));
}

#[test]
fn test_distance_text_uses_display_format() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .args(["distance", "0", "0", "0", "0.0045"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500 m"))
        .stdout(predicate::str::contains("km").not());
}

#[test]
fn test_distance_rejects_out_of_range() {
    let dir = TempDir::new().unwrap();
    ferias(&dir).args(["distance", "91", "0", "0", "0"]).assert().code(2);
}

#[test]
fn test_validate_builtin_dataset() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset OK"));
}

#[test]
fn test_show_market() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .args(["show", "mercado-del-puerto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mercado del Puerto"));
}

#[test]
fn test_show_unknown_market_is_not_found() {
    let dir = TempDir::new().unwrap();
    ferias(&dir).args(["show", "nope"]).assert().code(4);
}

#[test]
fn test_sitemap_uses_given_date() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .args(["sitemap", "--date", "2024-03-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<lastmod>2024-03-09</lastmod>"))
        .stdout(predicate::str::contains("/feria/mercado-del-puerto"));
}

#[test]
fn test_sitemap_to_file() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .args(["sitemap", "--date", "2024-03-09", "--output", "sitemap.xml"])
        .assert()
        .success();

    let xml = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<urlset"));
}

#[test]
fn test_jsonld_local_business() {
    let dir = TempDir::new().unwrap();
    let value = json_stdout(ferias(&dir).args(["jsonld", "feria-cordon"]));

    assert_eq!(value[0]["@type"], "LocalBusiness");
    assert_eq!(value[1]["@type"], "BreadcrumbList");
}

#[test]
fn test_barrios() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .arg("barrios")
        .assert()
        .success()
        .stdout(predicate::str::contains("ciudad vieja").or(predicate::str::contains("ciudad-vieja")));
}

#[test]
fn test_geocode_blank_address() {
    let dir = TempDir::new().unwrap();
    ferias(&dir)
        .args(["geocode", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Por favor ingresa una dirección"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    ferias(&dir).args(["--config", "missing.toml", "days"]).assert().code(3);
}

#[test]
fn test_custom_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("markets.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"friday": [{{"id": "feria-prado", "name": "Feria del Prado", "location": "Av. Agraciada",
            "neighborhood": "prado", "lat": -34.86, "lng": -56.20, "beginningTime": "08:00", "endTime": "13:00"}}]}}"#
    )
    .unwrap();

    let value = json_stdout(ferias(&dir).args(["list", "--dataset", "markets.json", "--format", "json"]));
    assert_eq!(value["count"], 1);
    assert_eq!(value["markets"][0]["id"], "feria-prado");
    assert_eq!(value["markets"][0]["day"], "friday");
}

#[test]
fn test_missing_dataset_is_not_found() {
    let dir = TempDir::new().unwrap();
    ferias(&dir).args(["--dataset", "nope.json", "days"]).assert().code(4);
}

#[test]
fn test_json_error_report() {
    let dir = TempDir::new().unwrap();
    let output = ferias(&dir)
        .args(["show", "nope", "--format", "json"])
        .assert()
        .code(4)
        .get_output()
        .stderr
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["code_str"], "E9002");
    assert_eq!(report["category"], "Dataset");
}

#[test]
fn test_geocode_blank_address_json_report() {
    let dir = TempDir::new().unwrap();
    let output = ferias(&dir)
        .args(["geocode", "", "--format", "json"])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["code_str"], "E6001");
    assert_eq!(report["message"], "Por favor ingresa una dirección");
}
