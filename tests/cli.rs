use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Nothing listens here; requests fail fast with connection refused
const DEAD_API: &str = "http://127.0.0.1:59999";

fn bundled_mock_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("mock")
}

fn write_config(temp: &Path, extra: &str) -> PathBuf {
    let path = temp.join("config.yaml");
    let contents = format!(
        "timeout_secs: 5\ncache_dir: {}\nbatch:\n  stagger_ms: 1\n  pause_ms: 1\n{extra}",
        temp.join("cache").display()
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn dexview(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dexview"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("DEXVIEW_CONFIG")
        .env_remove("DEXVIEW_API_BASE")
        .env_remove("DEXVIEW_MOCK_DIR")
        .env_remove("DEXVIEW_CACHE_DIR")
        .env_remove("DEXVIEW_FORMAT");
    cmd
}

fn offline(config: &Path, mock_dir: &Path) -> Command {
    let mut cmd = dexview(config);
    cmd.arg("--no-cache")
        .arg("--api-base")
        .arg(DEAD_API)
        .arg("--mock-dir")
        .arg(mock_dir);
    cmd
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("dexview"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "dexview version {}",
            env!("CARGO_PKG_VERSION")
        )));

    Ok(())
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "api_base_url: https://mirror.example/api/v2\n");

    let assert = dexview(&config_path).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("https://mirror.example/api/v2"));

    Ok(())
}

#[test]
fn missing_config_shows_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let nonexistent_config = temp.path().join("does-not-exist.yaml");

    dexview(&nonexistent_config)
        .arg("types")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    Ok(())
}

#[test]
fn cache_path_honors_env_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    let override_dir = temp.path().join("elsewhere");

    dexview(&config_path)
        .arg("cache")
        .arg("path")
        .env("DEXVIEW_CACHE_DIR", &override_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(override_dir.to_string_lossy().to_string()));

    Ok(())
}

// ============================================================================
// Offline Fallback Tests
// ============================================================================

#[test]
fn list_falls_back_to_bundled_mock_data() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let assert = offline(&config_path, &bundled_mock_dir())
        .arg("list")
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("bulbasaur"));
    assert!(stdout.contains("charmander"));
    assert!(stdout.contains("squirtle"));
    assert!(stdout.contains("\"meta\""));

    Ok(())
}

#[test]
fn list_ids_only_prints_sorted_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    offline(&config_path, &bundled_mock_dir())
        .args(["list", "--sort", "base-exp", "--order", "desc", "--ids-only"])
        .assert()
        .success()
        .stdout("1,7,4\n");

    Ok(())
}

#[test]
fn list_search_matches_name_substring() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    offline(&config_path, &bundled_mock_dir())
        .args(["list", "-q", "SAUR", "--ids-only"])
        .assert()
        .success()
        .stdout("1\n");

    Ok(())
}

#[test]
fn gallery_filters_with_all_selected_types() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let assert = offline(&config_path, &bundled_mock_dir())
        .args(["gallery", "-t", "grass,poison", "--format", "table"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("bulbasaur"));
    assert!(!stdout.contains("charmander"));
    assert!(!stdout.contains("squirtle"));

    Ok(())
}

#[test]
fn show_resolves_neighbors_from_id_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let assert = offline(&config_path, &bundled_mock_dir())
        .args(["show", "charmander", "--ids", "1,4,7", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed["data"]["entry"]["id"], 4);
    assert_eq!(parsed["data"]["prev"], 1);
    assert_eq!(parsed["data"]["next"], 7);

    Ok(())
}

#[test]
fn types_hide_shadow_and_unknown() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let assert = offline(&config_path, &bundled_mock_dir())
        .arg("types")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.lines().any(|l| l == "fire"));
    assert!(!stdout.lines().any(|l| l == "shadow"));
    assert!(!stdout.lines().any(|l| l == "unknown"));

    Ok(())
}

#[test]
fn list_uses_compiled_in_data_outside_repo() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    let workdir = temp.path().join("elsewhere");
    fs::create_dir_all(&workdir)?;

    dexview(&config_path)
        .current_dir(&workdir)
        .args(["--no-cache", "--api-base", DEAD_API, "list", "--ids-only"])
        .assert()
        .success()
        .stdout("1,4,7\n");

    Ok(())
}

#[test]
fn status_reports_bundled_fallback_data() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    dexview(&config_path)
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fallback data: bundled"));

    Ok(())
}

#[test]
fn offline_without_mock_data_shows_load_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");
    let empty_mock = temp.path().join("empty-mock");
    fs::create_dir_all(&empty_mock)?;

    offline(&config_path, &empty_mock)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load the catalog list. Try again or use mock data.",
        ));

    Ok(())
}

#[test]
fn show_missing_entry_shows_load_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    offline(&config_path, &bundled_mock_dir())
        .args(["show", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load entry."));

    Ok(())
}

// ============================================================================
// Live HTTP Tests
// ============================================================================

fn entity_body(id: u32, name: &str, type_name: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "name": "{name}",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [{{"slot": 1, "type": {{"name": "{type_name}", "url": ""}}}}],
            "stats": [{{"base_stat": 45, "effort": 0, "stat": {{"name": "hp", "url": ""}}}}],
            "sprites": {{"other": {{"official-artwork": {{"front_default": null}}}}}}
        }}"#
    )
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn list_loads_from_live_api_and_fills_durable_cache() -> Result<(), Box<dyn std::error::Error>>
{
    let mut server = mockito::Server::new();
    let api_base = server.url();

    let list = server
        .mock("GET", "/pokemon")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "count": 2,
                "results": [
                    {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon/25/"},
                    {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon/133/"}
                ]
            }"#,
        )
        .expect(1)
        .create();
    let _pikachu = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_body(entity_body(25, "pikachu", "electric"))
        .create();
    let _eevee = server
        .mock("GET", "/pokemon/eevee")
        .with_status(200)
        .with_body(entity_body(133, "eevee", "normal"))
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let run = || {
        dexview(&config_path)
            .args(["--api-base", &api_base, "list", "-n", "2", "--sort", "id", "--ids-only"])
            .assert()
            .success()
            .stdout("25,133\n");
    };

    run();
    // Second process is served from the durable cache
    run();
    list.assert();

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn server_error_falls_back_to_mock_data() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_base = server.url();

    let _server_error = server
        .mock("GET", mockito::Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error": "Internal server error"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "");

    let assert = dexview(&config_path)
        .args(["--api-base", &api_base, "--mock-dir"])
        .arg(bundled_mock_dir())
        .args(["show", "7", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("squirtle"));

    // Fallback payloads never reach the durable cache
    dexview(&config_path)
        .args(["cache", "status", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_entries\": 0"));

    Ok(())
}
