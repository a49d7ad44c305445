//! End-to-end tests for the `envconf` binary.
//!
//! Responsibilities:
//! - Prove each lookup subcommand honors its precedence order.
//! - Prove `set` saves with a backup and exit codes are structured.

mod common;

use common::envconf_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn config_dir(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.conf"), contents).unwrap();
    temp_dir
}

#[test]
fn test_conf_reads_section_value() {
    let dir = config_dir("[server]\naddress = localhost # comment\n");
    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "--section", "server", "conf", "address"])
        .assert()
        .success()
        .stdout("localhost\n");
}

#[test]
fn test_conf_missing_without_default_exits_not_found() {
    let dir = config_dir("[main]\n");
    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "conf", "absent"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No value found for 'absent'"));
}

#[test]
fn test_conf_missing_with_default() {
    let dir = config_dir("[main]\n");
    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "conf", "absent", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");
}

#[test]
fn test_fetch_prefers_file_and_get_prefers_env() {
    let dir = config_dir("port = 8080\n");

    envconf_cmd()
        .current_dir(dir.path())
        .env("APP_PORT", "9090")
        .args(["--file", "app.conf", "fetch", "port", "--env-key", "APP_PORT"])
        .assert()
        .success()
        .stdout("8080\n");

    envconf_cmd()
        .current_dir(dir.path())
        .env("APP_PORT", "9090")
        .args(["--file", "app.conf", "get", "APP_PORT", "port"])
        .assert()
        .success()
        .stdout("9090\n");

    envconf_cmd()
        .current_dir(dir.path())
        .env_remove("APP_PORT")
        .args(["--file", "app.conf", "get", "APP_PORT", "port"])
        .assert()
        .success()
        .stdout("8080\n");
}

#[test]
fn test_env_reads_environment_only() {
    let dir = config_dir("APP_MODE = file\n");
    envconf_cmd()
        .current_dir(dir.path())
        .env("APP_MODE", "env")
        .args(["--file", "app.conf", "env", "APP_MODE"])
        .assert()
        .success()
        .stdout("env\n");
}

#[test]
fn test_env_file_variable_selects_file() {
    let dir = config_dir("name = from-env-var\n");
    envconf_cmd()
        .current_dir(dir.path())
        .env("ENVCONF_FILE", "app.conf")
        .args(["conf", "name"])
        .assert()
        .success()
        .stdout("from-env-var\n");
}

#[test]
fn test_defaults_to_dot_env_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "name = dotenv\n").unwrap();
    envconf_cmd()
        .current_dir(temp_dir.path())
        .args(["conf", "name"])
        .assert()
        .success()
        .stdout("dotenv\n");
}

#[test]
fn test_double_slash_comments() {
    let dir = config_dir("url = \"https://example\"//trailer\n");
    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "--comment", "slashes", "conf", "url"])
        .assert()
        .success()
        .stdout("https://example\n");
}

#[test]
fn test_set_saves_and_backs_up() {
    let dir = config_dir("[main]\nold = 1\n");
    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "--section", "db", "set", "host", "localhost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("previous file backed up to"));

    let saved = fs::read_to_string(dir.path().join("app.conf")).unwrap();
    assert_eq!(saved, "[db]\nhost = localhost\n\n[main]\nold = 1\n");

    let backups = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("app.conf2"))
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn test_set_rejects_multiline_value_and_leaves_file_alone() {
    let dir = config_dir("[main]\nold = 1\n");
    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "set", "motd", "hi\n[admin]\nrole = root"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line break"));

    let names: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(names.len(), 1, "no backup is made for a rejected edit");
    assert_eq!(
        fs::read_to_string(dir.path().join("app.conf")).unwrap(),
        "[main]\nold = 1\n"
    );
}

#[test]
fn test_set_keeps_settings_of_non_utf8_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("app.conf"),
        b"[server]\naddress = localhost\n# caf\xe9 note\nport = 80\n",
    )
    .unwrap();

    envconf_cmd()
        .current_dir(temp_dir.path())
        .args(["--file", "app.conf", "--section", "server", "set", "tls", "true"])
        .assert()
        .success();

    let saved = fs::read_to_string(temp_dir.path().join("app.conf")).unwrap();
    assert_eq!(
        saved,
        "[main]\n\n[server]\naddress = localhost\nport = 80\ntls = true\n"
    );
}

#[test]
fn test_list_sections_and_dump_json() {
    let dir = config_dir("a = 1\nb = 2\n[server]\nport = 80\n");

    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "list"])
        .assert()
        .success()
        .stdout("a\nb\n");

    envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "sections"])
        .assert()
        .success()
        .stdout("main\nserver\n");

    let output = envconf_cmd()
        .current_dir(dir.path())
        .args(["--file", "app.conf", "--output", "json", "dump"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["server"]["port"], "80");
    assert_eq!(parsed["main"]["b"], "2");
}

#[test]
fn test_missing_file_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    envconf_cmd()
        .current_dir(temp_dir.path())
        .args(["--file", "nowhere.conf", "sections"])
        .assert()
        .success()
        .stdout("main\n");
}
