use assert_cmd::Command;
use predicates::prelude::*;

fn bolero(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bolero").unwrap();
    cmd.env("BOLERO_HOME", home).env_remove("BOLERO_API_URL");
    cmd
}

#[test]
fn fields_lists_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .args(["fields", "ouvrage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("anneeParution"))
        .stdout(predicate::str::contains("traducteur"))
        .stdout(predicate::str::contains("Prénom de l'auteur"));
}

#[test]
fn list_prints_url_with_renamed_year() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .args([
            "list",
            "ouvrage",
            "-F",
            "anneeParution=1999",
            "-F",
            "titre=   ",
            "-f",
            "langue=fr",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/bolero/ouvrages?"))
        .stdout(predicate::str::contains("annee_parution=1999"))
        .stdout(predicate::str::contains("langue=fr"))
        .stdout(predicate::str::contains("titre").not());
}

#[test]
fn list_json_output_has_default_pagination() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = bolero(temp_dir.path())
        .args(["list", "recension", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["params"]["page"], "1");
    assert_eq!(json["params"]["limit"], "100");
    assert_eq!(json["params"]["sort"], "id");
    assert_eq!(json["params"]["order"], "asc");
    assert_eq!(json["response"], "json");
}

#[test]
fn export_has_no_pagination() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = bolero(temp_dir.path())
        .args(["export", "ouvrage", "-F", "titre=Paris", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let params = json["params"].as_object().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params["titre"], "Paris");
    assert_eq!(json["response"], "binary");
}

#[test]
fn duplicate_rows_fail() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .args(["list", "ouvrage", "-f", "ean=1", "-f", "ean=2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not selectable"));
}

#[test]
fn choices_hide_taken_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .args(["choices", "auteur", "-f", "id_ref=42", "--blank"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id_proprio"))
        .stdout(predicate::str::contains("id_ref").not());
}

#[test]
fn config_set_changes_list_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .args(["config", "page-size", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 25"));

    bolero(temp_dir.path())
        .args(["list", "auteur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit=25"));
}

#[test]
fn api_url_env_overrides_config() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .env("BOLERO_API_URL", "https://catalog.example.org/api")
        .args(["export", "recension"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://catalog.example.org/api/bolero/recensions/export",
        ));
}

#[test]
fn unknown_entity_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    bolero(temp_dir.path())
        .args(["fields", "magazine"])
        .assert()
        .failure();
}
