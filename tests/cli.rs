use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

/// The kitchen and cellar clues are enough to convict Mustard.
#[test]
fn console_trial_confirms_accusation() {
    assert_cmd::cargo::cargo_bin_cmd!("detective")
        .write_stdin("d\ne\ns\nCoronel Mustard\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Você está em: Adega"))
        .stdout(predicate::str::contains("===== PISTAS COLETADAS ====="))
        .stdout(predicate::str::contains(
            "✅ Acusação consistente! Coronel Mustard foi considerado CULPADO com 2 pistas.",
        ));
}

#[test]
fn console_reports_unavailable_paths() {
    assert_cmd::cargo::cargo_bin_cmd!("detective")
        .write_stdin("d\nd\nd\nz\ns\nSra. White\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Não há caminho à direita!"))
        .stdout(predicate::str::contains("Opção inválida! Escolha novamente."))
        .stdout(predicate::str::contains("Acusação inconsistente"));
}

#[test]
fn tour_variant_needs_no_accusation() {
    assert_cmd::cargo::cargo_bin_cmd!("detective")
        .arg("--variant")
        .arg("tour")
        .write_stdin("e\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Biblioteca não tem outras saídas."))
        .stdout(predicate::str::contains("JULGAMENTO FINAL").not());
}

#[test]
fn plays_a_world_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sala.json");
    fs::write(
        &path,
        r#"{ "title": "Sala Única", "entry": "Sala",
             "locations": [ { "name": "Sala", "clue": "Um fio de cabelo." } ],
             "suspects": [ { "clue": "Um fio de cabelo.", "suspect": "Mordomo" } ] }"#,
    )
    .expect("write world");

    assert_cmd::cargo::cargo_bin_cmd!("detective")
        .arg("--world")
        .arg(&path)
        .write_stdin("s\nMordomo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sala Única ==="))
        .stdout(predicate::str::contains("Apenas 1 pista(s) apontam para Mordomo."));
}

#[test]
fn invalid_world_file_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ruim.json");
    fs::write(&path, r#"{ "title": "x", "entry": "Nada", "locations": [] }"#).expect("write world");

    assert_cmd::cargo::cargo_bin_cmd!("detective")
        .arg("--world")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry location not found: Nada"));
}
