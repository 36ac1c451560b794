use assert_cmd::Command;

#[test]
fn version_flag_works_without_tty() {
    Command::cargo_bin("receta")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("receta"));
}

#[test]
fn refuses_to_run_without_tty() {
    Command::cargo_bin("receta")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicates::str::contains("stdin must be a tty"));
}

#[test]
fn rejects_unknown_tab() {
    Command::cargo_bin("receta")
        .unwrap()
        .args(["--tab", "settings"])
        .assert()
        .failure();
}
