use assert_cmd::Command;
use bindscope_test_data::TestResults;
use std::path::Path;

fn bindscope(results: &Path, out_dir: &Path, subcommand: &str) -> Command {
    let mut cmd = Command::cargo_bin("bindscope").unwrap();
    cmd.arg(subcommand)
        .arg("--results-dir")
        .arg(results)
        .arg("--out-dir")
        .arg(out_dir);
    cmd
}

#[test]
fn test_correlate() {
    let results = TestResults::create_temp().unwrap();
    let out = tempfile::tempdir().unwrap();
    let table = out.path().join("designs.csv");

    bindscope(results.path(), out.path(), "correlate")
        .arg("--table-out")
        .arg(&table)
        .assert()
        .success();

    let heatmap = std::fs::read_to_string(out.path().join("correlation_heatmap.svg")).unwrap();
    assert!(heatmap.contains("Correlation Matrix Heatmap"));
    let bars = std::fs::read_to_string(out.path().join("correlation_with_kd.svg")).unwrap();
    assert!(bars.contains("Correlation With KD"));

    let csv = std::fs::read_to_string(&table).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.contains("expression_numeric"));
    assert!(header.contains("contacts"));
    assert!(header.contains("packing_density"));
    assert!(!header.contains("design_name"));
    assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_correlate_pearson_with_options() {
    let results = TestResults::create_temp().unwrap();
    let out = tempfile::tempdir().unwrap();

    bindscope(results.path(), out.path(), "correlate")
        .args(["--method", "pearson", "--cutoff", "3.5", "--target", "contacts", "-vv"])
        .assert()
        .success();

    assert!(out.path().join("correlation_with_contacts.svg").exists());
}

#[test]
fn test_correlate_unknown_target() {
    let results = TestResults::create_temp().unwrap();
    let out = tempfile::tempdir().unwrap();

    let assert = bindscope(results.path(), out.path(), "correlate")
        .args(["--target", "affinity"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("affinity"));
}

#[test]
fn test_correlate_missing_chain() {
    let results = TestResults::create_temp().unwrap();
    let out = tempfile::tempdir().unwrap();

    bindscope(results.path(), out.path(), "correlate")
        .args(["--chain-b", "Z"])
        .assert()
        .failure();
}

#[test]
fn test_missing_results_dir() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("no_such_results");

    let assert = bindscope(&missing, out.path(), "correlate")
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("result_summary.csv"));
}

#[test]
fn test_models() {
    let results = TestResults::create_temp().unwrap();
    let out = tempfile::tempdir().unwrap();

    bindscope(results.path(), out.path(), "models")
        .assert()
        .success();

    assert!(out.path().join("correlation_rfdiffusion.svg").exists());
    assert!(out.path().join("correlation_bindcraft.svg").exists());
    // a single design is not enough to correlate
    assert!(!out.path().join("correlation_proteinmpnn.svg").exists());
}

#[test]
fn test_outcomes() {
    let results = TestResults::create_temp().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested");

    bindscope(results.path(), &out, "outcomes")
        .arg("--quiet")
        .assert()
        .success();

    for name in [
        "binding_strength_per_model.svg",
        "binding_strength_per_model_normalized.svg",
        "expression_per_model.svg",
        "expression_per_model_normalized.svg",
    ] {
        assert!(out.join(name).exists(), "{name} was not written");
    }
    let normalized =
        std::fs::read_to_string(out.join("binding_strength_per_model_normalized.svg")).unwrap();
    assert!(normalized.contains("(Normalized)"));
}
