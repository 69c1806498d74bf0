//! End-to-end checks of the `syncsim` binary: stdout documents, artifacts,
//! and the exit-code table (0 ok, 2 validation, 4 io).

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const FULL_REQUEST: &str = r#"{
  "electionModel": "full",
  "statesCount": 15,
  "cycleLength": 5,
  "costAssumption": "medium",
  "manpowerLevel": "standard",
  "budgetLevel": "normal"
}"#;

fn syncsim() -> Command {
    let mut cmd = Command::cargo_bin("syncsim").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_request(dir: &Path, name: &str, body: &str) -> String {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p.to_string_lossy().into_owned()
}

fn stdout_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn worked_example_prints_result_document() {
    let tmp = TempDir::new().unwrap();
    let req = write_request(tmp.path(), "req.json", FULL_REQUEST);

    let doc = stdout_json(syncsim().args(["--params", req.as_str(), "--strict"]));
    assert!(doc["id"].as_str().unwrap().starts_with("RES:"));
    assert_eq!(doc["outcome"], "computed");
    assert_eq!(doc["coercions"].as_array().unwrap().len(), 0);
    assert_eq!(doc["results"]["costSavings"], "₹2,772 Cr");
    assert_eq!(doc["results"]["efficiency"], "+45%");
    assert_eq!(doc["results"]["governanceData"].as_array().unwrap().len(), 5);
}

#[test]
fn request_from_stdin() {
    let doc = stdout_json(syncsim().args(["--params", "-"]).write_stdin(FULL_REQUEST));
    assert_eq!(doc["results"]["costSavingsValue"], 2772);
}

#[test]
fn flag_overrides_fill_a_request() {
    let doc = stdout_json(syncsim().args(["--model", "full"]));
    assert_eq!(doc["params"]["electionModel"], "full");
    assert_eq!(doc["params"]["statesCount"], 15);
    assert_eq!(doc["coercions"].as_array().unwrap().len(), 5);
    assert_eq!(doc["results"]["costSavings"], "₹2,772 Cr");

    let partial = stdout_json(syncsim().args(["--model", "partial", "--states", "10"]));
    assert_eq!(partial["params"]["statesCount"], 10);
    assert_eq!(partial["results"]["policyContinuity"], "Moderate");
}

#[test]
fn same_request_same_bytes() {
    let a = syncsim().args(["--model", "partial", "--cycle", "7"]).assert().success();
    let b = syncsim().args(["--model", "partial", "--cycle", "7"]).assert().success();
    assert_eq!(a.get_output().stdout, b.get_output().stdout);
}

#[test]
fn unknown_token_defaults_unless_strict() {
    let lenient = stdout_json(syncsim().args(["--model", "bogus"]));
    assert_eq!(lenient["params"]["electionModel"], "current");
    assert_eq!(lenient["results"]["costSavingsValue"], 0);

    syncsim()
        .args(["--model", "bogus", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("electionModel"));
}

#[test]
fn unreadable_input_is_a_validation_error() {
    let tmp = TempDir::new().unwrap();
    let bad = write_request(tmp.path(), "bad.json", "{ not json");
    syncsim().args(["--params", bad.as_str()]).assert().code(2);

    syncsim().args(["--params", "no/such/request.json"]).assert().code(2).stderr(predicate::str::contains("file not found"));
    syncsim().args(["--render", "html"]).assert().code(2);
}

#[test]
fn out_dir_gets_canonical_result_and_reports() {
    let tmp = TempDir::new().unwrap();
    let req = write_request(tmp.path(), "req.json", FULL_REQUEST);
    let out = tmp.path().join("run");

    syncsim()
        .args(["--params", req.as_str(), "--out"])
        .arg(&out)
        .args(["--render", "json", "html"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bytes = fs::read(out.join("result.json")).unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc["results"]["costSavings"], "₹2,772 Cr");
    // canonical: compact, sorted top-level keys
    assert!(String::from_utf8(bytes).unwrap().starts_with("{\"coercions\":"));

    let record: Value = serde_json::from_slice(&fs::read(out.join("record.json")).unwrap()).unwrap();
    assert_eq!(record["name"], "Full Synchronization - 15 States");
    assert_eq!(record["status"], "completed");

    let report: Value = serde_json::from_slice(&fs::read(out.join("report.json")).unwrap()).unwrap();
    assert_eq!(report["cover"]["subtitle"], "15 States | 5-Year Cycle");
    assert_eq!(report["integrity"]["result_id"], doc["id"]);

    let html = fs::read_to_string(out.join("report.html")).unwrap();
    assert!(html.contains("Election Synchronization Analysis Report"));
    assert!(html.contains("<td>6,161</td>"));
}

#[test]
fn out_path_that_is_a_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let blocker = write_request(tmp.path(), "blocker", "x");
    syncsim().args(["--model", "full", "--out", blocker.as_str()]).assert().code(4);
}

#[test]
fn comparison_rows_are_attached() {
    let tmp = TempDir::new().unwrap();
    let full = write_request(tmp.path(), "full.json", FULL_REQUEST);
    let partial = write_request(tmp.path(), "partial.json", &FULL_REQUEST.replace("\"full\"", "\"partial\""));

    let doc = stdout_json(syncsim().args(["--params", full.as_str(), "--compare-with", partial.as_str()]));
    let rows = doc["comparison"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["metric"], "Cost Savings");
    assert!(rows.iter().all(|r| r["verdict"] == "better"));
    assert_eq!(doc["comparison"]["with"]["params"]["electionModel"], "partial");
}

#[test]
fn catalogue_listing() {
    let list = stdout_json(syncsim().arg("--list-scenarios"));
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["id"], "lok-sabha-general");

    let preset = stdout_json(syncsim().args(["--scenario", "no-such-preset"]));
    assert_eq!(preset["id"], "lok-sabha-general");
    assert_eq!(preset["costSavings"], "₹45,000 Cr");

    let demo = stdout_json(syncsim().arg("--demo"));
    assert_eq!(demo["simulations"].as_array().unwrap().len(), 3);
    assert_eq!(demo["simulations"][0]["status"], "completed");
    assert_eq!(demo["baseline"]["costSavings"], "₹2,772 Cr");

    syncsim().args(["--demo", "--model", "full"]).assert().code(2);
}
