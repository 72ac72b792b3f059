use std::fs;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn hgm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hgm"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run hgm")
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "hgm failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let body = String::from_utf8(output.stdout.clone()).expect("utf8");
    serde_json::from_str(&body).expect("json")
}

fn total(counts: &Value) -> u64 {
    counts
        .as_array()
        .expect("counts array")
        .iter()
        .map(|entry| entry["count"].as_u64().expect("count"))
        .sum()
}

#[test]
fn example_reports_both_orders() {
    let value = json_stdout(&hgm(&["example"]));
    let results = value["results"].as_array().expect("results");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["order"], 3);
    assert_eq!(results[0]["total"], 9);
    assert_eq!(total(&results[0]["counts"]), 9);
    assert_eq!(results[1]["order"], 4);
    assert_eq!(results[1]["total"], 5);
    assert_eq!(value["edges"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["provenance"]["input"], "builtin-example");
    assert_eq!(value["method"], "baseline");
}

#[test]
fn example_methods_agree() {
    let baseline = json_stdout(&hgm(&["example", "--k", "4"]));
    let efficient = json_stdout(&hgm(&["example", "--k", "4", "--method", "efficient"]));
    assert_eq!(efficient["method"], "efficient");
    assert_eq!(baseline["results"], efficient["results"]);
}

#[test]
fn count_methods_agree_on_builtin_example() {
    let baseline = json_stdout(&hgm(&["count", "--k", "4", "--method", "baseline"]));
    let efficient = json_stdout(&hgm(&["count", "--k", "4", "--method", "efficient"]));
    assert_eq!(baseline["counts"], efficient["counts"]);
    assert_eq!(efficient["method"], "efficient");
    assert_eq!(efficient["stats"]["union_hits"], 3);
    assert_eq!(
        baseline["provenance"]["graph_hash"],
        efficient["provenance"]["graph_hash"]
    );
    assert!(baseline["elapsed_seconds"].as_f64().is_some());
}

#[test]
fn missing_dataset_falls_back_to_example() {
    let dir = tempdir().expect("dir");
    let missing = dir.path().join("dblp.csv");
    let value = json_stdout(&hgm(&[
        "count",
        "--k",
        "3",
        "--input",
        missing.to_str().expect("path"),
    ]));
    assert_eq!(value["provenance"]["dataset"], "example");
    assert_eq!(value["total"], 9);
}

#[test]
fn generated_graph_round_trips_through_count() {
    let dir = tempdir().expect("dir");
    let graph_path = dir.path().join("random.json");
    let path = graph_path.to_str().expect("path");
    let output = hgm(&[
        "generate",
        "--vertices",
        "10",
        "--edges",
        "14",
        "--max-size",
        "4",
        "--seed",
        "3",
        "--out",
        path,
    ]);
    assert!(output.status.success());
    assert!(fs::metadata(&graph_path).expect("written").len() > 0);

    let baseline = json_stdout(&hgm(&[
        "count", "--k", "3", "--method", "baseline", "--input", path,
    ]));
    let efficient = json_stdout(&hgm(&["count", "--k", "3", "--input", path]));
    assert_eq!(baseline["counts"], efficient["counts"]);
    assert_eq!(baseline["provenance"]["dataset"], "hypergraph-json");
}

#[test]
fn count_writes_report_to_file() {
    let dir = tempdir().expect("dir");
    let out = dir.path().join("reports").join("count.json");
    let output = hgm(&["count", "--k", "3", "--out", out.to_str().expect("path")]);
    assert!(output.status.success());
    let value: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("report")).expect("json");
    assert_eq!(value["order"], 3);
}

#[test]
fn invalid_order_is_rejected() {
    let output = hgm(&["count", "--k", "5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("motif order must be 3 or 4"), "{stderr}");
}

#[test]
fn bench_reads_yaml_config() {
    let dir = tempdir().expect("dir");
    let config = dir.path().join("bench.yaml");
    fs::write(&config, "repeat: 2\norders: [4]\n").expect("config");
    let value = json_stdout(&hgm(&["bench", "--config", config.to_str().expect("path")]));
    let rows = value["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["order"], 4);
    assert_eq!(rows[0]["matches"], true);
    assert_eq!(value["config"]["repeat"], 2);
}

#[test]
fn bench_rejects_unknown_config_keys() {
    let dir = tempdir().expect("dir");
    let config = dir.path().join("bench.yaml");
    fs::write(&config, "repeats: 2\n").expect("config");
    let output = hgm(&["bench", "--config", config.to_str().expect("path")]);
    assert!(!output.status.success());
}

#[test]
fn generate_batch_draws_one_substream_per_graph() {
    let first = tempdir().expect("dir");
    let second = tempdir().expect("dir");
    for dir in [&first, &second] {
        let output = hgm(&[
            "generate",
            "--vertices",
            "12",
            "--edges",
            "10",
            "--seed",
            "5",
            "--batch",
            "3",
            "--out",
            dir.path().to_str().expect("path"),
        ]);
        assert!(output.status.success());
    }
    let read = |dir: &tempfile::TempDir, index: u64| {
        fs::read_to_string(dir.path().join(format!("graph-{index}.json"))).expect("graph")
    };
    for index in 0..3 {
        assert_eq!(read(&first, index), read(&second, index));
    }
    assert_ne!(read(&first, 0), read(&first, 1));
    assert!(!first.path().join("graph-3.json").exists());
}

#[test]
fn generate_batch_requires_output_directory() {
    let output = hgm(&["generate", "--vertices", "5", "--edges", "3", "--batch", "2"]);
    assert!(!output.status.success());
}
