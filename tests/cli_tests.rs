use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    csv_path: PathBuf,
}

impl TestContext {
    fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let csv_path = dir.path().join("input.csv");
        let mut f = File::create(&csv_path).unwrap();
        write!(f, "{}", contents).unwrap();
        Self {
            _dir: dir,
            csv_path,
        }
    }
}

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_sniffcsv")
}

#[test]
fn test_sniff_json_output() {
    let ctx = TestContext::new("a,b,c\n1,2,3\n4,5,6\n");

    let output = Command::new(bin())
        .arg("sniff")
        .arg("--json")
        .arg(&ctx.csv_path)
        .output()
        .expect("sniff failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let result = &parsed[0]["result"];
    assert_eq!(result["dialect"]["delimiter"], ",");
    assert_eq!(result["score"], 1.0);
    assert_eq!(result["row_count"], 3);
    assert_eq!(result["modal_column_count"], 3);
    assert_eq!(result["low_confidence"], false);
}

#[test]
fn test_sniff_is_reproducible() {
    let ctx = TestContext::new("a;b\n\"x;y\";z\nmessy\";w\n");

    let run = || {
        let output = Command::new(bin())
            .arg("sniff")
            .arg("--json")
            .arg(&ctx.csv_path)
            .output()
            .expect("sniff failed to run");
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_sniff_summary_table() {
    let ctx = TestContext::new("x|1\ny|2\n");

    let output = Command::new(bin())
        .arg("sniff")
        .arg(&ctx.csv_path)
        .output()
        .expect("sniff failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Delimiter"), "missing header: {stdout}");
    assert!(stdout.contains('|'));
}

#[test]
fn test_sniff_rank_lists_hypotheses() {
    let ctx = TestContext::new("a,b\nc,d\n");

    let output = Command::new(bin())
        .arg("sniff")
        .arg("--rank")
        .arg(&ctx.csv_path)
        .output()
        .expect("sniff failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Score"));
    // every floor delimiter shows up as a hypothesis
    assert!(stdout.contains("<space>"));
    assert!(stdout.contains("\\t"));
}

#[test]
fn test_parse_normalizes_to_csv() {
    let ctx = TestContext::new("a;b\n\"x;y\";z\n");

    let output = Command::new(bin())
        .arg("parse")
        .arg(&ctx.csv_path)
        .output()
        .expect("parse failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("a,b"));
    // the embedded semicolon survives; the comma-quoted form needs no quotes
    assert_eq!(lines.next(), Some("x;y,z"));
}

#[test]
fn test_parse_with_explicit_dialect() {
    let ctx = TestContext::new("1:2:3\n4:5:6\n");

    let output = Command::new(bin())
        .arg("parse")
        .arg(&ctx.csv_path)
        .arg("--delimiter")
        .arg(":")
        .output()
        .expect("parse failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some("1,2,3"));
}

#[test]
fn test_parse_rejects_colliding_dialect() {
    let ctx = TestContext::new("a,b\n");

    let output = Command::new(bin())
        .arg("parse")
        .arg(&ctx.csv_path)
        .arg("--delimiter")
        .arg(",")
        .arg("--quote")
        .arg(",")
        .output()
        .expect("parse failed to run");
    assert!(!output.status.success());
}

#[test]
fn test_sniff_with_weights_file() {
    let ctx = TestContext::new("a,b,c\n1,2,3\n4,5,6\n");
    let weights_path = ctx._dir.path().join("weights.json");
    std::fs::write(
        &weights_path,
        r#"{ "weight_length": 0.5, "weight_pattern": 0.5, "weight_malformed": 0.2 }"#,
    )
    .unwrap();

    let output = Command::new(bin())
        .arg("sniff")
        .arg("--json")
        .arg("--weights")
        .arg(&weights_path)
        .arg(&ctx.csv_path)
        .output()
        .expect("sniff failed to run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let result = &parsed[0]["result"];
    assert_eq!(result["dialect"]["delimiter"], ",");
    // 0.5 + 0.5 does not saturate past the header row anymore
    let score = result["score"].as_f64().unwrap();
    assert!(score < 1.0 && score > 0.5, "score was {score}");
}

#[test]
fn test_sniff_missing_file_fails() {
    let output = Command::new(bin())
        .arg("sniff")
        .arg("definitely_not_here.csv")
        .output()
        .expect("sniff failed to run");
    assert!(!output.status.success());
}
