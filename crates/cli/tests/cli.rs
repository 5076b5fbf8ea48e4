// ABOUTME: Integration tests for the amzn-feed CLI binary.
// ABOUTME: Tests feed and model inputs, file output, and strict validation.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn amzn_feed_cmd() -> Command {
    Command::cargo_bin("amzn-feed").unwrap()
}

const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
    <channel>
        <title>Tech Blog</title>
        <link>https://example.com/blog</link>
        <description>A tech blog</description>
        <item>
            <title>First Article</title>
            <link>https://example.com/post1</link>
            <guid>article-1</guid>
            <pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>
            <description>Summary</description>
        </item>
    </channel>
</rss>"#;

#[test]
fn converts_rss_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("feed.xml");
    fs::write(&input, RSS).unwrap();

    amzn_feed_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        .stdout(predicate::str::contains(
            r#"xmlns:amzn="https://amazon.com/ospublishing/1.0/""#,
        ))
        .stdout(predicate::str::contains("<title>First Article</title>"))
        .stdout(predicate::str::contains("<guid>article-1</guid>"))
        .stdout(predicate::str::contains(
            "<pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>",
        ))
        .stdout(predicate::str::contains("<amzn:indexContent>True</amzn:indexContent>"));
}

#[test]
fn reads_model_json_from_stdin() {
    let model = r#"{
        "title": "T",
        "link": {"href": "http://x"},
        "description": "D",
        "author": {"name": "Ed", "email": "ed@example.com"},
        "items": [{"title": "I1", "link": {"href": "http://x/1"}, "description": "D1"}]
    }"#;

    let mut child = amzn_feed_cmd()
        .args(["--input", "model", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(model.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("<managingEditor>ed@example.com (Ed)</managingEditor>"));
    assert!(stdout.contains("<link>http://x/1</link>"));
    assert!(!stdout.contains("<pubDate>"));
}

#[test]
fn writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("feed.xml");
    let output = temp_dir.path().join("amazon.xml");
    fs::write(&input, RSS).unwrap();

    amzn_feed_cmd()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("<title>Tech Blog</title>"));
    assert!(written.trim_end().ends_with("</rss>"));
}

#[test]
fn strict_rejects_missing_description() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("model.json");
    fs::write(&input, r#"{"title": "T", "link": {"href": "http://x"}}"#).unwrap();

    amzn_feed_cmd()
        .args(["--input", "model", "--strict"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("feed description is empty"));

    // Without --strict the empty field is passed through.
    amzn_feed_cmd()
        .args(["--input", "model"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("<description></description>"));
}

#[test]
fn missing_file_fails() {
    amzn_feed_cmd()
        .arg("/definitely/not/here.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
