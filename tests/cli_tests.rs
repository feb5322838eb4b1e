//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PLANNER_HEADER: &str =
    "Keyword\tCurrency\tAvg. Monthly Searches (exact match only)\tCompetition\tSuggested bid\n";

fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xff, 0xfe];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("search_console.csv"),
        "Top queries,Impressions,Clicks,CTR,Position\nshoes,100,5,5.0%,3.2\nhiking+boots,80,8,10.0%,12\n",
    )
    .expect("write search console");
    fs::write(
        dir.join("Keyword Planner 2016-09-17.csv"),
        utf16le_with_bom(&format!(
            "{PLANNER_HEADER}running shoes\tEUR\t1K \u{e2}\u{20ac}\u{201c} 10K\t0.3\t1.5\n\
             hiking boots\tEUR\t100 - 1K\t0.6\t0.9\n"
        )),
    )
    .expect("write planner");
    fs::write(dir.join("manual_keywords.csv"), "keyword,CPC\ntrail shoes,0.4\n")
        .expect("write manual");
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keyword-merge"));
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keyword-merge"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("keyword-merge"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("keyword-merge"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--process"))
        .stdout(predicate::str::contains("--update"))
        .stdout(predicate::str::contains("--rankfalcon"));
}

#[test]
fn test_no_flags_is_silent_noop() {
    let tmp = TempDir::new().expect("tmp");
    cmd(tmp.path()).assert().success().stdout(predicate::str::is_empty());
    assert_eq!(fs::read_dir(tmp.path()).expect("read dir").count(), 0);
}

#[test]
fn test_process_writes_sorted_research_file() {
    let tmp = TempDir::new().expect("tmp");
    write_inputs(tmp.path());

    cmd(tmp.path()).arg("--process").assert().success().stdout(predicate::str::contains(
        "Keyword files processed. keyword_research.csv has been created.",
    ));

    let content = fs::read_to_string(tmp.path().join("keyword_research.csv")).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "keyword,search volume,CPC,competition,impressions,clicks,CTR,position,quality,potential"
    );
    assert_eq!(lines.len(), 5);
    // hiking boots: quality 50.9, position 12, weight 3, competition 0.6
    assert!(lines[1].starts_with("hiking boots,100 - 1K,0.9,0.6,80,8,10.0%,12.0,50.9,"));
    assert!(lines.iter().any(|l| l.starts_with("shoes,,,,100,5,5.0%,3.2,25.0,")));
    assert!(lines.iter().any(|l| l.starts_with("running shoes,1K - 10K,1.5,0.3,")));
    assert!(lines.iter().any(|l| l.starts_with("trail shoes,,0.4,,")));
}

#[test]
fn test_process_fails_without_inputs() {
    let tmp = TempDir::new().expect("tmp");
    cmd(tmp.path())
        .arg("--process")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_update_twice_is_identical() {
    let tmp = TempDir::new().expect("tmp");
    write_inputs(tmp.path());
    cmd(tmp.path()).arg("--process").assert().success();
    let research = tmp.path().join("keyword_research.csv");

    cmd(tmp.path())
        .arg("--update")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword_research.csv has been updated."));
    let first = fs::read_to_string(&research).expect("read");

    cmd(tmp.path()).arg("--update").assert().success();
    let second = fs::read_to_string(&research).expect("read");

    similar_asserts::assert_eq!(first, second);
}

#[test]
fn test_update_rejects_unknown_volume_bucket() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("keyword_research.csv"),
        "keyword,search volume,CPC,competition,impressions,clicks,CTR,position\nshoes,a lot,1.0,,,,,\n",
    )
    .expect("write");

    cmd(tmp.path())
        .arg("--update")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown search volume bucket 'a lot'"));
}

#[test]
fn test_rankfalcon_processes_first_when_research_file_missing() {
    let tmp = TempDir::new().expect("tmp");
    write_inputs(tmp.path());

    cmd(tmp.path())
        .args(["--rankfalcon", "--cutoff", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword files processed."))
        .stdout(predicate::str::contains("rankfalcon_csv_import.csv has been created."));

    let content = fs::read_to_string(tmp.path().join("rankfalcon_csv_import.csv")).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "keyword,site,search_engine,location_name,groups,language");
    assert_eq!(lines[1], "hiking boots,http://www.rankfalcon.com,google.com,,,English");
}

#[test]
fn test_rankfalcon_uses_config_file() {
    let tmp = TempDir::new().expect("tmp");
    write_inputs(tmp.path());
    fs::write(
        tmp.path().join("keyword-merge.toml"),
        "site = 'https://example.com'\nlanguage = 'Dutch'\ncutoff = 1\n",
    )
    .expect("write config");

    cmd(tmp.path())
        .args(["--process", "--rankfalcon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword files processed.").count(1));

    let content = fs::read_to_string(tmp.path().join("rankfalcon_csv_import.csv")).expect("read");
    assert_eq!(
        content,
        "keyword,site,search_engine,location_name,groups,language\n\
         hiking boots,https://example.com,google.com,,,Dutch\n"
    );
}

#[test]
fn test_rankfalcon_with_empty_research_file_writes_header_only() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("keyword_research.csv"),
        "keyword,search volume,CPC,competition,impressions,clicks,CTR,position,quality,potential\n",
    )
    .expect("write");

    cmd(tmp.path())
        .arg("--rankfalcon")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword files processed.").not());

    let content = fs::read_to_string(tmp.path().join("rankfalcon_csv_import.csv")).expect("read");
    assert_eq!(content, "keyword,site,search_engine,location_name,groups,language\n");
}
