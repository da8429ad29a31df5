//! End-to-end tests for the disavow pipeline
//!
//! Each test builds a fresh workspace on disk, runs `DisavowEngine::process`
//! and inspects the written disavow file and the returned report.

mod helpers;

use std::fs;

use disavow_generator::{
    load_history, parse_artifact_body, parse_artifact_counts, CategorizedResult, DisavowEngine, ProcessError,
    ProcessingStats,
};
use helpers::Workspace;

fn set(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_text_input_end_to_end() {
    let ws = Workspace::new();
    ws.add_input(
        "links.txt",
        "http://spam.example/page\ndomain:badhost.net\n192.0.2.5\n",
    );

    let report = DisavowEngine::new(&ws.config)
        .process()
        .expect("process should succeed");

    assert_eq!(report.total_urls_processed, 3);
    assert_eq!(report.stats.ips, 1);
    assert_eq!(report.stats.domains, 1);
    assert_eq!(report.stats.urls, 1);
    assert_eq!(report.stats.total, 3);

    let content = fs::read_to_string(&report.path).unwrap();
    assert!(content.contains("# Total entries: 3\n"));
    assert!(content.contains("#   - IPs: 1\n"));
    assert!(content.contains("#   - Domains: 1\n"));
    assert!(content.contains("#   - Specific URLs: 1\n"));
    assert!(content.contains("domain:192.0.2.5\n"));
    assert!(content.contains("domain:badhost.net\n"));
    assert!(content.contains("\nhttp://spam.example/page\n"));

    // Everything is new on the first run
    assert_eq!(report.new_entries.list.ips, set(&["192.0.2.5"]));
    assert_eq!(report.new_entries.list.domains, set(&["badhost.net"]));
    assert_eq!(report.new_entries.list.urls, set(&["http://spam.example/page"]));
}

#[test]
fn test_artifact_name_follows_convention() {
    let ws = Workspace::new();
    ws.add_input("links.txt", "http://a.com/\n");

    let report = DisavowEngine::new(&ws.config).process().unwrap();
    let name = &report.filename;

    assert!(name.starts_with("disavow_"));
    assert!(name.ends_with(".txt"));
    // disavow_ + 8 hex + _ + YYYYMMDD_HHMMSS + .txt
    assert_eq!(name.len(), "disavow_".len() + 8 + 1 + 15 + ".txt".len());
    assert!(name[8..16].chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(ws.output_names(), vec![name.clone()]);
}

#[test]
fn test_empty_input_writes_nothing() {
    let ws = Workspace::new();
    ws.add_input("empty.txt", "# only a comment\n\n");

    let err = DisavowEngine::new(&ws.config).process().unwrap_err();
    assert!(matches!(err, ProcessError::NoUrlsFound));
    assert_eq!(err.to_string(), "No URLs found in input files");
    assert!(ws.output_names().is_empty());
}

#[test]
fn test_rerun_reports_no_new_entries_but_writes_again() {
    let ws = Workspace::new();
    ws.add_input("links.txt", "http://spam.example/page\nhttp://bad.net/\n");
    let engine = DisavowEngine::new(&ws.config);

    let first = engine.process().unwrap();
    assert_eq!(first.new_entries.counts.total, 2);

    let second = engine.process().unwrap();
    assert_eq!(second.new_entries.counts.total, 0);
    assert!(second.new_entries.list.is_empty());
    assert_eq!(second.stats.total, 2);
    assert_ne!(first.filename, second.filename);
    assert_eq!(ws.output_names().len(), 2);

    // The first file is never rewritten
    let first_content = fs::read_to_string(&first.path).unwrap();
    assert!(first_content.contains("http://spam.example/page"));
}

#[test]
fn test_written_file_reads_back_as_history() {
    let ws = Workspace::new();
    ws.add_input(
        "links.csv",
        "Página,Anchor\nhttp://10.1.2.3/,x\nhttps://www.Bad.net/,y\nhttp://spam.example/p?id=7,z\n",
    );

    DisavowEngine::new(&ws.config).process().unwrap();
    let history = load_history(&ws.config.output_dir, &ProcessingStats::new());

    let mut expected = CategorizedResult::default();
    expected.ips.insert("10.1.2.3".to_string());
    expected.domains.insert("bad.net".to_string());
    expected.urls.insert("http://spam.example/p?id=7".to_string());
    assert_eq!(history, expected);
}

#[test]
fn test_whitelist_excludes_domain_and_subdomains() {
    let ws = Workspace::new();
    ws.write_whitelist("# trusted\ngood.com\n");
    ws.add_input(
        "links.txt",
        "http://good.com/\nhttp://blog.good.com/\nhttp://good.com/article\nhttp://notgood.com/\n",
    );

    let report = DisavowEngine::new(&ws.config).process().unwrap();
    assert_eq!(report.total_urls_processed, 4);
    assert_eq!(report.stats.total, 1);

    let content = fs::read_to_string(&report.path).unwrap();
    assert!(content.contains("domain:notgood.com\n"));
    assert!(!content.contains("domain:good.com\n"));
    assert!(!content.contains("blog.good.com"));
    assert!(!content.contains("good.com/article"));
}

#[test]
fn test_unreadable_input_is_skipped() {
    let ws = Workspace::new();
    ws.add_input("good.txt", "http://bad.net/\n");
    ws.add_input("broken.xlsx", "this is not a zip archive");

    let report = DisavowEngine::new(&ws.config).process().unwrap();
    assert_eq!(report.skipped_files, 1);
    assert_eq!(report.stats.domains, 1);
}

#[test]
fn test_header_counts_match_body() {
    let ws = Workspace::new();
    ws.add_input(
        "links.txt",
        "http://a.com/\nhttp://b.com/x\nhttp://c.com/y\n172.16.0.1\n",
    );

    let report = DisavowEngine::new(&ws.config).process().unwrap();
    let content = fs::read_to_string(&report.path).unwrap();
    let counts = parse_artifact_counts(&content);

    assert_eq!(counts.ips, report.stats.ips);
    assert_eq!(counts.domains, report.stats.domains);
    assert_eq!(counts.urls, report.stats.urls);
    assert_eq!((counts.ips, counts.domains, counts.urls), (1, 1, 2));
}

#[test]
fn test_multiline_cell_cannot_inject_lines() {
    let ws = Workspace::new();
    ws.write_whitelist("google.com\n");
    ws.add_input(
        "links.csv",
        "URL\n\"http://spam.example/x\ndomain:google.com\"\nhttp://bad.net/\n",
    );

    let report = DisavowEngine::new(&ws.config).process().unwrap();
    let content = fs::read_to_string(&report.path).unwrap();

    assert!(!content.lines().any(|l| l == "domain:google.com"));
    assert!(!content.contains("http://spam.example/x"));
    assert_eq!(report.stats.total, 1);

    // Header and body agree
    let mut body = CategorizedResult::default();
    parse_artifact_body(&content, &mut body);
    assert_eq!(body.counts(), report.stats);
    assert_eq!(parse_artifact_counts(&content).domains, 1);
}

#[test]
fn test_uppercase_scheme_url_is_not_new_on_rerun() {
    let ws = Workspace::new();
    ws.add_input("links.txt", "HTTP://spam.example/page\nHttps://bad.net/Deep/Path\n");
    let engine = DisavowEngine::new(&ws.config);

    let first = engine.process().unwrap();
    assert_eq!(first.new_entries.counts.urls, 2);
    assert_eq!(
        first.new_entries.list.urls,
        set(&["http://spam.example/page", "https://bad.net/Deep/Path"])
    );

    let second = engine.process().unwrap();
    assert_eq!(second.new_entries.counts.total, 0);
    assert_eq!(second.stats.urls, 2);
}
