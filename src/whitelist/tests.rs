// Whitelist module tests.

use super::*;
use proptest::prelude::*;
use tempfile::TempDir;

fn set(entries: &[&str]) -> BTreeSet<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

#[test]
fn test_suffix_rule() {
    let whitelist = set(&["example.com"]);
    assert!(is_whitelisted("example.com", &whitelist));
    assert!(is_whitelisted("sub.example.com", &whitelist));
    assert!(is_whitelisted("a.b.example.com", &whitelist));
    assert!(!is_whitelisted("notexample.com", &whitelist));
    assert!(!is_whitelisted("example.com.evil.com", &whitelist));
}

#[test]
fn test_match_normalizes_input() {
    let whitelist = set(&["example.com"]);
    assert!(is_whitelisted("WWW.Example.com", &whitelist));
}

#[test]
fn test_ip_exact_match_only() {
    let whitelist = set(&["192.0.2.1"]);
    assert!(is_whitelisted("192.0.2.1", &whitelist));
    assert!(!is_whitelisted("192.0.2.10", &whitelist));
}

#[test]
fn test_empty_whitelist_matches_nothing() {
    assert!(!is_whitelisted("example.com", &BTreeSet::new()));
}

#[test]
fn test_normalize_entry() {
    assert_eq!(normalize_whitelist_entry("  WWW.Partner.com "), Some("partner.com".to_string()));
    assert_eq!(
        normalize_whitelist_entry("https://www.partner.com/about"),
        Some("partner.com".to_string())
    );
    assert_eq!(normalize_whitelist_entry(""), None);
    assert_eq!(normalize_whitelist_entry("# comment"), None);
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let whitelist = load_whitelist(&dir.path().join("missing.txt"));
    assert!(whitelist.is_empty());
}

#[test]
fn test_load_ignores_comments_and_blanks() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("whitelist.txt");
    fs::write(&path, "# header\n\nwww.Good.com\n  trusted.org  \n# another\n")
        .expect("Failed to write whitelist");

    let whitelist = load_whitelist(&path);
    assert_eq!(whitelist, set(&["good.com", "trusted.org"]));
}

#[test]
fn test_save_writes_header_sorted_deduplicated() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("whitelist.txt");

    let saved = save_whitelist(&path, ["zeta.com", "www.alpha.com", "Alpha.com", " ", "beta.org"])
        .expect("Failed to save whitelist");
    assert_eq!(saved, set(&["alpha.com", "beta.org", "zeta.com"]));

    let content = fs::read_to_string(&path).expect("Failed to read whitelist");
    assert!(content.starts_with("# Domains Whitelist - Disavow Generator\n"));
    assert!(content.ends_with("\nalpha.com\nbeta.org\nzeta.com\n"));
}

#[test]
fn test_save_is_idempotent() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("whitelist.txt");

    let first = save_whitelist(&path, ["www.B.com", "a.com", "a.com"]).expect("save");
    let first_content = fs::read_to_string(&path).expect("read");

    let reloaded = load_whitelist(&path);
    let second = save_whitelist(&path, &reloaded).expect("save again");
    let second_content = fs::read_to_string(&path).expect("read");

    assert_eq!(first, second);
    assert_eq!(first_content, second_content);
}

#[test]
fn test_add_and_remove() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("whitelist.txt");

    assert!(add_to_whitelist(&path, "www.Partner.com").expect("add"));
    assert!(!add_to_whitelist(&path, "partner.com").expect("add duplicate"));
    assert!(!add_to_whitelist(&path, "   ").expect("add blank"));
    assert_eq!(load_whitelist(&path), set(&["partner.com"]));

    assert!(!remove_from_whitelist(&path, "other.com").expect("remove missing"));
    assert!(remove_from_whitelist(&path, "WWW.partner.com").expect("remove"));
    assert!(load_whitelist(&path).is_empty());
}

proptest! {
    #[test]
    fn test_subdomains_of_entries_are_excluded(
        sub in "[a-z]{1,10}",
        domain in "[a-z]{3,12}\\.(com|org|net)"
    ) {
        let whitelist: BTreeSet<String> = [domain.clone()].into_iter().collect();
        let subdomain = format!("{}.{}", sub, domain);
        prop_assert!(is_whitelisted(&subdomain, &whitelist));
        let lookalike = format!("{}{}", sub, domain);
        prop_assert!(!is_whitelisted(&lookalike, &whitelist));
    }
}
