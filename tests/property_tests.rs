//! Property-based tests for md-link-report using proptest
//!
//! These exercise the library with generated markdown text and reports, and
//! run the binary over generated workspaces that contain no URLs.

use assert_cmd::prelude::*;
use md_link_report::discovery::extract_urls;
use md_link_report::reporting::writer::to_json;
use md_link_report::{Report, UrlDetails};
use proptest::prelude::*;
use std::fs;
use std::process::Command;

const NAME: &str = "md-link-report";

/// URLs the extractor should return unchanged when surrounded by spaces
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec("[a-z]{3,10}", 2..5)
            .prop_map(|parts| format!("https://{}", parts.join("."))),
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{domain}.dev:{port}/")),
        (r"[a-z]{3,8}", prop::collection::vec(r"[a-z0-9]{1,8}", 1..5)).prop_map(
            |(domain, path_parts)| format!("https://{domain}.com/{}", path_parts.join("/"))
        ),
        (r"[a-z]{3,8}", r"[a-z]{1,8}", r"[a-z0-9]{1,8}").prop_map(|(domain, key, value)| {
            format!("https://{domain}.org/search?{key}={value}")
        }),
    ]
}

/// Prose without any `http` in it
fn prose_strategy() -> impl Strategy<Value = String> {
    r"[A-Za-z ,.!?#*\[\]()\n-]{0,200}".prop_filter("no scheme", |s| !s.contains("http"))
}

fn report_strategy() -> impl Strategy<Value = Report> {
    prop::collection::vec(
        (
            r"/[a-z]{1,8}/[a-z]{1,8}\.md",
            prop::collection::vec((url_strategy(), 100..600u16), 0..4),
        ),
        0..6,
    )
    .prop_map(|files| {
        let mut report = Report::new();
        for (path, urls) in files {
            if report.get(&path).is_some() {
                continue;
            }
            report.add_file(path.clone());
            for (url, code) in urls {
                report.push(&path, UrlDetails::new(url, code));
            }
        }
        report
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_extracts_urls_between_prose(
        urls in prop::collection::vec(url_strategy(), 1..6),
        prose in prose_strategy(),
    ) {
        let text = urls
            .iter()
            .map(|url| format!("{prose} {url} "))
            .collect::<String>();

        prop_assert_eq!(extract_urls(&text), urls);
    }

    #[test]
    fn prop_text_without_scheme_has_no_urls(prose in prose_strategy()) {
        prop_assert!(extract_urls(&prose).is_empty());
    }

    #[test]
    fn prop_report_json_keeps_file_order(report in report_strategy()) {
        let json = to_json(&report).unwrap();
        let parsed: Report = serde_json::from_slice(&json).unwrap();

        let original: Vec<&str> = report.paths().collect();
        let reparsed: Vec<&str> = parsed.paths().collect();
        prop_assert_eq!(original, reparsed);
        prop_assert_eq!(parsed.url_count(), report.url_count());
        prop_assert_eq!(parsed.failure_count(), report.failure_count());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_run_lists_every_markdown_file(
        names in prop::collection::btree_set(r"[a-z]{1,10}", 1..5),
        prose in prose_strategy(),
    ) {
        let temp_dir = tempfile::tempdir().unwrap();
        for name in &names {
            fs::write(temp_dir.path().join(format!("{name}.md")), &prose).unwrap();
        }
        fs::write(temp_dir.path().join("notes.txt"), "https://example.com").unwrap();

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.current_dir(temp_dir.path()).arg("run").arg("--quiet");
        cmd.assert().success();

        let content =
            fs::read_to_string(temp_dir.path().join("tmp/markdown-link-report.json")).unwrap();
        let report: Report = serde_json::from_str(&content).unwrap();
        prop_assert_eq!(report.len(), names.len());
        prop_assert_eq!(report.url_count(), 0);
    }
}
