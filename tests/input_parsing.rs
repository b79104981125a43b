//! Tests for input-file parsing (blank lines, whitespace, comments) and
//! configuration validation at the run boundary.

mod helpers;

use std::sync::Arc;

use helpers::{write_input, ScriptedLookup};

use domain_recon::{run_lookup, run_lookup_with, Config, RecordLookup, TakeoverRules};

#[tokio::test]
async fn test_blank_lines_and_whitespace_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "subs.txt",
        "  a.example  \n\n   \n\t\nb.example\nc.example   \n",
    );

    let lookup: Arc<dyn RecordLookup> = Arc::new(ScriptedLookup::default());
    let outcome = run_lookup_with(
        Config {
            file: input,
            ..Default::default()
        },
        lookup,
        TakeoverRules::builtin(),
    )
    .await
    .unwrap();

    let domains: Vec<&str> = outcome
        .reports
        .iter()
        .map(|report| report.domain.as_str())
        .collect();
    assert_eq!(domains, vec!["a.example", "b.example", "c.example"]);
    assert_eq!(outcome.total_domains, 3);
}

#[tokio::test]
async fn test_comment_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "subs.txt",
        "# staging hosts\na.example\n  # indented comment\nb.example\n",
    );

    let lookup: Arc<dyn RecordLookup> = Arc::new(ScriptedLookup::default());
    let outcome = run_lookup_with(
        Config {
            file: input,
            ..Default::default()
        },
        lookup,
        TakeoverRules::builtin(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.total_domains, 2);
    assert_eq!(outcome.reports[0].domain, "a.example");
    assert_eq!(outcome.reports[1].domain, "b.example");
}

#[tokio::test]
async fn test_invalid_nameserver_fails_before_any_query() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "subs.txt", "a.example\n");

    let config = Config {
        file: input,
        nameservers: vec!["nonsense".to_string()],
        ..Default::default()
    };

    let result = run_lookup(config).await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid nameserver"));
}

#[tokio::test]
async fn test_zero_concurrency_fails_before_any_query() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "subs.txt", "a.example\n");

    let config = Config {
        file: input,
        max_concurrency: 0,
        ..Default::default()
    };

    assert!(run_lookup(config).await.is_err());
}
