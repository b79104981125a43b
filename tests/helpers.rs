// Shared test helpers: scripted RecordLookup implementations and input files.
//
// These drive the orchestration engine without touching the network, so the
// integration suite is deterministic.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;

use domain_recon::{RecordKind, RecordLookup, RecordOutcome};

/// Scripted lookups with an optional per-query delay and random jitter.
/// Unknown (domain, kind) pairs answer `NoAnswer`.
#[derive(Default)]
#[allow(dead_code)] // Used by other test files
pub struct ScriptedLookup {
    pub base_delay: Duration,
    pub jitter: Duration,
    pub answers: HashMap<(String, RecordKind), RecordOutcome>,
}

#[allow(dead_code)]
impl ScriptedLookup {
    pub fn with_delay(base_delay: Duration, jitter: Duration) -> Self {
        Self {
            base_delay,
            jitter,
            answers: HashMap::new(),
        }
    }

    pub fn answer(mut self, domain: &str, kind: RecordKind, outcome: RecordOutcome) -> Self {
        self.answers.insert((domain.to_string(), kind), outcome);
        self
    }
}

#[async_trait]
impl RecordLookup for ScriptedLookup {
    async fn lookup(&self, domain: &str, kind: RecordKind) -> Result<RecordOutcome> {
        let mut delay = self.base_delay;
        if !self.jitter.is_zero() {
            let jitter_ms = self.jitter.as_millis() as u64;
            delay += Duration::from_millis(rand::rng().random_range(0..jitter_ms));
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(self
            .answers
            .get(&(domain.to_string(), kind))
            .cloned()
            .unwrap_or(RecordOutcome::NoAnswer))
    }
}

/// Writes an input file into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test input file");
    path
}
