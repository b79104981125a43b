//! Takeover classification.
//!
//! A CNAME pointing into a claimable third-party hosting service is the
//! dangling-DNS takeover signal this tool exists to surface. The fingerprint
//! set lists hostname substrings of services where an attacker can register
//! the pointed-at resource after the original owner deprovisions it.

use crate::models::{DomainReport, RecordOutcome};

/// Hosting-service domains known to host claimable resources.
const BUILTIN_FINGERPRINTS: &[&str] = &[
    "s3.amazonaws.com",
    "github.io",
    "herokuapp.com",
    "pantheon.io",
    "unbouncepages.com",
    "cloudfront.net",
    "tictail.com",
    "surge.sh",
    "bitbucket.io",
    "smugmug.com",
    "wordpress.com",
    "helpjuice.com",
    "helpscoutdocs.com",
    "amazonaws.com",
    "acquia-sites.com",
    "cargocollective.com",
    "flywheelstaging.com",
    "strikingly.com",
    "zendesk.com",
    "statuspage.io",
    "simplebooklet.com",
    "getresponse.com",
    "kinsta.com",
    "readme.io",
    "brightcove.com",
    "wufoo.com",
    "hatena.ne.jp",
    "activecampaign.com",
    "thinkific.com",
    "launchrock.com",
    "canny.io",
    "teamwork.com",
    "tilda.cc",
    "bigcartel.com",
    "aftership.com",
    "helpscout.net",
    "webflow.io",
    "ghost.io",
    "helprace.com",
];

/// Immutable fingerprint set injected into the classification step.
///
/// Constructed once at startup; matching is a whole-set substring scan,
/// which is plenty at ~40 entries.
#[derive(Debug, Clone)]
pub struct TakeoverRules {
    patterns: Vec<String>,
}

impl TakeoverRules {
    /// The built-in fingerprint set.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FINGERPRINTS.iter().map(|p| p.to_string()))
    }

    /// A rule set from arbitrary patterns (matching stays case-sensitive,
    /// so store patterns in the casing the resolver returns).
    pub fn new(patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Classifies a CNAME outcome: true iff it resolved and any value
    /// contains a fingerprint substring. Pure; no side effects.
    pub fn classify(&self, cname: &RecordOutcome) -> bool {
        match cname.values() {
            Some(values) => values
                .iter()
                .any(|value| self.patterns.iter().any(|pattern| value.contains(pattern))),
            None => false,
        }
    }

    /// Annotates a report with the classification of its CNAME outcome.
    pub fn annotate(&self, report: &mut DomainReport) {
        report.takeover_suspected = self.classify(&report.cname);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(value: &str) -> RecordOutcome {
        RecordOutcome::Resolved(vec![value.to_string()])
    }

    #[test]
    fn test_fingerprint_match_flags_takeover() {
        let rules = TakeoverRules::builtin();
        assert!(rules.classify(&resolved("ghost.github.io")));
        assert!(rules.classify(&resolved("assets.s3.amazonaws.com")));
        assert!(rules.classify(&resolved("shop.myshop.herokuapp.com")));
    }

    #[test]
    fn test_unmatched_cname_is_clean() {
        let rules = TakeoverRules::builtin();
        assert!(!rules.classify(&resolved("www.example.org")));
    }

    #[test]
    fn test_non_resolved_outcomes_never_classify() {
        let rules = TakeoverRules::builtin();
        assert!(!rules.classify(&RecordOutcome::NoSuchDomain));
        assert!(!rules.classify(&RecordOutcome::NoAnswer));
        assert!(!rules.classify(&RecordOutcome::Refused));
        assert!(!rules.classify(&RecordOutcome::Timeout));
        assert!(!rules.classify(&RecordOutcome::Fault("boom".to_string())));
    }

    #[test]
    fn test_any_value_in_a_multivalue_answer_counts() {
        let rules = TakeoverRules::builtin();
        let outcome = RecordOutcome::Resolved(vec![
            "safe.example.net".to_string(),
            "docs.readme.io".to_string(),
        ]);
        assert!(rules.classify(&outcome));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let rules = TakeoverRules::builtin();
        assert!(!rules.classify(&resolved("ghost.GITHUB.IO")));
    }

    #[test]
    fn test_custom_rule_set() {
        let rules = TakeoverRules::new(["example-pages.dev".to_string()]);
        assert!(rules.classify(&resolved("site.example-pages.dev")));
        assert!(!rules.classify(&resolved("ghost.github.io")));
    }

    #[test]
    fn test_annotate_sets_flag_from_cname() {
        let rules = TakeoverRules::builtin();
        let mut report = DomainReport::from_outcomes(
            "ghost.example",
            resolved("ghost.github.io"),
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
            RecordOutcome::NoAnswer,
        );
        rules.annotate(&mut report);
        assert!(report.takeover_suspected);
    }
}
