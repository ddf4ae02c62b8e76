//! Scoring candidates against several collections at once.
//!
//! A candidate's total is the sum of the outcomes of every attribute check,
//! so one failure rejects the candidate and a perfect attribute dominates
//! plain scores.

use validlist::prelude::*;
use validlist_config::ListConfig;
use validlist_test::{tier::membership_policy, Badge, Reading, Tier};

struct Candidate {
    tier: Tier,
    badge: Badge,
    reading: Reading,
}

struct Policy {
    tiers: KeyedCollection<Tier>,
    badges: KeyedCollection<Badge>,
    readings: KeyedCollection<Reading>,
}

impl Policy {
    fn new() -> Self {
        let mut badges: KeyedCollection<Badge> = KeyedCollection::new();
        badges -= Badge::new("mallory", 13);

        let readings: KeyedCollection<Reading> = KeyedCollection::from_entries(vec![
            (3u32, Reading(36.5)).into(),
            (1u32, Reading(37.5)).into(),
        ]);

        Policy {
            tiers: membership_policy(),
            badges,
            readings,
        }
    }

    fn score(&self, candidate: &Candidate) -> Outcome {
        [
            self.tiers.validate(&candidate.tier),
            self.badges.validate(&candidate.badge),
            self.readings.validate(&candidate.reading),
        ]
        .into_iter()
        .sum()
    }
}

fn candidate(tier: Tier, holder: &str, number: u32, reading: f64) -> Candidate {
    Candidate {
        tier,
        badge: Badge::new(holder, number),
        reading: Reading(reading),
    }
}

#[test]
fn test_plain_scores_accumulate() {
    let policy = Policy::new();
    let total = policy.score(&candidate(Tier::Silver, "alice", 1, 36.5));
    assert_eq!(total.raw(), 5);

    let total = policy.score(&candidate(Tier::Member, "bob", 2, 37.5));
    assert_eq!(total.raw(), 1);
}

#[test]
fn test_any_failure_rejects() {
    let policy = Policy::new();
    assert!(policy.score(&candidate(Tier::Banned, "alice", 1, 36.5)).is_fail());
    assert!(policy.score(&candidate(Tier::Gold, "mallory", 13, 36.5)).is_fail());
    assert!(policy.score(&candidate(Tier::Gold, "alice", 1, 40.0)).is_fail());
    assert!(policy.score(&candidate(Tier::Guest, "alice", 1, 36.5)).is_fail());
}

#[test]
fn test_perfect_dominates_scores() {
    let policy = Policy::new();
    let total = policy.score(&candidate(Tier::Gold, "alice", 1, 36.5));
    assert!(total.is_perfect());
    assert!(total.matches(&Outcome::from_raw(5)));
}

#[test]
fn test_best_candidate() {
    let policy = Policy::new();
    let candidates = [
        candidate(Tier::Member, "a", 1, 37.5),
        candidate(Tier::Silver, "b", 2, 36.5),
        candidate(Tier::Banned, "c", 3, 36.5),
    ];

    let best = candidates
        .iter()
        .map(|c| (c, policy.score(c)))
        .filter(|(_, total)| total.is_ok())
        .max_by_key(|(_, total)| total.raw());

    let (winner, total) = best.unwrap();
    assert_eq!(winner.badge.holder, "b");
    assert_eq!(total.raw(), 5);
}

#[test]
fn test_collection_capabilities_follow_fixtures() {
    let policy = Policy::new();
    assert!(policy.tiers.is_comparable());
    assert!(!policy.tiers.is_arithmetic());
    assert!(!policy.badges.is_comparable());
    assert!(policy.badges.is_blacklist_only());
    assert!(policy.readings.is_arithmetic());
    assert!(policy.readings.is_whitelist_only());
}

#[test]
fn test_configured_collection_joins_scoring() {
    let config: ListConfig<String> = ListConfig::from_toml_str(
        r#"
        whitelist = ["eu-west", "eu-central"]

        [[entries]]
        key = 4
        value = "us-east"
        "#,
    )
    .unwrap();
    let regions = config.build().unwrap();
    let tiers = membership_policy();

    let total: Outcome = [
        regions.validate(&"us-east".to_string()),
        tiers.validate(&Tier::Silver),
    ]
    .into_iter()
    .sum();
    assert_eq!(total.raw(), 6);

    let total: Outcome = [
        regions.validate(&"ap-south".to_string()),
        tiers.validate(&Tier::Gold),
    ]
    .into_iter()
    .sum();
    assert!(total.is_fail());
}

#[test]
fn test_every_tier_has_a_defined_outcome() {
    let policy = membership_policy();
    let outcomes: Vec<String> = Tier::ALL
        .iter()
        .map(|tier| format!("{tier}={}", policy.query(tier)))
        .collect();
    assert_eq!(
        outcomes,
        ["banned=FAIL", "guest=FAIL", "member=PASS", "silver=2", "gold=PERFECT"]
    );
}
