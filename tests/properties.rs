// Property tests for scoring bounds, ranking order and tier layout

use proptest::prelude::*;
use talent_rank::core::factors::{growth_potential, location_match, skills_fit};
use talent_rank::models::{CandidateProfile, JobProfile, Tier};
use talent_rank::CandidateRanker;

const SKILL_POOL: &[&str] = &["Rust", "Go", "SQL", "AWS", "Docker", "Kafka", "Python", "React"];
const VALUE_POOL: &[&str] = &["ownership", "curiosity", "candor", "craft"];
const LOCATIONS: &[&str] = &["Berlin", "Austin", "Lisbon"];

fn labels(pool: &'static [&'static str], max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(pool), 0..=max)
        .prop_map(|picked| picked.into_iter().map(str::to_string).collect())
}

fn optional_label(pool: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(pool).prop_map(str::to_string))
}

fn candidate_strategy() -> impl Strategy<Value = CandidateProfile> {
    (
        labels(SKILL_POOL, 12),
        -5.0f64..40.0,
        -5.0f64..40.0,
        labels(VALUE_POOL, 4),
        optional_label(&["async", "sync"]),
        any::<bool>(),
        -1.0f64..1.0,
        any::<bool>(),
        optional_label(LOCATIONS),
    )
        .prop_map(
            |(
                skills,
                total_years_experience,
                relevant_experience_years,
                stated_values,
                communication_style,
                continuous_learning,
                career_progression_rate,
                advanced_certifications,
                location,
            )| CandidateProfile {
                skills,
                total_years_experience,
                relevant_experience_years,
                stated_values,
                communication_style,
                continuous_learning,
                career_progression_rate,
                advanced_certifications,
                location,
                ..Default::default()
            },
        )
}

fn job_strategy() -> impl Strategy<Value = JobProfile> {
    (
        labels(SKILL_POOL, 5),
        labels(SKILL_POOL, 3),
        -5.0f64..15.0,
        labels(VALUE_POOL, 3),
        optional_label(&["async", "sync"]),
        optional_label(LOCATIONS),
        any::<bool>(),
    )
        .prop_map(
            |(
                required_skills,
                nice_to_have_skills,
                years_experience_required,
                company_values,
                team_communication_style,
                location,
                remote_work_allowed,
            )| JobProfile {
                required_skills,
                nice_to_have_skills,
                years_experience_required,
                company_values,
                team_communication_style,
                location,
                remote_work_allowed,
                primary_technical_skill: Some("Rust".to_string()),
            },
        )
}

fn with_ids(candidates: Vec<CandidateProfile>) -> Vec<CandidateProfile> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| CandidateProfile {
            id: format!("C{:03}", i),
            ..candidate
        })
        .collect()
}

proptest! {
    #[test]
    fn scores_stay_in_bounds(candidate in candidate_strategy(), job in job_strategy()) {
        let scored = CandidateRanker::with_default_config().score(&candidate, &job);
        let factors = scored.factor_scores;

        for score in [
            scored.total_score,
            factors.skills_fit,
            factors.experience_relevance,
            factors.cultural_fit,
            factors.growth_potential,
            factors.location_match,
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
        }

        prop_assert!((50.0..=100.0).contains(&growth_potential(&candidate)));
        let location = location_match(&candidate, &job);
        prop_assert!(location == 50.0 || location == 100.0);
    }

    #[test]
    fn skills_fit_zero_without_requirements(candidate in candidate_strategy(), mut job in job_strategy()) {
        job.required_skills.clear();
        prop_assert_eq!(skills_fit(&candidate, &job), 0.0);
    }

    #[test]
    fn ranking_is_sorted_and_stable(
        candidates in prop::collection::vec(candidate_strategy(), 0..40),
        job in job_strategy(),
    ) {
        let candidates = with_ids(candidates);
        let ranked = CandidateRanker::with_default_config().rank_candidates(&candidates, &job);

        prop_assert_eq!(ranked.len(), candidates.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].total_score >= pair[1].total_score);
            if pair[0].total_score == pair[1].total_score {
                // Zero-padded ids follow input order
                prop_assert!(pair[0].candidate_id < pair[1].candidate_id);
            }
        }
    }

    #[test]
    fn tiers_follow_truncated_counts(
        candidates in prop::collection::vec(candidate_strategy(), 1..60),
        job in job_strategy(),
    ) {
        let candidates = with_ids(candidates);
        let total = candidates.len();
        let ranked = CandidateRanker::with_default_config().rank_candidates(&candidates, &job);

        let count = |tier: Tier| ranked.iter().filter(|c| c.tier == tier).count();
        let expected_1 = ((total as f64 * 0.10).floor() as usize).max(1);
        let expected_2 = (total as f64 * 0.20).floor() as usize;
        let expected_3 = (total as f64 * 0.30).floor() as usize;

        prop_assert_eq!(ranked[0].tier, Tier::Tier1);
        prop_assert_eq!(count(Tier::Tier1), expected_1.min(total));
        prop_assert_eq!(count(Tier::Tier2), expected_2.min(total - count(Tier::Tier1)));
        prop_assert_eq!(
            count(Tier::Tier1) + count(Tier::Tier2) + count(Tier::Tier3) + count(Tier::Tier4),
            total
        );
        prop_assert!(count(Tier::Tier3) <= expected_3);
        prop_assert!(ranked.windows(2).all(|pair| pair[0].tier <= pair[1].tier));
    }

    #[test]
    fn ranking_is_idempotent(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
        job in job_strategy(),
    ) {
        let ranker = CandidateRanker::with_default_config();
        prop_assert_eq!(
            ranker.rank_candidates(&candidates, &job),
            ranker.rank_candidates(&candidates, &job)
        );
    }
}
