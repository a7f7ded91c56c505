// Criterion benchmarks for Talent Rank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use talent_rank::core::{scoring::score_candidate, tiers::tier_counts, CandidateRanker, RankingConfig};
use talent_rank::models::{CandidateProfile, JobProfile, TierDistribution};

const SKILLS: &[&str] = &["Rust", "Go", "SQL", "AWS", "Docker", "Kafka", "Python", "React", "Terraform"];

fn create_candidate(id: usize) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: format!("Candidate {}", id),
        skills: SKILLS.iter().take(1 + id % SKILLS.len()).map(|s| s.to_string()).collect(),
        total_years_experience: (id % 15) as f64,
        relevant_experience_years: (id % 9) as f64,
        stated_values: vec!["ownership".to_string()],
        communication_style: Some(if id % 2 == 0 { "async" } else { "sync" }.to_string()),
        continuous_learning: id % 3 == 0,
        career_progression_rate: (id % 4) as f64 * 0.1,
        location: Some(if id % 5 == 0 { "Austin" } else { "Berlin" }.to_string()),
        years_experience: (id % 15) as f64,
        technical_skills: SKILLS.iter().take(id % 8).map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn create_job() -> JobProfile {
    JobProfile {
        required_skills: vec!["Rust".to_string(), "SQL".to_string(), "AWS".to_string()],
        nice_to_have_skills: vec!["Kafka".to_string(), "Terraform".to_string()],
        years_experience_required: 5.0,
        company_values: vec!["ownership".to_string(), "candor".to_string()],
        team_communication_style: Some("async".to_string()),
        location: Some("Berlin".to_string()),
        remote_work_allowed: false,
        primary_technical_skill: Some("Rust".to_string()),
    }
}

fn bench_score_candidate(c: &mut Criterion) {
    let config = RankingConfig::default();
    let candidate = create_candidate(7);
    let job = create_job();

    c.bench_function("score_candidate", |b| {
        b.iter(|| score_candidate(black_box(&candidate), black_box(&job), &config));
    });
}

fn bench_tier_counts(c: &mut Criterion) {
    let distribution = TierDistribution::default();

    c.bench_function("tier_counts", |b| {
        b.iter(|| tier_counts(black_box(1000), &distribution));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = CandidateRanker::with_default_config();
    let job = create_job();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<CandidateProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| ranker.rank_candidates(black_box(&candidates), black_box(&job)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_candidate, bench_tier_counts, bench_ranking);

criterion_main!(benches);
