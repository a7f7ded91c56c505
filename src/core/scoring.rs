use crate::core::factors::{
    clamp_score, cultural_alignment, experience_relevance, growth_potential, location_match,
    skills_fit,
};
use crate::core::insights::{identify_gaps, identify_strengths, interview_questions};
use crate::core::ranking_config::RankingConfig;
use crate::models::{
    CandidateProfile, FactorScores, JobProfile, RankingWeights, Recommendation, ScoredCandidate,
};

/// Evaluate every factor and aggregate one candidate against a job.
///
/// Scoring formula:
/// total = (
///     skills_fit * 0.35 +
///     experience_relevance * 0.25 +
///     cultural_fit * 0.15 +
///     growth_potential * 0.15 +
///     location_match * 0.10
/// )
///
/// The total is taken over unrounded factor scores; every score in the
/// returned record is then rounded to 2 decimals.
pub fn score_candidate(
    candidate: &CandidateProfile,
    job: &JobProfile,
    config: &RankingConfig,
) -> ScoredCandidate {
    let factors = evaluate_factors(candidate, job);
    let total_score = round2(weighted_total(&factors, config.weights()));

    ScoredCandidate {
        candidate_id: candidate.id.clone(),
        name: candidate.name.clone(),
        total_score,
        factor_scores: FactorScores {
            skills_fit: round2(factors.skills_fit),
            experience_relevance: round2(factors.experience_relevance),
            cultural_fit: round2(factors.cultural_fit),
            growth_potential: round2(factors.growth_potential),
            location_match: round2(factors.location_match),
        },
        strengths: identify_strengths(candidate),
        gaps: identify_gaps(candidate, job),
        interview_questions: interview_questions(candidate, job),
        recommendation: Recommendation::from_score(total_score, config.thresholds()),
    }
}

/// Run the five factor evaluators, unrounded
pub fn evaluate_factors(candidate: &CandidateProfile, job: &JobProfile) -> FactorScores {
    FactorScores {
        skills_fit: skills_fit(candidate, job),
        experience_relevance: experience_relevance(candidate, job),
        cultural_fit: cultural_alignment(candidate, job),
        growth_potential: growth_potential(candidate),
        location_match: location_match(candidate, job),
    }
}

/// Weighted sum of factor scores, clamped to [0, 100]
#[inline]
pub fn weighted_total(factors: &FactorScores, weights: &RankingWeights) -> f64 {
    let total = factors.skills_fit * weights.skills_fit
        + factors.experience_relevance * weights.experience_relevance
        + factors.cultural_fit * weights.cultural_fit
        + factors.growth_potential * weights.growth_potential
        + factors.location_match * weights.location_match;

    clamp_score(total)
}

/// Round half away from zero to 2 decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
