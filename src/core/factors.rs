use std::collections::HashSet;

use crate::models::{CandidateProfile, JobProfile};

/// Upper bound shared by every factor score
pub const MAX_FACTOR_SCORE: f64 = 100.0;

/// Evaluate how well the candidate's skills cover the job's skill sets (0-100)
///
/// Required skills are worth up to 80 points and nice-to-have skills up to 20.
/// A job with no required skills scores 0: required skills gate eligibility.
pub fn skills_fit(candidate: &CandidateProfile, job: &JobProfile) -> f64 {
    let required = label_set(&job.required_skills);
    if required.is_empty() {
        return 0.0;
    }

    let nice_to_have = label_set(&job.nice_to_have_skills);
    let candidate_skills = label_set(&candidate.skills);

    let required_score = overlap_ratio(&candidate_skills, &required) * 80.0;
    let nice_score = if nice_to_have.is_empty() {
        0.0
    } else {
        overlap_ratio(&candidate_skills, &nice_to_have).min(1.0) * 20.0
    };

    clamp_score(required_score + nice_score)
}

/// Evaluate depth and relevance of experience (0-100)
///
/// Meeting the requirement saturates the first term at 100; falling short
/// earns a penalized share of 80. Relevant years add up to 20 more.
/// A job with no (or a negative) experience requirement contributes 0.
pub fn experience_relevance(candidate: &CandidateProfile, job: &JobProfile) -> f64 {
    let required = job.years_experience_required.max(0.0);
    if required <= 0.0 {
        return 0.0;
    }

    let total = candidate.total_years_experience.max(0.0);
    let experience_score = if total >= required {
        (total / required * 100.0).min(100.0)
    } else {
        total / required * 80.0
    };

    let relevant = candidate.relevant_experience_years.max(0.0);
    let industry_score = relevant / required * 20.0;

    clamp_score(experience_score + industry_score)
}

/// Evaluate values alignment and communication-style fit (0-100)
///
/// Returns a neutral 50 when the company declares no values.
pub fn cultural_alignment(candidate: &CandidateProfile, job: &JobProfile) -> f64 {
    let company_values = label_set(&job.company_values);
    if company_values.is_empty() {
        return 50.0;
    }

    let candidate_values = label_set(&candidate.stated_values);
    let values_score = overlap_ratio(&candidate_values, &company_values) * 60.0;

    let style_score = communication_style_match(
        candidate.communication_style.as_deref(),
        job.team_communication_style.as_deref(),
    );

    clamp_score(values_score + style_score)
}

/// Points for communication style. An unknown style on either side is
/// inconclusive and scores the same as an exact match.
fn communication_style_match(candidate_style: Option<&str>, team_style: Option<&str>) -> f64 {
    match (non_empty(candidate_style), non_empty(team_style)) {
        (Some(candidate), Some(team)) if candidate != team => 15.0,
        _ => 25.0,
    }
}

/// Evaluate potential for growth and development (50-100)
pub fn growth_potential(candidate: &CandidateProfile) -> f64 {
    let mut score = 50.0;

    // Learning mindset
    if candidate.continuous_learning {
        score += 15.0;
    }

    // Career trajectory
    if candidate.career_progression_rate > 0.0 {
        score += 20.0;
    }

    // Breadth
    if candidate.skills.len() > 8 {
        score += 10.0;
    }

    if candidate.advanced_certifications {
        score += 5.0;
    }

    clamp_score(score)
}

/// Evaluate location and work arrangement fit (50 or 100)
///
/// Labels are compared as given, so two absent locations count as a match.
pub fn location_match(candidate: &CandidateProfile, job: &JobProfile) -> f64 {
    if candidate.location == job.location || job.remote_work_allowed {
        100.0
    } else {
        // Relocation required
        50.0
    }
}

#[inline]
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_FACTOR_SCORE)
}

#[inline]
pub(crate) fn label_set(labels: &[String]) -> HashSet<&str> {
    labels.iter().map(String::as_str).collect()
}

#[inline]
fn overlap_ratio(have: &HashSet<&str>, wanted: &HashSet<&str>) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }
    wanted.intersection(have).count() as f64 / wanted.len() as f64
}

#[inline]
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
