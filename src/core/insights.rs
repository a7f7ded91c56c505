use crate::core::factors::label_set;
use crate::models::{CandidateProfile, JobProfile};

pub const GROWTH_QUESTION: &str = "Where do you see yourself in 3-5 years?";
pub const CULTURE_QUESTION: &str = "What type of team environment do you work best in?";
pub const RAMP_UP_QUESTION: &str = "How would you approach learning our tech stack quickly?";

const FALLBACK_TECHNICAL_TOPIC: &str = "our core technology stack";

/// Identify the candidate's key strengths from the explanation view
pub fn identify_strengths(candidate: &CandidateProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if candidate.years_experience > 10.0 {
        strengths.push("Deep experience".to_string());
    }
    if candidate.technical_skills.len() > 5 {
        strengths.push("Strong technical breadth".to_string());
    }
    if candidate.leadership_experience {
        strengths.push("Leadership background".to_string());
    }
    if candidate.track_record_success {
        strengths.push("Proven track record".to_string());
    }

    strengths
}

/// Identify skill and experience gaps against the job profile
///
/// Missing required skills are reported once, in the job's listing order.
pub fn identify_gaps(candidate: &CandidateProfile, job: &JobProfile) -> Vec<String> {
    let mut gaps = Vec::new();

    let candidate_skills = label_set(&candidate.skills);
    let mut missing: Vec<&str> = Vec::new();
    for skill in &job.required_skills {
        let skill = skill.as_str();
        if !candidate_skills.contains(skill) && !missing.contains(&skill) {
            missing.push(skill);
        }
    }

    if !missing.is_empty() {
        gaps.push(format!("Missing skills: {}", missing.join(", ")));
    }

    if candidate.years_experience < job.years_experience_required {
        gaps.push("Below required experience level".to_string());
    }

    gaps
}

/// Build the templated interview question set for a candidate
pub fn interview_questions(candidate: &CandidateProfile, job: &JobProfile) -> Vec<String> {
    let mut questions = Vec::with_capacity(4);

    questions.push(format!(
        "Tell us about your experience with {}",
        technical_topic(job)
    ));

    if candidate.relevant_experience_years < job.years_experience_required {
        questions.push(RAMP_UP_QUESTION.to_string());
    }

    questions.push(GROWTH_QUESTION.to_string());
    questions.push(CULTURE_QUESTION.to_string());

    questions
}

fn technical_topic(job: &JobProfile) -> &str {
    job.primary_technical_skill
        .as_deref()
        .filter(|skill| !skill.is_empty())
        .or_else(|| {
            job.required_skills
                .iter()
                .map(String::as_str)
                .find(|skill| !skill.is_empty())
        })
        .unwrap_or(FALLBACK_TECHNICAL_TOPIC)
}
