use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, JobProfile};

/// Request to rank a batch of candidates against one job
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankCandidatesRequest {
    #[serde(alias = "jobProfile", alias = "job_profile")]
    pub job: JobProfile,
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    /// Truncates the returned list; tiers are still computed over every candidate
    #[validate(range(min = 1, max = 1000))]
    #[serde(default)]
    pub limit: Option<usize>,
}
