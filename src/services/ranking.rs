use validator::Validate;

use crate::core::CandidateRanker;
use crate::error::AppError;
use crate::models::{RankCandidatesRequest, RankCandidatesResponse, TierSummary};

/// Boundary wrapper around [`CandidateRanker`]
///
/// Validates incoming requests and wraps the engine output in a response
/// envelope. The ranked sequence itself is a pure function of the request.
#[derive(Debug, Clone, Default)]
pub struct RankingService {
    ranker: CandidateRanker,
}

impl RankingService {
    pub fn new(ranker: CandidateRanker) -> Self {
        Self { ranker }
    }

    pub fn ranker(&self) -> &CandidateRanker {
        &self.ranker
    }

    /// Parse a JSON request document and rank it
    pub fn rank_json(&self, body: &str) -> Result<RankCandidatesResponse, AppError> {
        let request: RankCandidatesRequest = serde_json::from_str(body)?;
        self.rank(&request)
    }

    pub fn rank(&self, request: &RankCandidatesRequest) -> Result<RankCandidatesResponse, AppError> {
        if let Err(errors) = request.validate() {
            tracing::info!("Validation failed for ranking request: field_errors={:?}", errors);
            return Err(errors.into());
        }

        let run_id = uuid::Uuid::new_v4();
        tracing::info!(
            %run_id,
            "Ranking {} candidates (required skills: {})",
            request.candidates.len(),
            request.job.required_skills.len()
        );

        let mut candidates = self.ranker.rank_candidates(&request.candidates, &request.job);
        let summary = TierSummary::from_ranked(&candidates);
        let total_candidates = candidates.len();

        if let Some(limit) = request.limit {
            candidates.truncate(limit);
        }

        tracing::info!(
            %run_id,
            "Returning {} of {} ranked candidates (tiers: {}/{}/{}/{})",
            candidates.len(),
            total_candidates,
            summary.tier_1,
            summary.tier_2,
            summary.tier_3,
            summary.tier_4
        );

        Ok(RankCandidatesResponse {
            run_id,
            ranked_at: chrono::Utc::now(),
            total_candidates,
            summary,
            candidates,
        })
    }
}
