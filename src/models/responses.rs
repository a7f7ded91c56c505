use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedCandidate, Tier};

/// Response for a ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub run_id: uuid::Uuid,
    pub ranked_at: chrono::DateTime<chrono::Utc>,
    pub total_candidates: usize,
    pub summary: TierSummary,
    pub candidates: Vec<RankedCandidate>,
}

/// Number of candidates placed in each tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier_1: usize,
    pub tier_2: usize,
    pub tier_3: usize,
    pub tier_4: usize,
}

impl TierSummary {
    pub fn from_ranked(ranked: &[RankedCandidate]) -> Self {
        ranked.iter().fold(Self::default(), |mut summary, candidate| {
            match candidate.tier {
                Tier::Tier1 => summary.tier_1 += 1,
                Tier::Tier2 => summary.tier_2 += 1,
                Tier::Tier3 => summary.tier_3 += 1,
                Tier::Tier4 => summary.tier_4 += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.tier_1 + self.tier_2 + self.tier_3 + self.tier_4
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
