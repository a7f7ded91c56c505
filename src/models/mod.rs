// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, FactorScores, JobProfile, RankedCandidate, RankingWeights, Recommendation,
    RecommendationThresholds, ScoredCandidate, Tier, TierDistribution,
};
pub use requests::RankCandidatesRequest;
pub use responses::{ErrorResponse, RankCandidatesResponse, TierSummary};
