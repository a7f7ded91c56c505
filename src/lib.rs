//! Talent Rank - deterministic multi-factor candidate ranking
//!
//! This library scores job candidates against a job profile on five weighted
//! factors, ranks them by total score and partitions the ranking into four
//! fixed-proportion tiers. Each ranked candidate carries strengths, gaps and
//! templated interview questions.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CandidateRanker, RankingConfig};
pub use error::{AppError, RankingConfigError};
pub use models::{
    CandidateProfile, JobProfile, RankCandidatesRequest, RankCandidatesResponse, RankedCandidate,
    Tier,
};
pub use services::RankingService;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let ranker = CandidateRanker::with_default_config();
        let ranked = ranker.rank_candidates(&[CandidateProfile::default()], &JobProfile::default());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].tier, Tier::Tier1);
    }
}
