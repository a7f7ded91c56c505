// Core algorithm exports
pub mod factors;
pub mod insights;
pub mod ranker;
pub mod ranking_config;
pub mod scoring;
pub mod tiers;

pub use factors::{cultural_alignment, experience_relevance, growth_potential, location_match, skills_fit};
pub use insights::{identify_gaps, identify_strengths, interview_questions};
pub use ranker::CandidateRanker;
pub use ranking_config::RankingConfig;
pub use scoring::{evaluate_factors, score_candidate};
pub use tiers::{assign_tiers, tier_counts, TierCounts};
