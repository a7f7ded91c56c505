use crate::core::ranking_config::RankingConfig;
use crate::core::scoring::score_candidate;
use crate::core::tiers::assign_tiers;
use crate::models::{CandidateProfile, JobProfile, RankedCandidate, ScoredCandidate};

/// Main ranking orchestrator
///
/// # Pipeline Stages
/// 1. Factor evaluation and aggregation (per candidate)
/// 2. Stable sort by total score, descending
/// 3. Positional tier assignment
///
/// Stage 1 is independent per candidate. Stages 2 and 3 need the complete
/// scored collection.
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker {
    config: RankingConfig,
}

impl CandidateRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self {
            config: RankingConfig::default(),
        }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score a single candidate without ranking it
    pub fn score(&self, candidate: &CandidateProfile, job: &JobProfile) -> ScoredCandidate {
        score_candidate(candidate, job, &self.config)
    }

    /// Rank candidates against a job profile
    ///
    /// # Arguments
    /// * `candidates` - Candidate profiles, in submission order
    /// * `job` - The job being filled
    ///
    /// # Returns
    /// One record per candidate, highest total score first, each labelled
    /// with a tier. Equal scores keep their submission order.
    pub fn rank_candidates(
        &self,
        candidates: &[CandidateProfile],
        job: &JobProfile,
    ) -> Vec<RankedCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| self.score(candidate, job))
            .collect();

        tracing::debug!("Scored {} candidates", scored.len());

        // sort_by is stable
        scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        let ranked = assign_tiers(scored, self.config.tiers());

        if let Some(top) = ranked.first() {
            tracing::debug!(
                "Top candidate {} scored {:.2} ({})",
                top.candidate_id,
                top.total_score,
                top.tier
            );
        }

        ranked
    }
}
