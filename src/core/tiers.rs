use crate::models::{RankedCandidate, ScoredCandidate, Tier, TierDistribution};

/// Band sizes for the first three tiers; TIER_4 takes the remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCounts {
    pub tier_1: usize,
    pub tier_2: usize,
    pub tier_3: usize,
}

/// Compute band sizes for `total` ranked candidates.
///
/// Counts are truncated, never rounded, and TIER_1 always holds at least
/// one candidate. Any shortfall against `total` falls through to TIER_4.
pub fn tier_counts(total: usize, distribution: &TierDistribution) -> TierCounts {
    let share = |proportion: f64| (total as f64 * proportion).floor() as usize;

    TierCounts {
        tier_1: share(distribution.tier_1).max(1),
        tier_2: share(distribution.tier_2),
        tier_3: share(distribution.tier_3),
    }
}

/// Tier for the candidate at `index` in the sorted sequence
#[inline]
pub fn tier_for_index(index: usize, counts: &TierCounts) -> Tier {
    if index < counts.tier_1 {
        Tier::Tier1
    } else if index < counts.tier_1 + counts.tier_2 {
        Tier::Tier2
    } else if index < counts.tier_1 + counts.tier_2 + counts.tier_3 {
        Tier::Tier3
    } else {
        Tier::Tier4
    }
}

/// Label an already sorted sequence with tiers in a single pass
pub fn assign_tiers(
    sorted: Vec<ScoredCandidate>,
    distribution: &TierDistribution,
) -> Vec<RankedCandidate> {
    let counts = tier_counts(sorted.len(), distribution);

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| candidate.into_ranked(tier_for_index(index, &counts)))
        .collect()
}
