use crate::error::RankingConfigError;
use crate::models::{RankingWeights, RecommendationThresholds, TierDistribution};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Immutable, validated configuration for one ranking engine.
///
/// Built once via [`RankingConfig::new`]; every ranking run through the
/// engine reads from the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    weights: RankingWeights,
    tiers: TierDistribution,
    thresholds: RecommendationThresholds,
}

impl RankingConfig {
    pub fn new(
        weights: RankingWeights,
        tiers: TierDistribution,
        thresholds: RecommendationThresholds,
    ) -> Result<Self, RankingConfigError> {
        validate_weights(&weights)?;
        validate_tiers(&tiers)?;
        validate_thresholds(&thresholds)?;

        Ok(Self {
            weights,
            tiers,
            thresholds,
        })
    }

    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    pub fn tiers(&self) -> &TierDistribution {
        &self.tiers
    }

    pub fn thresholds(&self) -> &RecommendationThresholds {
        &self.thresholds
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: RankingWeights::default(),
            tiers: TierDistribution::default(),
            thresholds: RecommendationThresholds::default(),
        }
    }
}

fn validate_weights(weights: &RankingWeights) -> Result<(), RankingConfigError> {
    for (factor, value) in weights.named() {
        if !value.is_finite() || value < 0.0 {
            return Err(RankingConfigError::InvalidWeight { factor, value });
        }
    }

    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(RankingConfigError::WeightsSum { sum });
    }

    Ok(())
}

fn validate_tiers(tiers: &TierDistribution) -> Result<(), RankingConfigError> {
    for (tier, value) in tiers.named() {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(RankingConfigError::InvalidTierProportion {
                tier: tier.label(),
                value,
            });
        }
    }

    let sum = tiers.sum();
    if sum > 1.0 + WEIGHT_TOLERANCE {
        return Err(RankingConfigError::TierDistributionSum { sum });
    }

    Ok(())
}

fn validate_thresholds(thresholds: &RecommendationThresholds) -> Result<(), RankingConfigError> {
    let in_range = |value: f64| value.is_finite() && (0.0..=100.0).contains(&value);

    if !in_range(thresholds.shortlist)
        || !in_range(thresholds.review)
        || thresholds.shortlist < thresholds.review
    {
        return Err(RankingConfigError::InvalidThresholds {
            shortlist: thresholds.shortlist,
            review: thresholds.review,
        });
    }

    Ok(())
}
