use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::RankingConfig;
use crate::error::RankingConfigError;
use crate::models::{RankingWeights, RecommendationThresholds, TierDistribution};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub tiers: TierConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl RankingSettings {
    /// Validate and freeze into the engine configuration
    pub fn to_ranking_config(&self) -> Result<RankingConfig, RankingConfigError> {
        RankingConfig::new(
            RankingWeights {
                skills_fit: self.weights.skills_fit,
                experience_relevance: self.weights.experience_relevance,
                cultural_fit: self.weights.cultural_fit,
                growth_potential: self.weights.growth_potential,
                location_match: self.weights.location_match,
            },
            TierDistribution {
                tier_1: self.tiers.tier_1,
                tier_2: self.tiers.tier_2,
                tier_3: self.tiers.tier_3,
                tier_4: self.tiers.tier_4,
            },
            RecommendationThresholds {
                shortlist: self.recommendation.shortlist,
                review: self.recommendation.review,
            },
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_fit_weight")]
    pub skills_fit: f64,
    #[serde(default = "default_experience_weight")]
    pub experience_relevance: f64,
    #[serde(default = "default_cultural_weight")]
    pub cultural_fit: f64,
    #[serde(default = "default_growth_weight")]
    pub growth_potential: f64,
    #[serde(default = "default_location_weight")]
    pub location_match: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills_fit: default_skills_fit_weight(),
            experience_relevance: default_experience_weight(),
            cultural_fit: default_cultural_weight(),
            growth_potential: default_growth_weight(),
            location_match: default_location_weight(),
        }
    }
}

fn default_skills_fit_weight() -> f64 { 0.35 }
fn default_experience_weight() -> f64 { 0.25 }
fn default_cultural_weight() -> f64 { 0.15 }
fn default_growth_weight() -> f64 { 0.15 }
fn default_location_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    #[serde(default = "default_tier_1")]
    pub tier_1: f64,
    #[serde(default = "default_tier_2")]
    pub tier_2: f64,
    #[serde(default = "default_tier_3")]
    pub tier_3: f64,
    #[serde(default = "default_tier_4")]
    pub tier_4: f64,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            tier_1: default_tier_1(),
            tier_2: default_tier_2(),
            tier_3: default_tier_3(),
            tier_4: default_tier_4(),
        }
    }
}

fn default_tier_1() -> f64 { 0.10 }
fn default_tier_2() -> f64 { 0.20 }
fn default_tier_3() -> f64 { 0.30 }
fn default_tier_4() -> f64 { 0.40 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_shortlist_threshold")]
    pub shortlist: f64,
    #[serde(default = "default_review_threshold")]
    pub review: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            shortlist: default_shortlist_threshold(),
            review: default_review_threshold(),
        }
    }
}

fn default_shortlist_threshold() -> f64 { 75.0 }
fn default_review_threshold() -> f64 { 50.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT_RANK)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT_RANK__RANKING__WEIGHTS__SKILLS_FIT -> ranking.weights.skills_fit
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TALENT_RANK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
