use thiserror::Error;

/// Errors raised while validating ranking configuration
#[derive(Debug, Error, PartialEq)]
pub enum RankingConfigError {
    #[error("weight for {factor} must be a finite non-negative number, got {value}")]
    InvalidWeight { factor: &'static str, value: f64 },

    #[error("ranking weights must sum to 1.0, got {sum}")]
    WeightsSum { sum: f64 },

    #[error("proportion for {tier} must be within [0, 1], got {value}")]
    InvalidTierProportion { tier: &'static str, value: f64 },

    #[error("tier proportions must sum to at most 1.0, got {sum}")]
    TierDistributionSum { sum: f64 },

    #[error("recommendation thresholds must lie in [0, 100] with shortlist >= review (shortlist: {shortlist}, review: {review})")]
    InvalidThresholds { shortlist: f64, review: f64 },
}

/// Errors surfaced at the process boundary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid ranking configuration: {0}")]
    RankingConfig(#[from] RankingConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::RankingConfig(_) => "invalid_ranking_config",
            AppError::Validation(_) => "validation_failed",
            AppError::Json(_) => "invalid_json",
            AppError::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::from(RankingConfigError::WeightsSum { sum: 0.9 });
        assert_eq!(err.code(), "invalid_ranking_config");
        assert!(err.to_string().contains("0.9"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::from(json_err).code(), "invalid_json");
    }
}
