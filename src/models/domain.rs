use serde::{Deserialize, Serialize};

/// Applicant profile as supplied by the upstream extraction step.
///
/// Every attribute is optional on the wire. Missing numbers read as zero,
/// missing collections as empty and missing flags as `false`.
///
/// Two read-views coexist: `skills` / `total_years_experience` feed the
/// factor evaluators, while `technical_skills` / `years_experience` feed the
/// strengths and experience-gap pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub total_years_experience: f64,
    #[serde(alias = "relevant_years_experience")]
    pub relevant_experience_years: f64,
    pub stated_values: Vec<String>,
    pub communication_style: Option<String>,
    pub continuous_learning: bool,
    pub career_progression_rate: f64,
    pub advanced_certifications: bool,
    pub location: Option<String>,

    // Explanation view
    pub technical_skills: Vec<String>,
    pub years_experience: f64,
    pub leadership_experience: bool,
    pub track_record_success: bool,
}

/// Requirements and preferences of the role being filled
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobProfile {
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    #[serde(alias = "required_years_experience")]
    pub years_experience_required: f64,
    pub company_values: Vec<String>,
    pub team_communication_style: Option<String>,
    pub location: Option<String>,
    pub remote_work_allowed: bool,
    pub primary_technical_skill: Option<String>,
}

/// Per-factor breakdown, each value in [0, 100] rounded to 2 decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub skills_fit: f64,
    pub experience_relevance: f64,
    pub cultural_fit: f64,
    pub growth_potential: f64,
    pub location_match: f64,
}

/// Ordinal rank bucket, assigned by position in the sorted list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "TIER_1")]
    Tier1,
    #[serde(rename = "TIER_2")]
    Tier2,
    #[serde(rename = "TIER_3")]
    Tier3,
    #[serde(rename = "TIER_4")]
    Tier4,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Tier1 => "TIER_1",
            Tier::Tier2 => "TIER_2",
            Tier::Tier3 => "TIER_3",
            Tier::Tier4 => "TIER_4",
        }
    }

    /// Recruiter-facing meaning of the tier
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Interview Immediately",
            Tier::Tier2 => "Strong Candidate",
            Tier::Tier3 => "Consider for Interview",
            Tier::Tier4 => "Pool for Future Roles",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

/// Score-threshold decision, independent of the positional tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Shortlist,
    Review,
    Reject,
}

impl Recommendation {
    pub fn from_score(total_score: f64, thresholds: &RecommendationThresholds) -> Self {
        if total_score >= thresholds.shortlist {
            Recommendation::Shortlist
        } else if total_score >= thresholds.review {
            Recommendation::Review
        } else {
            Recommendation::Reject
        }
    }
}

/// Aggregated candidate before tier assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate_id: String,
    pub name: String,
    pub total_score: f64,
    pub factor_scores: FactorScores,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub interview_questions: Vec<String>,
    pub recommendation: Recommendation,
}

impl ScoredCandidate {
    pub fn into_ranked(self, tier: Tier) -> RankedCandidate {
        RankedCandidate {
            candidate_id: self.candidate_id,
            name: self.name,
            total_score: self.total_score,
            factor_scores: self.factor_scores,
            strengths: self.strengths,
            gaps: self.gaps,
            interview_questions: self.interview_questions,
            recommendation: self.recommendation,
            tier,
        }
    }
}

/// Final output record, one per input candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: String,
    pub name: String,
    pub total_score: f64,
    pub factor_scores: FactorScores,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub interview_questions: Vec<String>,
    pub recommendation: Recommendation,
    pub tier: Tier,
}

/// Factor weights. Must sum to 1.0 to keep the total in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub skills_fit: f64,
    pub experience_relevance: f64,
    pub cultural_fit: f64,
    pub growth_potential: f64,
    pub location_match: f64,
}

impl RankingWeights {
    pub fn sum(&self) -> f64 {
        self.skills_fit
            + self.experience_relevance
            + self.cultural_fit
            + self.growth_potential
            + self.location_match
    }

    pub(crate) fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("skills_fit", self.skills_fit),
            ("experience_relevance", self.experience_relevance),
            ("cultural_fit", self.cultural_fit),
            ("growth_potential", self.growth_potential),
            ("location_match", self.location_match),
        ]
    }
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            skills_fit: 0.35,
            experience_relevance: 0.25,
            cultural_fit: 0.15,
            growth_potential: 0.15,
            location_match: 0.10,
        }
    }
}

/// Share of the ranked list given to each tier.
///
/// `tier_4` is informational: TIER_4 always takes whatever the first three
/// bands leave over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierDistribution {
    pub tier_1: f64,
    pub tier_2: f64,
    pub tier_3: f64,
    pub tier_4: f64,
}

impl TierDistribution {
    pub fn sum(&self) -> f64 {
        self.tier_1 + self.tier_2 + self.tier_3 + self.tier_4
    }

    pub(crate) fn named(&self) -> [(Tier, f64); 4] {
        [
            (Tier::Tier1, self.tier_1),
            (Tier::Tier2, self.tier_2),
            (Tier::Tier3, self.tier_3),
            (Tier::Tier4, self.tier_4),
        ]
    }
}

impl Default for TierDistribution {
    fn default() -> Self {
        Self {
            tier_1: 0.10,
            tier_2: 0.20,
            tier_3: 0.30,
            tier_4: 0.40,
        }
    }
}

/// Total-score cut-offs for [`Recommendation`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub shortlist: f64,
    pub review: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            shortlist: 75.0,
            review: 50.0,
        }
    }
}
