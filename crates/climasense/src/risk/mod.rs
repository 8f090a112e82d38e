pub mod batch;
pub mod catalog;
pub mod domain;
pub mod router;

mod assessment;
mod config;
mod forecast;
mod recommend;
mod scoring;

pub use assessment::{
    CategoryRiskView, CategoryScoreEntry, ComparisonSide, RegionComparison, RiskAssessment,
    RiskEngine,
};
pub use config::{ForecastTuning, RecommendationThresholds, RiskEngineConfig};
pub use forecast::{synthesize_forecast, ForecastDay, FORECAST_HORIZON_DAYS};
pub use recommend::{contributing_factors, derive_recommendations, RecommendationBlock};
pub use scoring::{
    category_scores, confidence_for, overall_breakdown, overall_risk_score, BandContribution,
    CategoryScores,
};
