use super::domain::DiseaseCategory;
use serde::{Deserialize, Serialize};

/// Per-category score thresholds above which a preventive advisory is
/// emitted. Thresholds are strict: a score must exceed its threshold to
/// trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub vector_borne: f64,
    pub water_borne: f64,
    pub respiratory: f64,
    pub heat_related: f64,
    pub nutritional: f64,
    pub mental_health: f64,
    pub skin_and_eye: f64,
}

impl RecommendationThresholds {
    pub const fn for_category(&self, category: DiseaseCategory) -> f64 {
        match category {
            DiseaseCategory::VectorBorne => self.vector_borne,
            DiseaseCategory::WaterBorne => self.water_borne,
            DiseaseCategory::Respiratory => self.respiratory,
            DiseaseCategory::HeatRelated => self.heat_related,
            DiseaseCategory::Nutritional => self.nutritional,
            DiseaseCategory::MentalHealth => self.mental_health,
            DiseaseCategory::SkinAndEye => self.skin_and_eye,
        }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            vector_borne: 50.0,
            water_borne: 50.0,
            respiratory: 50.0,
            heat_related: 60.0,
            nutritional: 60.0,
            mental_health: 60.0,
            skin_and_eye: 55.0,
        }
    }
}

/// Tuning for the synthetic 14-day projection: a linear upward drift per
/// day plus a uniform daily jitter drawn from `[-daily_jitter, daily_jitter]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastTuning {
    pub drift_per_day: f64,
    pub daily_jitter: f64,
}

impl Default for ForecastTuning {
    fn default() -> Self {
        Self {
            drift_per_day: 0.4,
            daily_jitter: 6.0,
        }
    }
}

/// Full engine configuration applied to a batch of assessments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskEngineConfig {
    pub thresholds: RecommendationThresholds,
    pub forecast: ForecastTuning,
}
