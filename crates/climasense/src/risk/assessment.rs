use super::config::RiskEngineConfig;
use super::domain::{ClimateReading, DiseaseCategory, RiskLevel};
use super::forecast::{synthesize_forecast, ForecastDay};
use super::recommend::{contributing_factors, derive_recommendations, RecommendationBlock};
use super::scoring::{
    category_scores, confidence_for, overall_breakdown, round1, BandContribution,
};
use serde::Serialize;

/// Stateless engine applying one configuration to every assessment.
///
/// Every method is a pure function of its inputs, except the forecast
/// portion of [`RiskEngine::assess`], which draws unseeded randomness.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskEngineConfig,
}

impl RiskEngine {
    pub fn new(config: RiskEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiskEngineConfig {
        &self.config
    }

    /// Full assessment bundle for one reading: overall score and breakdown,
    /// per-category risks worst-first, advisories, and the 14-day
    /// projection.
    pub fn assess(&self, reading: &ClimateReading) -> RiskAssessment {
        let (score_breakdown, overall_score) = overall_breakdown(reading);
        let overall_level = RiskLevel::from_score(overall_score);
        let scores = category_scores(reading);

        let category_risks = scores
            .entries_by_severity()
            .into_iter()
            .map(|(category, score)| CategoryRiskView {
                category,
                score_key: category.score_key(),
                label: category.label(),
                risk_score: round1(score),
                risk_level: RiskLevel::from_score(score),
                risk_level_label: RiskLevel::from_score(score).label(),
                confidence: category_confidence(score),
                contributing_factors: contributing_factors(reading, category),
            })
            .collect();

        let recommendations = derive_recommendations(&scores, reading, &self.config.thresholds);
        let forecast = synthesize_forecast(overall_score, &self.config.forecast);

        RiskAssessment {
            region: reading.region_label().to_string(),
            overall_score: round1(overall_score),
            overall_level,
            overall_label: overall_level.label(),
            overall_color: overall_level.color_hex(),
            confidence: confidence_for(overall_score),
            score_breakdown,
            category_risks,
            recommendations,
            forecast,
        }
    }

    /// Side-by-side comparison of two readings. On a score tie, region B is
    /// reported as the higher-risk side, matching the reference behavior.
    pub fn compare(&self, region_a: &ClimateReading, region_b: &ClimateReading) -> RegionComparison {
        let side_a = ComparisonSide::build(region_a);
        let side_b = ComparisonSide::build(region_b);

        let a_wins = side_a.overall_score > side_b.overall_score;
        let higher_risk_region = if a_wins {
            side_a.region.clone()
        } else {
            side_b.region.clone()
        };
        let note = format!(
            "{higher_risk_region} carries the higher climate-health risk and should receive priority intervention"
        );
        let score_difference = round1((side_a.overall_score - side_b.overall_score).abs());

        RegionComparison {
            region_a: side_a,
            region_b: side_b,
            higher_risk_region,
            score_difference,
            note,
        }
    }
}

fn category_confidence(score: f64) -> f64 {
    let raw = 0.78 + (score / 100.0) * 0.15;
    (raw * 1000.0).round() / 1000.0
}

/// One category's share of an assessment, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRiskView {
    pub category: DiseaseCategory,
    pub score_key: &'static str,
    pub label: &'static str,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    pub confidence: f64,
    pub contributing_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub region: String,
    pub overall_score: f64,
    pub overall_level: RiskLevel,
    pub overall_label: &'static str,
    pub overall_color: &'static str,
    pub confidence: u8,
    pub score_breakdown: Vec<BandContribution>,
    pub category_risks: Vec<CategoryRiskView>,
    pub recommendations: Vec<RecommendationBlock>,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScoreEntry {
    pub score_key: &'static str,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSide {
    pub region: String,
    pub overall_score: f64,
    pub overall_level: RiskLevel,
    pub overall_label: &'static str,
    pub category_scores: Vec<CategoryScoreEntry>,
}

impl ComparisonSide {
    fn build(reading: &ClimateReading) -> Self {
        let overall_score = super::scoring::overall_risk_score(reading);
        let overall_level = RiskLevel::from_score(overall_score);
        let category_scores = category_scores(reading)
            .ordered_entries()
            .into_iter()
            .map(|(category, score)| CategoryScoreEntry {
                score_key: category.score_key(),
                risk_score: round1(score),
            })
            .collect();

        Self {
            region: reading.region_label().to_string(),
            overall_score: round1(overall_score),
            overall_level,
            overall_label: overall_level.label(),
            category_scores,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionComparison {
    pub region_a: ComparisonSide,
    pub region_b: ComparisonSide,
    pub higher_risk_region: String,
    pub score_difference: f64,
    pub note: String,
}
