use super::config::RecommendationThresholds;
use super::domain::{AdvisoryType, ClimateReading, DiseaseCategory, RiskLevel};
use super::scoring::{round1, CategoryScores};
use serde::Serialize;

/// Severity-tagged bundle of preventive actions tied to one category, or
/// the baseline block when nothing is elevated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBlock {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<DiseaseCategory>,
    pub risk_score: f64,
    pub severity: RiskLevel,
    pub advisory: AdvisoryType,
    pub actions: Vec<String>,
}

/// One advisory block per category whose score exceeds its threshold,
/// sorted worst-first. Never returns an empty list: when nothing triggers,
/// a single routine-care block of advisory type `success` is emitted.
pub fn derive_recommendations(
    scores: &CategoryScores,
    reading: &ClimateReading,
    thresholds: &RecommendationThresholds,
) -> Vec<RecommendationBlock> {
    let mut blocks: Vec<RecommendationBlock> = scores
        .entries_by_severity()
        .into_iter()
        .filter(|(category, score)| *score > thresholds.for_category(*category))
        .map(|(category, score)| RecommendationBlock {
            title: category.label(),
            category: Some(category),
            risk_score: round1(score),
            severity: RiskLevel::from_score(score),
            advisory: advisory_for(score),
            actions: category_actions(category, reading),
        })
        .collect();

    if blocks.is_empty() {
        blocks.push(baseline_block());
    }

    blocks
}

fn advisory_for(score: f64) -> AdvisoryType {
    if score >= 75.0 {
        AdvisoryType::Critical
    } else if score >= 50.0 {
        AdvisoryType::Warning
    } else {
        AdvisoryType::Info
    }
}

fn baseline_block() -> RecommendationBlock {
    RecommendationBlock {
        title: "General Health",
        category: None,
        risk_score: 10.0,
        severity: RiskLevel::Low,
        advisory: AdvisoryType::Success,
        actions: vec![
            "Continue regular handwashing hygiene".to_string(),
            "Stay hydrated and maintain balanced nutrition".to_string(),
            "Monitor local district health bulletins weekly".to_string(),
            "Schedule an annual comprehensive health checkup".to_string(),
        ],
    }
}

fn category_actions(category: DiseaseCategory, reading: &ClimateReading) -> Vec<String> {
    match category {
        DiseaseCategory::VectorBorne => vec![
            "Eliminate standing water in containers, tyres, and flowerpots".to_string(),
            "Use DEET-based mosquito repellent and reapply every 4 hours".to_string(),
            "Sleep under insecticide-treated nets".to_string(),
            format!(
                "Arrange {} at the nearest clinic if fever develops",
                if reading.rainfall > 150.0 {
                    "malaria prophylaxis"
                } else {
                    "fever screening"
                }
            ),
        ],
        DiseaseCategory::WaterBorne => vec![
            "Boil drinking water for at least 1 minute before use".to_string(),
            "Avoid raw street food, salads, and cut fruits".to_string(),
            "Wash hands with soap for 20 seconds before meals".to_string(),
            "Report contaminated water sources to the municipal authority".to_string(),
        ],
        DiseaseCategory::Respiratory => vec![
            format!("Wear an N95 mask outdoors (AQI is {})", reading.air_quality_index),
            "Avoid outdoor exercise during morning peak pollution hours".to_string(),
            "Keep bronchodilator inhalers accessible if asthmatic".to_string(),
            "Run indoor air purifiers where available".to_string(),
        ],
        DiseaseCategory::HeatRelated => vec![
            "Drink 3-4 litres of water per day and add electrolytes".to_string(),
            format!(
                "Avoid outdoor exposure between 11 AM and 4 PM (temperature is {}°C)",
                reading.temperature
            ),
            "Wear light-coloured, loose cotton clothing".to_string(),
            "Watch for heatstroke signs: hot dry skin, confusion, body temperature above 40°C"
                .to_string(),
        ],
        DiseaseCategory::Nutritional => vec![
            "Diversify diets with seasonal local vegetables".to_string(),
            "Monitor weight and growth parameters in children under five".to_string(),
            "Store food safely to prevent heat spoilage".to_string(),
            "Coordinate supplement distribution with community nutrition programmes".to_string(),
        ],
        DiseaseCategory::MentalHealth => vec![
            "Maintain social connections and check on elderly neighbours".to_string(),
            "Limit news consumption about climate disasters".to_string(),
            "Ensure adequate sleep in a cool, dark environment".to_string(),
            "Share local mental health helpline contacts widely".to_string(),
        ],
        DiseaseCategory::SkinAndEye => vec![
            format!(
                "Apply SPF 50+ broad-spectrum sunscreen (UV index is {})",
                reading.uv_index
            ),
            "Wear UV400-rated sunglasses outdoors".to_string(),
            "Use an umbrella or wide-brim hat in direct sun".to_string(),
            "Schedule an annual eye examination".to_string(),
        ],
    }
}

/// Human-readable climate drivers behind one category's score. Falls back
/// to a generic line when no single driver crosses its reporting gate.
pub fn contributing_factors(reading: &ClimateReading, category: DiseaseCategory) -> Vec<String> {
    let mut factors = Vec::new();
    match category {
        DiseaseCategory::VectorBorne => {
            if reading.humidity > 75.0 {
                factors.push(format!(
                    "High humidity ({}%) promotes mosquito breeding",
                    reading.humidity
                ));
            }
            if reading.temperature > 28.0 {
                factors.push(format!(
                    "Warm temperature ({}°C) accelerates pathogen lifecycle",
                    reading.temperature
                ));
            }
            if reading.rainfall > 120.0 {
                factors.push(format!(
                    "Heavy rainfall ({}mm) creates stagnant water pools",
                    reading.rainfall
                ));
            }
        }
        DiseaseCategory::WaterBorne => {
            if reading.rainfall > 150.0 {
                factors.push(format!(
                    "Excessive rainfall ({}mm) may cause flooding and contamination",
                    reading.rainfall
                ));
            }
            if reading.temperature > 30.0 {
                factors.push("High temperature promotes bacterial growth in water".to_string());
            }
        }
        DiseaseCategory::Respiratory => {
            if reading.air_quality_index > 100.0 {
                factors.push(format!(
                    "Poor air quality (AQI {}) irritates the respiratory tract",
                    reading.air_quality_index
                ));
            }
            if reading.uv_index > 7.0 {
                factors.push("High UV promotes ground-level ozone formation".to_string());
            }
        }
        DiseaseCategory::HeatRelated => {
            if reading.temperature > 35.0 {
                factors.push(format!(
                    "Extreme temperature ({}°C) causes thermal stress",
                    reading.temperature
                ));
            }
            if reading.uv_index > 8.0 {
                factors.push(format!(
                    "Intense UV ({}) increases radiant heat load",
                    reading.uv_index
                ));
            }
        }
        DiseaseCategory::SkinAndEye => {
            if reading.uv_index > 7.0 {
                factors.push(format!(
                    "High UV index ({}) raises skin and eye damage risk",
                    reading.uv_index
                ));
            }
            if reading.temperature > 32.0 {
                factors.push("Heat promotes inflammatory skin conditions".to_string());
            }
        }
        DiseaseCategory::Nutritional | DiseaseCategory::MentalHealth => {}
    }

    if factors.is_empty() {
        factors.push("Multiple moderate climate stressors present".to_string());
    }
    factors
}
