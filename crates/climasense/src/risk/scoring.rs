use super::domain::{ClimateReading, DiseaseCategory};
use serde::Serialize;
use std::collections::HashMap;

/// Discrete contribution of one climate dimension to the overall score,
/// allowing transparent audits of how a score was assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandContribution {
    pub dimension: &'static str,
    pub value: f64,
    pub points: f64,
    pub note: String,
}

/// Per-dimension banded contributions plus the capped overall score.
///
/// Each dimension is checked highest band first; the first matching band
/// wins. Comparisons are strict.
pub fn overall_breakdown(reading: &ClimateReading) -> (Vec<BandContribution>, f64) {
    let mut contributions = Vec::with_capacity(5);

    let temperature_points = if reading.temperature > 35.0 {
        25.0
    } else if reading.temperature > 30.0 {
        15.0
    } else if reading.temperature > 25.0 {
        8.0
    } else {
        0.0
    };
    contributions.push(BandContribution {
        dimension: "temperature",
        value: reading.temperature,
        points: temperature_points,
        note: if temperature_points > 0.0 {
            format!("{}°C above comfort bands", reading.temperature)
        } else {
            "within baseline band".to_string()
        },
    });

    let humidity_points = if reading.humidity > 80.0 {
        20.0
    } else if reading.humidity > 65.0 {
        12.0
    } else {
        0.0
    };
    contributions.push(BandContribution {
        dimension: "humidity",
        value: reading.humidity,
        points: humidity_points,
        note: if humidity_points > 0.0 {
            format!("{}% sustained humidity", reading.humidity)
        } else {
            "within baseline band".to_string()
        },
    });

    let rainfall_points = if reading.rainfall > 200.0 {
        20.0
    } else if reading.rainfall > 100.0 {
        10.0
    } else {
        0.0
    };
    contributions.push(BandContribution {
        dimension: "rainfall",
        value: reading.rainfall,
        points: rainfall_points,
        note: if rainfall_points > 0.0 {
            format!("{}mm over the trailing week", reading.rainfall)
        } else {
            "within baseline band".to_string()
        },
    });

    let aqi_points = if reading.air_quality_index > 150.0 {
        20.0
    } else if reading.air_quality_index > 100.0 {
        12.0
    } else {
        0.0
    };
    contributions.push(BandContribution {
        dimension: "aqi",
        value: reading.air_quality_index,
        points: aqi_points,
        note: if aqi_points > 0.0 {
            format!("AQI {} exceeds healthy range", reading.air_quality_index)
        } else {
            "within baseline band".to_string()
        },
    });

    let uv_points = if reading.uv_index > 8.0 {
        15.0
    } else if reading.uv_index > 5.0 {
        8.0
    } else {
        0.0
    };
    contributions.push(BandContribution {
        dimension: "uv_index",
        value: reading.uv_index,
        points: uv_points,
        note: if uv_points > 0.0 {
            format!("UV index {} elevated", reading.uv_index)
        } else {
            "within baseline band".to_string()
        },
    });

    let total: f64 = contributions.iter().map(|band| band.points).sum();
    (contributions, total.min(100.0))
}

/// Aggregate 0-100 severity for a reading.
pub fn overall_risk_score(reading: &ClimateReading) -> f64 {
    overall_breakdown(reading).1
}

/// Cosmetic confidence figure displayed next to the overall score; it has
/// no statistical basis.
pub fn confidence_for(overall_score: f64) -> u8 {
    (78.0 + 0.12 * overall_score).round() as u8
}

/// Per-category severity estimates, keyed by `DiseaseCategory`.
///
/// Always contains all seven categories. A lookup for a key the map does
/// not hold reads as 0, so a partial map can never trigger an advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    scores: HashMap<DiseaseCategory, f64>,
}

impl CategoryScores {
    pub fn get(&self, category: DiseaseCategory) -> f64 {
        self.scores.get(&category).copied().unwrap_or(0.0)
    }

    /// Entries in the catalog's fixed category order.
    pub fn ordered_entries(&self) -> Vec<(DiseaseCategory, f64)> {
        DiseaseCategory::ordered()
            .into_iter()
            .map(|category| (category, self.get(category)))
            .collect()
    }

    /// Entries sorted worst-first.
    pub fn entries_by_severity(&self) -> Vec<(DiseaseCategory, f64)> {
        let mut entries = self.ordered_entries();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

/// Independent weighted linear combinations of the five inputs, each capped
/// at 100. There is no floor: contrived negative inputs can push a category
/// below zero, matching the reference behavior.
pub fn category_scores(reading: &ClimateReading) -> CategoryScores {
    let mut scores = HashMap::with_capacity(7);
    for category in DiseaseCategory::ordered() {
        scores.insert(category, category_score(reading, category));
    }
    CategoryScores { scores }
}

fn category_score(reading: &ClimateReading, category: DiseaseCategory) -> f64 {
    let raw = match category {
        DiseaseCategory::VectorBorne => {
            let warmth_bonus = if reading.temperature > 28.0 { 30.0 } else { 10.0 };
            0.4 * reading.humidity + 0.2 * reading.rainfall + warmth_bonus
        }
        DiseaseCategory::WaterBorne => {
            0.35 * reading.rainfall + 0.3 * reading.temperature + 0.15 * reading.humidity
        }
        DiseaseCategory::Respiratory => {
            let damp_bonus = if reading.humidity > 70.0 { 20.0 } else { 5.0 };
            0.5 * reading.air_quality_index + 0.2 * reading.uv_index + damp_bonus
        }
        DiseaseCategory::HeatRelated => {
            1.5 * reading.temperature + 0.3 * reading.humidity + 1.2 * reading.uv_index
        }
        DiseaseCategory::Nutritional => {
            let drought_bonus = if reading.rainfall < 50.0 { 30.0 } else { 5.0 };
            0.4 * reading.temperature + drought_bonus + 15.0
        }
        DiseaseCategory::MentalHealth => {
            let heat_bonus = if reading.temperature > 32.0 { 25.0 } else { 10.0 };
            heat_bonus + 0.3 * reading.air_quality_index + 15.0
        }
        DiseaseCategory::SkinAndEye => {
            5.0 * reading.uv_index + 0.5 * reading.temperature + 10.0
        }
    };
    raw.min(100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
