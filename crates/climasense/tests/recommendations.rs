use climasense::risk::domain::{AdvisoryType, ClimateReading, DiseaseCategory, RiskLevel};
use climasense::risk::{
    category_scores, contributing_factors, derive_recommendations, RecommendationThresholds,
};

fn reading(temperature: f64, humidity: f64, rainfall: f64, aqi: f64, uv_index: f64) -> ClimateReading {
    ClimateReading {
        temperature,
        humidity,
        rainfall,
        air_quality_index: aqi,
        uv_index,
        region: None,
        month: None,
    }
}

#[test]
fn elevated_categories_emit_blocks_sorted_worst_first() {
    let sample = reading(32.0, 78.0, 180.0, 112.0, 7.0);
    let scores = category_scores(&sample);
    let blocks =
        derive_recommendations(&scores, &sample, &RecommendationThresholds::default());

    assert_eq!(blocks.len(), 5);
    assert_eq!(blocks[0].category, Some(DiseaseCategory::VectorBorne));
    assert!(blocks
        .windows(2)
        .all(|pair| pair[0].risk_score >= pair[1].risk_score));

    let skin = blocks
        .iter()
        .find(|block| block.category == Some(DiseaseCategory::SkinAndEye))
        .expect("skin advisory present");
    assert_eq!(skin.advisory, AdvisoryType::Warning);

    let critical_count = blocks
        .iter()
        .filter(|block| block.advisory == AdvisoryType::Critical)
        .count();
    assert_eq!(critical_count, 4);
}

#[test]
fn action_text_interpolates_live_reading_values() {
    let sample = reading(32.0, 78.0, 180.0, 112.0, 7.0);
    let scores = category_scores(&sample);
    let blocks =
        derive_recommendations(&scores, &sample, &RecommendationThresholds::default());

    let respiratory = blocks
        .iter()
        .find(|block| block.category == Some(DiseaseCategory::Respiratory))
        .expect("respiratory advisory present");
    assert!(respiratory
        .actions
        .iter()
        .any(|action| action.contains("AQI is 112")));

    let vector = blocks
        .iter()
        .find(|block| block.category == Some(DiseaseCategory::VectorBorne))
        .expect("vector advisory present");
    assert!(vector
        .actions
        .iter()
        .any(|action| action.contains("malaria prophylaxis")));
}

#[test]
fn every_block_carries_three_to_four_actions() {
    let sample = reading(40.0, 90.0, 250.0, 200.0, 10.0);
    let scores = category_scores(&sample);
    let blocks =
        derive_recommendations(&scores, &sample, &RecommendationThresholds::default());

    assert!(!blocks.is_empty());
    for block in &blocks {
        assert!((3..=4).contains(&block.actions.len()));
    }
}

#[test]
fn calm_reading_falls_back_to_single_routine_block() {
    let sample = reading(20.0, 40.0, 30.0, 50.0, 3.0);
    let scores = category_scores(&sample);
    let blocks =
        derive_recommendations(&scores, &sample, &RecommendationThresholds::default());

    assert_eq!(blocks.len(), 1);
    let baseline = &blocks[0];
    assert_eq!(baseline.title, "General Health");
    assert_eq!(baseline.category, None);
    assert_eq!(baseline.risk_score, 10.0);
    assert_eq!(baseline.severity, RiskLevel::Low);
    assert_eq!(baseline.advisory, AdvisoryType::Success);
    assert_eq!(baseline.actions.len(), 4);
}

#[test]
fn thresholds_are_strict_boundaries() {
    // Heat-related lands exactly on its threshold of 60 and must not
    // trigger.
    let at_threshold = reading(40.0, 0.0, 60.0, 0.0, 0.0);
    let scores = category_scores(&at_threshold);
    assert_eq!(scores.get(DiseaseCategory::HeatRelated), 60.0);

    let blocks =
        derive_recommendations(&scores, &at_threshold, &RecommendationThresholds::default());
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].advisory, AdvisoryType::Success);

    // A nudge above the threshold flips it into a dedicated advisory.
    let above_threshold = reading(40.0, 0.0, 60.0, 0.0, 0.5);
    let scores = category_scores(&above_threshold);
    let blocks = derive_recommendations(
        &scores,
        &above_threshold,
        &RecommendationThresholds::default(),
    );
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].category, Some(DiseaseCategory::HeatRelated));
    assert_eq!(blocks[0].advisory, AdvisoryType::Warning);
}

#[test]
fn contributing_factors_report_threshold_crossings() {
    let sample = reading(32.0, 78.0, 180.0, 112.0, 7.0);

    let vector = contributing_factors(&sample, DiseaseCategory::VectorBorne);
    assert!(vector.iter().any(|factor| factor.contains("humidity")));
    assert!(vector.iter().any(|factor| factor.contains("rainfall")));

    let nutritional = contributing_factors(&sample, DiseaseCategory::Nutritional);
    assert_eq!(
        nutritional,
        vec!["Multiple moderate climate stressors present".to_string()]
    );
}
