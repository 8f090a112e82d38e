use climasense::risk::domain::{ClimateReading, DiseaseCategory, RiskLevel};
use climasense::risk::{RiskEngine, RiskEngineConfig};

fn reading(region: Option<&str>, temperature: f64, humidity: f64, rainfall: f64, aqi: f64, uv: f64) -> ClimateReading {
    ClimateReading {
        temperature,
        humidity,
        rainfall,
        air_quality_index: aqi,
        uv_index: uv,
        region: region.map(str::to_string),
        month: None,
    }
}

#[test]
fn assessment_bundles_every_output_for_one_reading() {
    let engine = RiskEngine::new(RiskEngineConfig::default());
    let monsoon = reading(Some("Visakhapatnam"), 32.0, 78.0, 180.0, 112.0, 7.0);

    let assessment = engine.assess(&monsoon);

    assert_eq!(assessment.region, "Visakhapatnam");
    assert_eq!(assessment.overall_score, 57.0);
    assert_eq!(assessment.overall_level, RiskLevel::High);
    assert_eq!(assessment.overall_color, "#f97316");
    assert_eq!(assessment.confidence, 85);
    assert_eq!(assessment.score_breakdown.len(), 5);
    assert_eq!(assessment.forecast.len(), 14);
    assert!(!assessment.recommendations.is_empty());

    assert_eq!(assessment.category_risks.len(), 7);
    assert_eq!(
        assessment.category_risks[0].category,
        DiseaseCategory::VectorBorne
    );
    assert!(assessment
        .category_risks
        .windows(2)
        .all(|pair| pair[0].risk_score >= pair[1].risk_score));

    let vector = &assessment.category_risks[0];
    assert_eq!(vector.risk_score, 97.2);
    assert_eq!(vector.risk_level, RiskLevel::Critical);
    assert_eq!(vector.confidence, 0.926);
    assert!(!vector.contributing_factors.is_empty());
}

#[test]
fn missing_region_reads_as_unknown() {
    let engine = RiskEngine::default();
    let anonymous = reading(None, 20.0, 40.0, 30.0, 50.0, 3.0);

    let assessment = engine.assess(&anonymous);
    assert_eq!(assessment.region, "Unknown");
}

#[test]
fn comparison_names_the_higher_risk_region() {
    let engine = RiskEngine::default();
    let calm = reading(Some("Shimla"), 20.0, 40.0, 30.0, 50.0, 3.0);
    let harsh = reading(Some("Delhi"), 40.0, 90.0, 250.0, 200.0, 10.0);

    let comparison = engine.compare(&calm, &harsh);

    assert_eq!(comparison.region_a.region, "Shimla");
    assert_eq!(comparison.region_b.region, "Delhi");
    assert_eq!(comparison.higher_risk_region, "Delhi");
    assert_eq!(comparison.score_difference, 100.0);
    assert!(comparison.note.contains("Delhi"));
    assert_eq!(comparison.region_a.category_scores.len(), 7);
    assert_eq!(comparison.region_b.category_scores.len(), 7);
}

#[test]
fn comparison_ties_resolve_to_region_b() {
    let engine = RiskEngine::default();
    let a = reading(Some("Alpha"), 32.0, 78.0, 180.0, 112.0, 7.0);
    let b = reading(Some("Beta"), 32.0, 78.0, 180.0, 112.0, 7.0);

    let comparison = engine.compare(&a, &b);

    assert_eq!(comparison.higher_risk_region, "Beta");
    assert_eq!(comparison.score_difference, 0.0);
}
