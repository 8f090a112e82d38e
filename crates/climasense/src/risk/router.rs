use std::io::Cursor;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assessment::{RegionComparison, RiskAssessment, RiskEngine};
use super::batch::{score_csv_reader, BatchOutcome};
use super::catalog::{
    disease_catalog, monitored_regions, seasonal_baselines, CategoryDescriptor, Region,
    SeasonalSeries, MONTH_LABELS,
};
use super::domain::ClimateReading;
use crate::error::AppError;

/// Router builder exposing the engine's versioned HTTP operations.
pub fn risk_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/api/v1/risk/assessments", post(assess_handler))
        .route("/api/v1/risk/comparisons", post(compare_handler))
        .route("/api/v1/risk/batch", post(batch_handler))
        .route("/api/v1/risk/categories", get(categories_handler))
        .route("/api/v1/risk/regions", get(regions_handler))
        .route("/api/v1/risk/seasonal-outlook", get(seasonal_handler))
        .with_state(engine)
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub region_a: ClimateReading,
    pub region_b: ClimateReading,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub comparison: RegionComparison,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub csv: String,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Serialize)]
pub struct SeasonalOutlookResponse {
    pub months: [&'static str; 12],
    pub series: Vec<SeasonalSeries>,
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<RiskEngine>>,
    Json(reading): Json<ClimateReading>,
) -> Json<AssessmentResponse> {
    let assessment = engine.assess(&reading);
    Json(AssessmentResponse {
        generated_at: Utc::now(),
        assessment,
    })
}

pub(crate) async fn compare_handler(
    State(engine): State<Arc<RiskEngine>>,
    Json(payload): Json<ComparisonRequest>,
) -> Json<ComparisonResponse> {
    let comparison = engine.compare(&payload.region_a, &payload.region_b);
    Json(ComparisonResponse {
        generated_at: Utc::now(),
        comparison,
    })
}

pub(crate) async fn batch_handler(
    State(_engine): State<Arc<RiskEngine>>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let outcome = score_csv_reader(reader)?;
    Ok(Json(BatchResponse {
        generated_at: Utc::now(),
        outcome,
    }))
}

pub(crate) async fn categories_handler() -> Json<Vec<CategoryDescriptor>> {
    Json(disease_catalog())
}

pub(crate) async fn regions_handler() -> Json<Vec<Region>> {
    Json(monitored_regions())
}

pub(crate) async fn seasonal_handler() -> Json<SeasonalOutlookResponse> {
    Json(SeasonalOutlookResponse {
        months: MONTH_LABELS,
        series: seasonal_baselines(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::domain::{AdvisoryType, RiskLevel};

    fn engine() -> Arc<RiskEngine> {
        Arc::new(RiskEngine::default())
    }

    fn monsoon_reading() -> ClimateReading {
        ClimateReading {
            temperature: 32.0,
            humidity: 78.0,
            rainfall: 180.0,
            air_quality_index: 112.0,
            uv_index: 7.0,
            region: Some("Visakhapatnam".to_string()),
            month: Some(10),
        }
    }

    fn temperate_reading() -> ClimateReading {
        ClimateReading {
            temperature: 20.0,
            humidity: 40.0,
            rainfall: 30.0,
            air_quality_index: 50.0,
            uv_index: 3.0,
            region: Some("Hill Station".to_string()),
            month: None,
        }
    }

    #[tokio::test]
    async fn assess_handler_returns_full_bundle() {
        let Json(body) = assess_handler(State(engine()), Json(monsoon_reading())).await;

        assert_eq!(body.assessment.overall_score, 57.0);
        assert_eq!(body.assessment.overall_level, RiskLevel::High);
        assert_eq!(body.assessment.category_risks.len(), 7);
        assert_eq!(body.assessment.forecast.len(), 14);
        assert!(!body.assessment.recommendations.is_empty());
    }

    #[tokio::test]
    async fn assess_handler_emits_baseline_block_for_calm_reading() {
        let Json(body) = assess_handler(State(engine()), Json(temperate_reading())).await;

        assert_eq!(body.assessment.overall_score, 0.0);
        assert_eq!(body.assessment.overall_level, RiskLevel::Low);
        assert_eq!(body.assessment.recommendations.len(), 1);
        assert_eq!(
            body.assessment.recommendations[0].advisory,
            AdvisoryType::Success
        );
    }

    #[tokio::test]
    async fn compare_handler_reports_higher_risk_region() {
        let request = ComparisonRequest {
            region_a: temperate_reading(),
            region_b: monsoon_reading(),
        };
        let Json(body) = compare_handler(State(engine()), Json(request)).await;

        assert_eq!(body.comparison.higher_risk_region, "Visakhapatnam");
        assert_eq!(body.comparison.score_difference, 57.0);
    }

    #[tokio::test]
    async fn batch_handler_scores_inline_csv() {
        let request = BatchRequest {
            csv: "temperature,humidity,rainfall,aqi,uv_index,region\n\
                  40,90,250,200,10,Delhi\n\
                  20,40,30,50,3,Shimla\n"
                .to_string(),
        };
        let Json(body) = batch_handler(State(engine()), Json(request))
            .await
            .expect("batch scores");

        assert_eq!(body.outcome.summary.rows_processed, 2);
        assert_eq!(body.outcome.summary.max_score, 100.0);
        assert_eq!(body.outcome.summary.critical_rows, 1);
        assert_eq!(body.outcome.rows[0].region, "Delhi");
    }

    #[tokio::test]
    async fn batch_handler_rejects_malformed_csv() {
        let request = BatchRequest {
            csv: "temperature,humidity\n31,not-a-number\n".to_string(),
        };
        let result = batch_handler(State(engine()), Json(request)).await;

        assert!(matches!(result, Err(AppError::Batch(_))));
    }

    #[tokio::test]
    async fn reference_tables_are_complete() {
        let Json(categories) = categories_handler().await;
        assert_eq!(categories.len(), 7);
        assert!(categories.iter().any(|entry| entry.id == "vector_borne"));

        let Json(regions) = regions_handler().await;
        assert_eq!(regions.len(), 5);

        let Json(outlook) = seasonal_handler().await;
        assert_eq!(outlook.months[0], "Jan");
        assert_eq!(outlook.series.len(), 5);
        assert!(outlook
            .series
            .iter()
            .all(|series| series.monthly.len() == 12));
    }
}
