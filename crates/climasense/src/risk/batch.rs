use super::domain::{ClimateReading, RiskLevel};
use super::scoring::{overall_risk_score, round1};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BatchScoringError {
    #[error("failed to read readings export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid readings CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Parses a readings export with columns
/// `temperature,humidity,rainfall,aqi,uv_index[,region][,month]`.
pub fn parse_readings<R: Read>(reader: R) -> Result<Vec<ClimateReading>, BatchScoringError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut readings = Vec::new();

    for record in csv_reader.deserialize::<ReadingRow>() {
        let row = record?;
        readings.push(ClimateReading {
            temperature: row.temperature,
            humidity: row.humidity,
            rainfall: row.rainfall,
            air_quality_index: row.aqi,
            uv_index: row.uv_index,
            region: row.region,
            month: row.month,
        });
    }

    Ok(readings)
}

pub fn score_csv_reader<R: Read>(reader: R) -> Result<BatchOutcome, BatchScoringError> {
    let readings = parse_readings(reader)?;
    Ok(score_readings(&readings))
}

pub fn score_csv_path<P: AsRef<Path>>(path: P) -> Result<BatchOutcome, BatchScoringError> {
    let file = std::fs::File::open(path)?;
    score_csv_reader(file)
}

/// Scores every reading and rolls the results into fleet-level counts.
pub fn score_readings(readings: &[ClimateReading]) -> BatchOutcome {
    let rows: Vec<BatchRowOutcome> = readings
        .iter()
        .map(|reading| {
            let score = overall_risk_score(reading);
            let level = RiskLevel::from_score(score);
            BatchRowOutcome {
                region: reading.region_label().to_string(),
                overall_score: round1(score),
                overall_level: level,
                overall_label: level.label(),
            }
        })
        .collect();

    let scores: Vec<f64> = rows.iter().map(|row| row.overall_score).collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        round1(scores.iter().sum::<f64>() / scores.len() as f64)
    };
    let max_score = scores.iter().copied().fold(0.0_f64, f64::max);

    let summary = BatchSummary {
        rows_processed: rows.len(),
        average_score,
        max_score,
        high_risk_rows: scores.iter().filter(|score| **score >= 60.0).count(),
        critical_rows: scores.iter().filter(|score| **score >= 75.0).count(),
    };

    BatchOutcome { rows, summary }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRowOutcome {
    pub region: String,
    pub overall_score: f64,
    pub overall_level: RiskLevel,
    pub overall_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub rows_processed: usize,
    pub average_score: f64,
    pub max_score: f64,
    pub high_risk_rows: usize,
    pub critical_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub rows: Vec<BatchRowOutcome>,
    pub summary: BatchSummary,
}

#[derive(Debug, Deserialize)]
struct ReadingRow {
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    aqi: f64,
    uv_index: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    region: Option<String>,
    #[serde(default)]
    month: Option<u8>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
