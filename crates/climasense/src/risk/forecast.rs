use super::config::ForecastTuning;
use super::domain::RiskLevel;
use rand::Rng;
use serde::Serialize;

pub const FORECAST_HORIZON_DAYS: u8 = 14;

/// One synthetic future day, derived by perturbing the current overall
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    pub day_index: u8,
    pub risk_score: u8,
    pub risk_label: RiskLevel,
}

/// Day-by-day projection anchored to `base_score`: a small upward drift per
/// day plus unseeded uniform jitter, clamped to [5, 100] and rounded.
///
/// Repeated calls with the same base produce different sequences; the draw
/// comes from the thread-local generator and is safe under concurrent
/// callers.
pub fn synthesize_forecast(base_score: f64, tuning: &ForecastTuning) -> Vec<ForecastDay> {
    let mut rng = rand::thread_rng();

    (1..=FORECAST_HORIZON_DAYS)
        .map(|day| {
            let jitter = if tuning.daily_jitter > 0.0 {
                rng.gen_range(-tuning.daily_jitter..=tuning.daily_jitter)
            } else {
                0.0
            };
            let drift = tuning.drift_per_day * f64::from(day);
            let score = (base_score + jitter + drift).clamp(5.0, 100.0).round();

            ForecastDay {
                day_index: day,
                risk_score: score as u8,
                risk_label: RiskLevel::from_score(score),
            }
        })
        .collect()
}
