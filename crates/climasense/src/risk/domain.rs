use serde::{Deserialize, Serialize};

/// One snapshot of climate measurements for a region.
///
/// Values are taken as-is; out-of-range inputs are not rejected and flow
/// through the scoring arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Rainfall accumulated over a 7-day window, millimetres.
    pub rainfall: f64,
    /// Air Quality Index.
    #[serde(rename = "aqi")]
    pub air_quality_index: f64,
    /// UV Index.
    pub uv_index: f64,
    /// Display/attribution label only; never consulted by scoring.
    #[serde(default)]
    pub region: Option<String>,
    /// 1-12. Carried through for callers; no formula reads it.
    #[serde(default)]
    pub month: Option<u8>,
}

impl ClimateReading {
    pub fn region_label(&self) -> &str {
        self.region.as_deref().unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Total over all reals: anything below 25 reads as Low, including
    /// negative scores.
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            Self::Low
        } else if score < 50.0 {
            Self::Moderate
        } else if score < 75.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Fixed display colors; downstream dashboards key off the exact hex
    /// values.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Low => "#22c55e",
            Self::Moderate => "#eab308",
            Self::High => "#f97316",
            Self::Critical => "#ef4444",
        }
    }
}

/// The seven climate-sensitive disease groups the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseCategory {
    VectorBorne,
    WaterBorne,
    Respiratory,
    HeatRelated,
    Nutritional,
    MentalHealth,
    SkinAndEye,
}

impl DiseaseCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::VectorBorne,
            Self::WaterBorne,
            Self::Respiratory,
            Self::HeatRelated,
            Self::Nutritional,
            Self::MentalHealth,
            Self::SkinAndEye,
        ]
    }

    /// Stable identifier used in payloads and category maps.
    pub const fn key(self) -> &'static str {
        match self {
            Self::VectorBorne => "vector_borne",
            Self::WaterBorne => "water_borne",
            Self::Respiratory => "respiratory",
            Self::HeatRelated => "heat_related",
            Self::Nutritional => "nutritional",
            Self::MentalHealth => "mental_health",
            Self::SkinAndEye => "skin_and_eye",
        }
    }

    /// Name each category's score is published under, kept compatible with
    /// the upstream surveillance exports.
    pub const fn score_key(self) -> &'static str {
        match self {
            Self::VectorBorne => "vector_score",
            Self::WaterBorne => "water_score",
            Self::Respiratory => "respiratory_score",
            Self::HeatRelated => "heat_score",
            Self::Nutritional => "nutrition_score",
            Self::MentalHealth => "mental_score",
            Self::SkinAndEye => "skin_score",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VectorBorne => "Vector-Borne",
            Self::WaterBorne => "Water-Borne",
            Self::Respiratory => "Respiratory",
            Self::HeatRelated => "Heat-Related",
            Self::Nutritional => "Nutritional",
            Self::MentalHealth => "Mental Health",
            Self::SkinAndEye => "Skin & Eye",
        }
    }

    pub const fn example_conditions(self) -> &'static str {
        match self {
            Self::VectorBorne => "Dengue, Malaria, Chikungunya",
            Self::WaterBorne => "Cholera, Typhoid, Hepatitis A",
            Self::Respiratory => "Asthma, COPD, Influenza",
            Self::HeatRelated => "Heatstroke, Dehydration",
            Self::Nutritional => "Malnutrition, Vitamin deficiencies",
            Self::MentalHealth => "Climate anxiety, Depression",
            Self::SkinAndEye => "Conjunctivitis, UV damage",
        }
    }

    /// Display hint only; irrelevant to scoring.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::VectorBorne => "#8b5cf6",
            Self::WaterBorne => "#0ea5e9",
            Self::Respiratory => "#64748b",
            Self::HeatRelated => "#f97316",
            Self::Nutritional => "#84cc16",
            Self::MentalHealth => "#ec4899",
            Self::SkinAndEye => "#f59e0b",
        }
    }
}

/// Severity tag carried on a recommendation block; drives color and
/// ordering in downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryType {
    Critical,
    Warning,
    Info,
    Success,
}

impl AdvisoryType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}
