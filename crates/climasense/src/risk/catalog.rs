use super::domain::DiseaseCategory;
use serde::Serialize;

/// Reference metadata for one disease category, as published to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub example_conditions: &'static str,
    pub color: &'static str,
    pub score_key: &'static str,
}

pub fn disease_catalog() -> Vec<CategoryDescriptor> {
    DiseaseCategory::ordered()
        .into_iter()
        .map(|category| CategoryDescriptor {
            id: category.key(),
            label: category.label(),
            example_conditions: category.example_conditions(),
            color: category.color_hex(),
            score_key: category.score_key(),
        })
        .collect()
}

/// Region the service is pre-seeded to attribute readings to. Coordinates
/// are display metadata; scoring never reads them.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub fn monitored_regions() -> Vec<Region> {
    vec![
        Region {
            name: "Visakhapatnam",
            latitude: 17.6868,
            longitude: 83.2185,
        },
        Region {
            name: "Hyderabad",
            latitude: 17.3850,
            longitude: 78.4867,
        },
        Region {
            name: "Mumbai",
            latitude: 19.0760,
            longitude: 72.8777,
        },
        Region {
            name: "Delhi",
            latitude: 28.7041,
            longitude: 77.1025,
        },
        Region {
            name: "Chennai",
            latitude: 13.0827,
            longitude: 80.2707,
        },
    ]
}

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Fixed monthly baseline used for seasonal charting; not an output of the
/// scoring formulas.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonalSeries {
    pub category: DiseaseCategory,
    pub label: &'static str,
    pub monthly: [u8; 12],
}

pub fn seasonal_baselines() -> Vec<SeasonalSeries> {
    vec![
        SeasonalSeries {
            category: DiseaseCategory::VectorBorne,
            label: DiseaseCategory::VectorBorne.label(),
            monthly: [12, 10, 15, 25, 40, 60, 80, 85, 72, 55, 30, 15],
        },
        SeasonalSeries {
            category: DiseaseCategory::WaterBorne,
            label: DiseaseCategory::WaterBorne.label(),
            monthly: [10, 8, 12, 22, 45, 65, 75, 78, 68, 40, 20, 12],
        },
        SeasonalSeries {
            category: DiseaseCategory::Respiratory,
            label: DiseaseCategory::Respiratory.label(),
            monthly: [60, 55, 40, 25, 18, 12, 10, 10, 15, 25, 45, 58],
        },
        SeasonalSeries {
            category: DiseaseCategory::HeatRelated,
            label: DiseaseCategory::HeatRelated.label(),
            monthly: [8, 10, 22, 45, 70, 85, 90, 88, 65, 35, 15, 8],
        },
        SeasonalSeries {
            category: DiseaseCategory::SkinAndEye,
            label: DiseaseCategory::SkinAndEye.label(),
            monthly: [10, 15, 35, 55, 78, 88, 90, 85, 65, 40, 20, 12],
        },
    ]
}
