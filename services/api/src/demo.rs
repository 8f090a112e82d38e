use crate::infra::default_engine;
use clap::Args;
use climasense::error::AppError;
use climasense::risk::batch::score_csv_path;
use climasense::risk::domain::ClimateReading;
use climasense::risk::RiskAssessment;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessReportArgs {
    /// Temperature in degrees Celsius
    #[arg(long)]
    pub(crate) temperature: f64,
    /// Relative humidity in percent
    #[arg(long)]
    pub(crate) humidity: f64,
    /// 7-day rainfall in millimetres
    #[arg(long)]
    pub(crate) rainfall: f64,
    /// Air Quality Index
    #[arg(long)]
    pub(crate) aqi: f64,
    /// UV Index
    #[arg(long)]
    pub(crate) uv_index: f64,
    /// Region label for attribution
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Month of the reading (1-12)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub(crate) month: Option<u8>,
    /// Include the 14-day outlook in the output
    #[arg(long)]
    pub(crate) list_forecast: bool,
    /// Emit the full assessment as JSON instead of the report view
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with temperature,humidity,rainfall,aqi,uv_index[,region] columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the 14-day outlook for each scenario
    #[arg(long)]
    pub(crate) list_forecast: bool,
}

pub(crate) fn run_assess_report(args: AssessReportArgs) -> Result<(), AppError> {
    let AssessReportArgs {
        temperature,
        humidity,
        rainfall,
        aqi,
        uv_index,
        region,
        month,
        list_forecast,
        json,
    } = args;

    let reading = ClimateReading {
        temperature,
        humidity,
        rainfall,
        air_quality_index: aqi,
        uv_index,
        region,
        month,
    };

    let engine = default_engine();
    let assessment = engine.assess(&reading);

    if json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_assessment(&assessment, list_forecast);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let outcome = score_csv_path(args.csv)?;

    println!("Batch risk scoring");
    println!("Rows processed: {}", outcome.summary.rows_processed);
    for row in &outcome.rows {
        println!(
            "- {}: {} ({})",
            row.region, row.overall_score, row.overall_label
        );
    }
    println!(
        "\nAverage {} | max {} | {} high-risk row(s) | {} critical row(s)",
        outcome.summary.average_score,
        outcome.summary.max_score,
        outcome.summary.high_risk_rows,
        outcome.summary.critical_rows
    );

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = default_engine();

    println!("Climate health risk demo");

    let monsoon = demo_reading("Visakhapatnam", 32.0, 78.0, 180.0, 112.0, 7.0, Some(10));
    let heatwave = demo_reading("Delhi", 41.0, 30.0, 5.0, 160.0, 11.0, Some(5));
    let temperate = demo_reading("Shimla", 20.0, 40.0, 30.0, 50.0, 3.0, Some(2));

    for reading in [&monsoon, &heatwave, &temperate] {
        println!();
        render_assessment(&engine.assess(reading), args.list_forecast);
    }

    let comparison = engine.compare(&monsoon, &heatwave);
    println!("\nRegion comparison");
    println!(
        "- {}: {} ({})",
        comparison.region_a.region, comparison.region_a.overall_score, comparison.region_a.overall_label
    );
    println!(
        "- {}: {} ({})",
        comparison.region_b.region, comparison.region_b.overall_score, comparison.region_b.overall_label
    );
    println!(
        "{} (score difference {})",
        comparison.note, comparison.score_difference
    );

    Ok(())
}

fn demo_reading(
    region: &str,
    temperature: f64,
    humidity: f64,
    rainfall: f64,
    aqi: f64,
    uv_index: f64,
    month: Option<u8>,
) -> ClimateReading {
    ClimateReading {
        temperature,
        humidity,
        rainfall,
        air_quality_index: aqi,
        uv_index,
        region: Some(region.to_string()),
        month,
    }
}

pub(crate) fn render_assessment(assessment: &RiskAssessment, list_forecast: bool) {
    println!("Risk assessment for {}", assessment.region);
    println!(
        "Overall: {}/100 ({}) | model confidence {}%",
        assessment.overall_score, assessment.overall_label, assessment.confidence
    );

    println!("\nScore drivers");
    for band in &assessment.score_breakdown {
        println!("- {}: +{} ({})", band.dimension, band.points, band.note);
    }

    println!("\nCategory risks");
    for risk in &assessment.category_risks {
        println!(
            "- {}: {} ({})",
            risk.label, risk.risk_score, risk.risk_level_label
        );
        for factor in &risk.contributing_factors {
            println!("  - {factor}");
        }
    }

    println!("\nPreventive advisories");
    for block in &assessment.recommendations {
        println!(
            "- [{}] {} (score {})",
            block.advisory.label(),
            block.title,
            block.risk_score
        );
        for action in &block.actions {
            println!("  - {action}");
        }
    }

    if list_forecast {
        println!("\n14-day outlook");
        for day in &assessment.forecast {
            println!(
                "- day {}: {} ({})",
                day.day_index,
                day.risk_score,
                day.risk_label.label()
            );
        }
    }
}
