use std::env;
use trip_planner::config::Config;
use trip_planner::export::{self, map, ExportFormat};
use trip_planner::models::{BudgetLevel, PlanRequest};
use trip_planner::services::trip_planner::TripPlanner;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: plan --destination=NAME [OPTIONS]

Options:
  --destination=NAME    City or place to plan around (required)
  --days=N              Trip length in days (default: 1)
  --budget=LEVEL        Low, Medium or High (default: PLANNER_DEFAULT_BUDGET)
  --format=FORMAT       mobile, html, json or geojson (default: mobile)
  --help                Show this help message"
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (less verbose for one-shot runs)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_planner=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI args
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let Some(destination) = args.iter().find_map(|a| a.strip_prefix("--destination=")) else {
        print_help();
        std::process::exit(2);
    };
    let duration_days: u32 = args
        .iter()
        .find_map(|a| a.strip_prefix("--days="))
        .map(|s| s.parse())
        .transpose()
        .map_err(|_| "--days must be a positive integer")?
        .unwrap_or(1);
    let budget: Option<BudgetLevel> = args
        .iter()
        .find_map(|a| a.strip_prefix("--budget="))
        .map(|s| s.parse())
        .transpose()?;
    let format = args
        .iter()
        .find_map(|a| a.strip_prefix("--format="))
        .unwrap_or("mobile");

    let config = Config::from_env().map_err(|e| format!("Config error: {}", e))?;
    let planner = TripPlanner::from_config(&config);

    let request = PlanRequest {
        destination: destination.to_string(),
        duration_days,
        budget,
        start_point: None,
    };

    eprintln!("Planning {} days in {}...", duration_days, destination);
    let plan = planner.plan(&request).await?;

    if format.eq_ignore_ascii_case("geojson") {
        let collection = map::route_feature_collection(&plan.itinerary);
        println!("{}", serde_json::to_string_pretty(&collection)?);
    } else {
        let exported = export::export_trip_plan(&plan, ExportFormat::from_name(format))?;
        eprintln!("Suggested filename: {}", exported.filename);
        println!("{}", exported.content);
    }

    Ok(())
}
