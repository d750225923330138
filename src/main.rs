use clap::Parser;
use courier_route::{GreedyRouteBuilder, Location, RouteConfig, RouteOutcome, RouteRequest};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};

/// Greedy pickup-and-delivery route for a single courier
#[derive(Debug, Parser)]
#[command(name = "courier-route", version)]
struct Args {
    /// JSON file with one route request or an array of them; the built-in
    /// reference scenario is used when omitted
    input: Option<PathBuf>,

    /// Courier speed in km/h, overrides the request configuration
    #[arg(long)]
    speed: Option<f64>,

    /// Earth radius in km, overrides the request configuration
    #[arg(long)]
    earth_radius: Option<f64>,

    /// Print one JSON entry per request, carrying its plan or its error
    #[arg(long)]
    json: bool,

    /// Log every greedy selection
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("courier-route: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut requests = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "loading route requests");
            RouteRequest::parse_many(&fs::read_to_string(path)?)?
        }
        None => vec![reference_request()],
    };

    for request in &mut requests {
        request.config = Some(request.resolved_config(args.speed, args.earth_radius));
    }

    let results = GreedyRouteBuilder::default().build_many(&requests);
    let outcomes = RouteOutcome::from_results(results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }
    for outcome in &outcomes {
        if let Some(error) = &outcome.error {
            eprintln!("request {}: {}", outcome.request, error);
            continue;
        }
        if let (false, Some(plan)) = (args.json, &outcome.plan) {
            println!("{}", plan.sequence().join(" -> "));
            for leg in &plan.legs {
                println!(
                    "  {}: {:.0} km, travel {:.2} min, wait {:.2} min, cost {:.2} min",
                    leg.stop_id,
                    leg.distance_km,
                    leg.travel_minutes,
                    leg.wait_minutes,
                    leg.effective_cost
                );
            }
        }
    }

    let failed = outcomes.iter().filter(|outcome| outcome.is_failure()).count();
    if failed > 0 {
        return Err(format!("{} of {} requests failed", failed, outcomes.len()).into());
    }
    Ok(())
}

/// Courier in Philadelphia with two restaurants and their customers
fn reference_request() -> RouteRequest {
    let start = Location::new("Aman", 39.9526, -75.1652);
    let stops = vec![
        Location::restaurant("R1", 0.7128, -74.006, 50.0),
        Location::restaurant("R2", 35.0522, -110.2437, 1_000_000.0),
        Location::customer("C1", 0.7128, -7.006, "R1"),
        Location::customer("C2", 35.0522, -110.2437, "R2"),
    ];

    RouteRequest::new(start, stops).with_config(RouteConfig::default())
}
