use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Args;
use comfy_table::Table;
use tokio::sync::mpsc;
use tracing::{debug, info};
use valhalla_router::{
    DistanceUnits, Language, Route, RouteError, TravelMode, ValhallaRouter,
    http_transport::{HttpTransport, HttpTransportParams},
};

use crate::parsers;

#[derive(Args)]
pub struct RouteArgs {
    /// A location to route through, as LAT,LNG (at least two, in order)
    #[arg(short, long = "location", value_parser = parsers::parse_point, required = true)]
    locations: Vec<[f64; 2]>,

    /// driving, walking, biking or multimodal
    #[arg(short, long, default_value = "driving")]
    mode: TravelMode,

    #[arg(short, long, default_value = "kilometers")]
    units: DistanceUnits,

    /// Narrative language (e.g. "fr-FR"), defaults to the system locale
    #[arg(long)]
    language: Option<Language>,

    #[arg(long)]
    max_hiking_difficulty: Option<i32>,

    /// Overrides VALHALLA_ENDPOINT
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Print the raw response instead of a summary
    #[arg(long)]
    raw: bool,
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let mut params = HttpTransportParams::from_env()?;
    if let Some(endpoint) = args.endpoint {
        params.endpoint = endpoint;
    }
    debug!("Using routing service at {}", params.endpoint);

    let transport = HttpTransport::new(params)?;

    let mut router = ValhallaRouter::new();
    router
        .set_transport(Arc::new(transport))
        .set_travel_mode(args.mode)
        .set_distance_units(args.units);

    if let Some(language) = args.language {
        router.set_language(language);
    }
    if let Some(difficulty) = args.max_hiking_difficulty {
        router.set_max_hiking_difficulty(difficulty);
    }
    for location in args.locations {
        router.set_location(location);
    }

    let (sender, mut outcomes) = mpsc::unbounded_channel::<Result<Route, RouteError>>();
    let handle = router.fetch_with(Arc::new(sender))?;

    let outcome = outcomes
        .recv()
        .await
        .context("Route fetch ended without an outcome")?;
    handle.join().await;

    let route = outcome.map_err(|err| anyhow!("Failed to fetch route: {err}"))?;

    if args.raw {
        println!("{}", serde_json::to_string_pretty(route.raw_route())?);
    } else {
        print_route(&route, args.units);
    }

    Ok(())
}

fn print_route(route: &Route, units: DistanceUnits) {
    if !route.found_route() {
        info!(
            "No route found: {}",
            route.trip().status_message.as_deref().unwrap_or("unknown reason")
        );
        return;
    }

    info!(
        "Route of {:.2} {} in {:.0} min",
        route.total_distance(),
        units,
        route.total_time() / 60.0
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Instruction", "Street", "Length", "Time (s)"]);

    for (i, maneuver) in route.maneuvers().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            maneuver.instruction.clone(),
            maneuver.street_names.join(", "),
            format!("{:.3}", maneuver.length),
            format!("{:.0}", maneuver.time),
        ]);
    }

    println!("{table}");
}
