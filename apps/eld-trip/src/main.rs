//! eld-trip: plan an hours-of-service compliant trip from the command line.
//!
//! Routes come either from a legs CSV or from three coordinates joined by
//! straight lines at a fixed speed.  The planned log is summarised on stdout
//! and optionally written as CSV or JSON.
//!
//! ```text
//! eld-trip --from 41.88,-87.63 --pickup 39.77,-86.16 --dropoff 33.75,-84.39 \
//!          --start 2025-01-06T08:00:00 --cycle-hours 12 --out output/trip
//! ```

mod logging;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing::info;

use hos_core::{DutyStatus, GeoPoint, HosLimits, Leg};
use hos_engine::{TripLog, TripPlanner};
use hos_output::{CsvWriter, JsonWriter, OutputWriter, TripOutputObserver};
use hos_route::{RouteProvider, StraightLineProvider, TripStops, load_legs_csv};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "eld-trip", version)]
#[command(about = "Plan an FMCSA hours-of-service compliant trip and its daily log sheets")]
#[command(group(ArgGroup::new("route").required(true).args(["legs", "from"])))]
struct Args {
    /// Legs CSV: leg_index,distance_miles,duration_minutes[,is_pickup,is_dropoff]
    #[arg(long)]
    legs: Option<PathBuf>,

    /// Current location as "lat,lng"
    #[arg(long, value_parser = parse_point, requires_all = ["pickup", "dropoff"])]
    from: Option<GeoPoint>,

    /// Pickup location as "lat,lng"
    #[arg(long, value_parser = parse_point, requires = "from")]
    pickup: Option<GeoPoint>,

    /// Dropoff location as "lat,lng"
    #[arg(long, value_parser = parse_point, requires = "from")]
    dropoff: Option<GeoPoint>,

    /// Average speed for straight-line routing
    #[arg(long, default_value_t = hos_route::straight_line::DEFAULT_SPEED_MPH)]
    speed_mph: f64,

    /// Trip start, ISO-8601 (e.g. 2025-01-06T08:00:00 or ...Z)
    #[arg(long)]
    start: String,

    /// On-duty hours already used in the current 70-hour cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_hours: f64,

    /// JSON file overriding hours-of-service limits; omitted fields keep FMCSA defaults
    #[arg(long)]
    limits: Option<PathBuf>,

    /// Directory to write the trip log into (created if missing)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format when --out is given
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lng) = s.split_once(',').ok_or_else(|| format!("expected \"lat,lng\", got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("latitude {lat:?}: {e}"))?;
    let lng: f64 = lng.trim().parse().map_err(|e| format!("longitude {lng:?}: {e}"))?;
    let point = GeoPoint::new(lat, lng);
    if !point.is_valid() {
        return Err(format!("{point} is outside valid latitude/longitude ranges"));
    }
    Ok(point)
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_route(args: &Args) -> Result<Vec<Leg>> {
    if let Some(path) = &args.legs {
        return load_legs_csv(path).with_context(|| format!("loading legs from {}", path.display()));
    }
    let (Some(current), Some(pickup), Some(dropoff)) = (args.from, args.pickup, args.dropoff) else {
        bail!("--from, --pickup and --dropoff must all be given");
    };
    let provider = StraightLineProvider::new(args.speed_mph);
    let route = provider
        .route(&TripStops::new(current, pickup, dropoff))
        .with_context(|| format!("routing with {}", provider.name()))?;
    info!(
        provider = provider.name(),
        miles = route.total_distance_miles(),
        minutes = route.total_duration_minutes(),
        "route computed"
    );
    Ok(route.into_legs())
}

fn load_limits(path: &Path) -> Result<HosLimits> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading limits from {}", path.display()))?;
    let limits: HosLimits = serde_json::from_str(&text)
        .with_context(|| format!("parsing limits in {}", path.display()))?;
    Ok(limits)
}

// ── Planning ──────────────────────────────────────────────────────────────────

fn run_with<W: OutputWriter>(planner: &TripPlanner, writer: W) -> Result<TripLog> {
    let mut obs = TripOutputObserver::new(writer);
    let log = planner.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing trip output");
    }
    Ok(log)
}

fn print_summary(log: &TripLog) {
    println!(
        "Trip: {} → {}  |  {} entries  |  {} log sheets  |  cycle after trip: {:.2} h",
        log.start_time,
        log.end_time(),
        log.entries.len(),
        log.days.len(),
        log.final_cycle_hours,
    );
    println!();

    println!(
        "{:<5} {:<12} {:>9} {:>9} {:>9} {:>9}",
        "Day", "Date", "Driving", "On duty", "Off duty", "Sleeper"
    );
    println!("{}", "-".repeat(58));
    for day in &log.days {
        let t = &day.totals;
        println!(
            "{:<5} {:<12} {:>9.2} {:>9.2} {:>9.2} {:>9.2}",
            day.day_index, day.date.to_string(), t.driving_hours, t.on_duty_hours, t.off_duty_hours,
            t.sleeper_hours,
        );
    }
    println!();

    println!("{:<18} {:<18} {:<20} {}", "Start", "End", "Status", "Note");
    println!("{}", "-".repeat(90));
    for e in &log.entries {
        println!(
            "{:<18} {:<18} {:<20} {}",
            e.start.format("%Y-%m-%d %H:%M").to_string(),
            e.end.format("%Y-%m-%d %H:%M").to_string(),
            e.duty_status.as_str(),
            e.note,
        );
    }

    let driving = log.minutes_in(DutyStatus::Driving);
    println!();
    println!("Total driving: {}h{:02}m", driving / 60, driving % 60);
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let legs = load_route(&args)?;
    let limits = match &args.limits {
        Some(path) => load_limits(path)?,
        None => HosLimits::default(),
    };
    let planner = TripPlanner::from_iso(legs, &args.start)?
        .cycle_hours_used(args.cycle_hours)
        .limits(limits);

    let t0 = Instant::now();
    let log = match &args.out {
        None => planner.plan()?,
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            match args.format {
                Format::Csv => run_with(&planner, CsvWriter::new(dir)?)?,
                Format::Json => run_with(&planner, JsonWriter::new(dir)?)?,
            }
        }
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "planning complete");

    print_summary(&log);
    if let Some(dir) = &args.out {
        println!("Output written to {}", dir.display());
    }
    Ok(())
}
