use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hd_bodygraph::{Center, gate_and_line, gate_position};
use hd_ephem::Body;
use hd_engine::{
    BatchRequest, BirthData, CalcError, Calculator, EngineSettings, ErrorResponse, ProfileService,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hd", about = "Human Design bodygraph calculator")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Local birth date, time and timezone.
#[derive(clap::Args, Debug, Clone)]
struct When {
    /// Local date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Local time, HH:MM:SS (24h)
    #[arg(long)]
    time: String,
    /// UTC, a fixed offset (+05:30) or an IANA zone (Europe/Berlin)
    #[arg(long, env = "HD_TZ", default_value = "UTC")]
    tz: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a full profile and print the response JSON
    Calculate {
        #[command(flatten)]
        when: When,
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Calculate every entry of a {"profiles": [...]} JSON file
    Batch {
        /// Path to the batch request
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Gate, line, color, tone and base for an ecliptic longitude
    Gate {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Personality and design instants with their Sun longitudes
    Design {
        #[command(flatten)]
        when: When,
    },
    /// The thirteen longitudes at a birth instant
    Longitudes {
        #[command(flatten)]
        when: When,
    },
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn fail(err: &CalcError, pretty: bool) -> anyhow::Result<()> {
    print_json(&ErrorResponse::from(err), pretty)?;
    std::process::exit(1);
}

fn birth_at(when: &When) -> BirthData {
    BirthData::new(&when.date, &when.time, 0.0, 0.0, &when.tz)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Calculate {
            when,
            lat,
            lng,
            pretty,
        } => {
            let service = ProfileService::from_settings(&EngineSettings::from_env())?;
            let birth = BirthData::new(when.date, when.time, lat, lng, when.tz);
            match service.calculate(birth).await {
                Ok(r) => print_json(&r, pretty)?,
                Err(e) => fail(&e, pretty)?,
            }
            service.shutdown().await;
        }

        Commands::Batch { file, pretty } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let request: BatchRequest = match serde_json::from_str(&raw) {
                Ok(r) => r,
                Err(e) => return fail(&CalcError::invalid(format!("malformed batch: {e}")), pretty),
            };
            debug!(size = request.profiles.len(), "batch request loaded");
            let service = ProfileService::from_settings(&EngineSettings::from_env())?;
            match service.batch(request).await {
                Ok(r) => print_json(&r, pretty)?,
                Err(e) => fail(&e, pretty)?,
            }
            service.shutdown().await;
        }

        Commands::Gate { lon } => {
            let p = gate_position(lon);
            let center = Center::of_gate(p.gate).map_or("-", Center::name);
            println!(
                "Gate {}.{} - color {} tone {} base {} ({:.4} deg in gate, center {})",
                p.gate,
                p.line,
                p.color,
                p.tone,
                p.base,
                p.degrees_in_gate,
                center
            );
        }

        Commands::Design { when } => {
            let calc = Calculator::default();
            let p_utc = calc.personality_instant(&birth_at(&when))?;
            let p_sun = calc.longitudes(&p_utc)?[Body::Sun];
            let design = calc.design_instant(&p_utc)?;
            println!("Personality: {p_utc}  Sun {p_sun:.6} deg");
            println!(
                "Design:      {}  Sun {:.6} deg (target {:.6}, {} iterations)",
                design.utc, design.sun_longitude_deg, design.target_deg, design.iterations
            );
            println!(
                "Arc:         {:.6} days before birth",
                p_utc.to_jd_ut() - design.jd_ut
            );
        }

        Commands::Longitudes { when } => {
            let calc = Calculator::default();
            let at = calc.personality_instant(&birth_at(&when))?;
            let lons = calc.longitudes(&at)?;
            println!("{at}");
            for (body, lon) in lons.iter() {
                let (gate, line) = gate_and_line(lon);
                println!("{:<11} {lon:>11.6} deg  {gate:>2}.{line}", body.name());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(cli).await
}
