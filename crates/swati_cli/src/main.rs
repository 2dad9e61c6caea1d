use clap::{Parser, Subcommand};
use swati_moon::{
    LongitudeProvider, MeanMotion, TruncatedSeries, ayanamsha_deg, tropical_longitude_deg,
};
use swati_search::{LocateConfig, Nakshatra, Period, locate};
use swati_time::{Instant, MS_PER_HOUR, MS_PER_MINUTE, UtcTime};

#[derive(Parser)]
#[command(name = "swati", about = "Swati nakshatra transit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Moon's tropical and sidereal longitude at a UTC instant
    Longitude {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Ayanamsha (tropical-sidereal offset) at a UTC instant
    Ayanamsha {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Nakshatra containing a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Find the transit window enclosing (or next after) a UTC instant
    Locate {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Nakshatra index (0-26, default 14 = Swati)
        #[arg(long, default_value = "14")]
        nakshatra: u8,
        /// Coarse scan step in minutes (default 30)
        #[arg(long, default_value = "30")]
        coarse_min: i64,
        /// Fine refinement step in seconds (default 60)
        #[arg(long, default_value = "60")]
        fine_sec: i64,
        /// Use the single-term mean-motion model instead of the
        /// periodic series (shifts boundaries by tens of minutes)
        #[arg(long)]
        mean_motion: bool,
    },
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(UtcTime::new(year, month, day, hour, minute, second))
}

/// Scale a user-supplied step count into milliseconds, rejecting values
/// that are non-positive or overflow i64.
fn step_ms(count: i64, unit_ms: i64) -> Option<i64> {
    count.checked_mul(unit_ms).filter(|ms| *ms > 0)
}

fn require_instant(date: &str) -> Instant {
    match parse_utc(date) {
        Ok(utc) => utc.to_instant(),
        Err(e) => {
            eprintln!("Invalid date: {e}");
            std::process::exit(1);
        }
    }
}

fn print_period(period: Period, nakshatra: Nakshatra) {
    let hours = period.duration_ms() / MS_PER_HOUR;
    let minutes = (period.duration_ms() % MS_PER_HOUR) / MS_PER_MINUTE;
    println!("{} transit", nakshatra.name());
    println!("Start: {}", UtcTime::from_instant(period.start));
    println!("End:   {}", UtcTime::from_instant(period.end));
    println!("Duration: {hours}h {minutes}m");
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Longitude { date } => {
            let at = require_instant(&date);
            let tropical = tropical_longitude_deg(at);
            let aya = ayanamsha_deg(at);
            let sidereal = TruncatedSeries.sidereal_longitude_deg(at);
            let nakshatra = Nakshatra::from_longitude(sidereal);
            println!("Tropical:  {tropical:.4} deg");
            println!("Ayanamsha: {aya:.4} deg");
            println!("Sidereal:  {sidereal:.4} deg");
            println!(
                "Nakshatra: {} (index {})",
                nakshatra.name(),
                nakshatra.index()
            );
        }

        Commands::Ayanamsha { date } => {
            let at = require_instant(&date);
            println!("Ayanamsha: {:.5} deg", ayanamsha_deg(at));
        }

        Commands::Nakshatra { lon } => {
            let nakshatra = Nakshatra::from_longitude(lon);
            let band = nakshatra.band();
            println!(
                "{} (index {}) - [{:.4}, {:.4}) deg",
                nakshatra.name(),
                nakshatra.index(),
                band.start_deg(),
                band.end_deg()
            );
        }

        Commands::Locate {
            date,
            nakshatra,
            coarse_min,
            fine_sec,
            mean_motion,
        } => {
            let at = require_instant(&date);
            let Some(nakshatra) = Nakshatra::from_index(nakshatra) else {
                eprintln!("Invalid nakshatra index: {nakshatra} (0-26)");
                std::process::exit(1);
            };
            let Some(coarse_step_ms) = step_ms(coarse_min, MS_PER_MINUTE) else {
                eprintln!("Invalid coarse step: {coarse_min} minutes");
                std::process::exit(1);
            };
            let Some(fine_step_ms) = step_ms(fine_sec, 1_000) else {
                eprintln!("Invalid fine step: {fine_sec} seconds");
                std::process::exit(1);
            };
            let config = LocateConfig {
                coarse_step_ms,
                fine_step_ms,
                ..LocateConfig::default()
            };
            let band = nakshatra.band();
            let result = if mean_motion {
                locate(&MeanMotion, &band, at, &config)
            } else {
                locate(&TruncatedSeries, &band, at, &config)
            };
            match result {
                Ok(period) => print_period(period, nakshatra),
                Err(e) => {
                    eprintln!("Search failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
