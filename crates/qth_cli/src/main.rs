use clap::{Args, Parser, Subcommand};
use qth_geodesy::{Coordinate, Ellipsoid, Sphere, haversine_distance_km_on, initial_bearing_deg};
use qth_grid::{decode_locator_cell, encode_locator};
use qth_math::deg_to_dms;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qth", about = "Geodesic distance, bearing and Maidenhead locator tool")]
struct Cli {
    /// Log solver and parser diagnostics (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Two points in decimal degrees.
#[derive(Args)]
struct PointPair {
    /// Latitude of the first point
    #[arg(allow_negative_numbers = true)]
    lat1: f64,
    /// Longitude of the first point
    #[arg(allow_negative_numbers = true)]
    lon1: f64,
    /// Latitude of the second point
    #[arg(allow_negative_numbers = true)]
    lat2: f64,
    /// Longitude of the second point
    #[arg(allow_negative_numbers = true)]
    lon2: f64,
}

impl PointPair {
    fn coordinates(&self) -> (Coordinate, Coordinate) {
        (
            Coordinate::new(self.lat1, self.lon1),
            Coordinate::new(self.lat2, self.lon2),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Great-circle distance on a sphere
    Haversine {
        #[command(flatten)]
        points: PointPair,
        /// Sphere radius in km
        #[arg(long, default_value_t = Sphere::MEAN_EARTH.radius_km)]
        radius_km: f64,
    },
    /// Ellipsoidal distance (Vincenty inverse)
    Vincenty {
        #[command(flatten)]
        points: PointPair,
        /// Reference ellipsoid: WGS84 or GRS80
        #[arg(long, default_value = "WGS84")]
        ellipsoid: String,
    },
    /// Initial great-circle bearing from true north
    Bearing {
        #[command(flatten)]
        points: PointPair,
    },
    /// Haversine, Vincenty and bearing together
    Distance {
        #[command(flatten)]
        points: PointPair,
        /// Reference ellipsoid: WGS84 or GRS80
        #[arg(long, default_value = "WGS84")]
        ellipsoid: String,
    },
    /// Encode a coordinate as a Maidenhead locator
    Encode {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Number of character pairs (1-6)
        #[arg(long, default_value_t = 6)]
        precision: u8,
    },
    /// Decode a Maidenhead locator to the center of its cell
    Decode {
        /// Locator, 2 to 12 characters
        locator: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Haversine { points, radius_km } => {
            let sphere = Sphere::new(radius_km);
            if let Err(e) = sphere.validate() {
                eprintln!("{e}");
                std::process::exit(1);
            }
            let (from, to) = points.coordinates();
            let km = haversine_distance_km_on(&sphere, from, to);
            println!("Haversine distance: {km:.2} km");
        }

        Commands::Vincenty { points, ellipsoid } => {
            let ellipsoid = require_ellipsoid(&ellipsoid);
            let (from, to) = points.coordinates();
            match vincenty_km(&ellipsoid, from, to) {
                Ok(km) => println!("Vincenty distance:  {km:.2} km"),
                Err(e) => {
                    eprintln!("Vincenty distance undefined: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Bearing { points } => {
            let (from, to) = points.coordinates();
            println!("Initial bearing:    {:.2}°", initial_bearing_deg(from, to));
        }

        Commands::Distance { points, ellipsoid } => {
            let ellipsoid = require_ellipsoid(&ellipsoid);
            let (from, to) = points.coordinates();
            let haversine = haversine_distance_km_on(&Sphere::MEAN_EARTH, from, to);
            println!("Haversine distance: {haversine:.2} km");
            match vincenty_km(&ellipsoid, from, to) {
                Ok(km) => println!("Vincenty distance:  {km:.2} km"),
                Err(e) => println!("Vincenty distance:  undefined ({e})"),
            }
            println!("Initial bearing:    {:.2}°", initial_bearing_deg(from, to));
        }

        Commands::Encode {
            lat,
            lon,
            precision,
        } => match encode_locator(Coordinate::new(lat, lon), precision) {
            Ok(grid) => println!("{lat}, {lon} -> {grid}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Decode { locator } => match decode_locator_cell(&locator) {
            Ok(cell) => {
                let center = cell.center();
                println!(
                    "{} -> {:.6}, {:.6}",
                    locator.trim(),
                    center.latitude_deg,
                    center.longitude_deg
                );
                debug!(
                    south_west = %cell.south_west(),
                    north_east = %cell.north_east(),
                    precision = cell.precision(),
                    "decoded cell"
                );
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(deg));
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn require_ellipsoid(name: &str) -> Ellipsoid {
    Ellipsoid::named(name).unwrap_or_else(|| {
        eprintln!("Invalid ellipsoid: {name}");
        eprintln!("Valid: WGS84 (default), GRS80");
        std::process::exit(1);
    })
}

fn vincenty_km(
    ellipsoid: &Ellipsoid,
    from: Coordinate,
    to: Coordinate,
) -> Result<f64, qth_geodesy::GeodesyError> {
    let solution = qth_geodesy::vincenty_inverse(ellipsoid, from, to)?;
    debug!(
        ellipsoid = ellipsoid.name(),
        iterations = solution.iterations,
        sigma_rad = solution.sigma_rad,
        "vincenty converged"
    );
    Ok(solution.distance_km())
}
