//! Command-line arguments.
//!
//! Each command's clap struct converts into the matching core parameter type
//! with `From`, so clap never leaks into `tripline-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```

use std::{path::PathBuf, time::Duration};

use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tripline_core::{
    geocode::DEFAULT_NOMINATIM_URL,
    params::{AddPoint, MovePoint, PointRef, PointSource, RemovePoint},
    route::DEFAULT_ROUTING_BASE,
    storage::{StorageConfig, DEFAULT_REMOTE_TIMEOUT},
    DayKey, Direction, RouteOptions, TravelMode,
};

/// Plan a multi-day trip from the terminal
///
/// Points are kept per day (1일차 to 13일차) in visit order. Each day can be
/// drawn as a route with public transport links between consecutive points.
#[derive(Parser)]
#[command(version, about, name = "trip")]
pub struct Args {
    /// Where the itinerary is stored
    #[arg(long, global = true, value_enum, env = "TRIPLINE_BACKEND", default_value_t = BackendArg::Sqlite)]
    pub backend: BackendArg,

    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tripline/tripline.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the CSV file used by the file backend. Defaults to
    /// $XDG_DATA_HOME/tripline/itinerary.csv
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Endpoint of the remote backend
    #[arg(long, global = true, env = "TRIPLINE_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Nominatim endpoint used by `add --search`
    #[arg(long, global = true, env = "TRIPLINE_GEOCODER_URL", default_value = DEFAULT_NOMINATIM_URL)]
    pub geocoder_url: String,

    /// Network timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_REMOTE_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Process memory, seeded with a sample day
    Memory,
    /// Local SQLite database
    Sqlite,
    /// Remote HTTP endpoint
    Remote,
    /// Local CSV file
    File,
}

impl Args {
    pub fn network_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Maps the storage options onto a core [`StorageConfig`].
    pub fn storage(&self) -> anyhow::Result<StorageConfig> {
        Ok(match self.backend {
            BackendArg::Memory => StorageConfig::Memory { seed_sample: true },
            BackendArg::Sqlite => StorageConfig::Sqlite {
                path: self.database_file.clone(),
            },
            BackendArg::Remote => StorageConfig::Remote {
                endpoint: self.remote_url.clone().ok_or_else(|| {
                    anyhow::anyhow!("--remote-url (or TRIPLINE_REMOTE_URL) is required for the remote backend")
                })?,
                timeout: self.network_timeout(),
            },
            BackendArg::File => StorageConfig::File {
                path: self.data_file.clone(),
            },
        })
    }
}

/// Available commands. Without a command, `days` is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show every day with its points
    Days,
    /// Show the points of one day
    #[command(alias = "ls")]
    Show(DayArgs),
    /// Add a point to the end of a day
    Add(AddArgs),
    /// Move a point one place up or down within its day
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Remove a point
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Remove every point of a day
    Clear(DayArgs),
    /// Show the route of a day, or write it as HTML or GeoJSON
    Route(RouteArgs),
    /// Write the whole itinerary to a CSV file
    Export(PathArgs),
    /// Replace the whole itinerary with the contents of a CSV file
    Import(PathArgs),
    /// Print the coordinates embedded in a map link
    Link(LinkArgs),
}

#[derive(ClapArgs)]
pub struct DayArgs {
    /// Day, e.g. `1`, `1일차` or `day1`
    pub day: DayKey,
}

/// Add a point from coordinates, a map link or a place search
#[derive(ClapArgs)]
#[command(group(ArgGroup::new("source").required(true).args(["lat", "link", "search"])))]
pub struct AddArgs {
    /// Day to add the point to
    pub day: DayKey,

    /// Name of the point; optional with --search
    pub name: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Map link containing `@lat,lon`
    #[arg(long)]
    pub link: Option<String>,

    /// Free-text place search
    #[arg(long)]
    pub search: Option<String>,
}

impl From<AddArgs> for AddPoint {
    fn from(val: AddArgs) -> Self {
        let source = match (val.link, val.search) {
            (Some(link), _) => PointSource::Link(link),
            (None, Some(query)) => PointSource::Search(query),
            // Missing coordinates stay zero and fail core validation.
            (None, None) => PointSource::Manual {
                latitude: val.lat.unwrap_or_default(),
                longitude: val.lon.unwrap_or_default(),
            },
        };
        AddPoint {
            day: val.day,
            name: val.name.unwrap_or_default(),
            source,
        }
    }
}

#[derive(ClapArgs)]
pub struct MoveArgs {
    pub day: DayKey,
    /// 1-based position of the point within the day
    pub position: usize,
    /// `up` (earlier) or `down` (later)
    pub direction: Direction,
}

impl From<MoveArgs> for MovePoint {
    fn from(val: MoveArgs) -> Self {
        MovePoint {
            point: PointRef::At {
                day: val.day,
                position: val.position,
            },
            direction: val.direction,
        }
    }
}

#[derive(ClapArgs)]
pub struct RemoveArgs {
    pub day: DayKey,
    /// 1-based position of the point within the day
    pub position: usize,
}

impl From<RemoveArgs> for RemovePoint {
    fn from(val: RemoveArgs) -> Self {
        RemovePoint {
            point: PointRef::At {
                day: val.day,
                position: val.position,
            },
        }
    }
}

#[derive(ClapArgs)]
pub struct RouteArgs {
    pub day: DayKey,

    /// Write a standalone Leaflet map to this file
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Write the route as GeoJSON to this file
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Travel mode for the directions links
    #[arg(long, default_value = "transit")]
    pub mode: TravelMode,

    /// Base URL of the routing service
    #[arg(long, default_value = DEFAULT_ROUTING_BASE)]
    pub routing_base: String,
}

impl RouteArgs {
    pub fn options(&self) -> RouteOptions {
        RouteOptions {
            travel_mode: self.mode,
            routing_base: self.routing_base.clone(),
        }
    }
}

#[derive(ClapArgs)]
pub struct PathArgs {
    /// CSV file path
    pub path: PathBuf,
}

#[derive(ClapArgs)]
pub struct LinkArgs {
    /// Map URL or any text containing `@lat,lon`
    pub url: String,
}
