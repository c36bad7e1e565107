//! Command-line argument handling

use std::ffi::OsStr;
use std::path::Path;

use clap::Parser;
use llh_core::GeodeticCoordinate;

use crate::error::{CliError, Result};

/// Fallback when argv[0] is missing or not valid UTF-8.
pub const DEFAULT_PROGRAM: &str = "llh2ecef";

const ARG_NAMES: [&str; 3] = ["lat_deg", "lon_deg", "hae_km"];

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Convert geodetic latitude, longitude and height to ECEF coordinates"
)]
pub struct Args {
    /// Print the result as a JSON object instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Latitude (deg), longitude (deg) and height above ellipsoid (km)
    ///
    /// Dash-led tokens (`-.5`, `-inf`, `-x`) are kept as values so the
    /// float parser and the count check see every one of them. Flags must
    /// come before the first value.
    #[arg(
        value_name = "lat_deg lon_deg hae_km",
        num_args = 0..,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,
}

/// What the positional arguments ask for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invocation {
    Usage,
    Convert(GeodeticCoordinate),
}

impl Args {
    pub fn invocation(&self) -> Result<Invocation> {
        let [lat, lon, hae] = self.values.as_slice() else {
            return Ok(Invocation::Usage);
        };

        Ok(Invocation::Convert(GeodeticCoordinate::new(
            parse_value(ARG_NAMES[0], lat)?,
            parse_value(ARG_NAMES[1], lon)?,
            parse_value(ARG_NAMES[2], hae)?,
        )))
    }
}

fn parse_value(name: &'static str, raw: &str) -> Result<f64> {
    raw.trim().parse().map_err(|_| CliError::InvalidArgument {
        name,
        value: raw.to_string(),
    })
}

/// Usage line printed when the argument count is wrong
pub fn usage(program: &str) -> String {
    format!("Usage: {} {}", program, ARG_NAMES.join(" "))
}

/// File name of argv[0]
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .unwrap_or(DEFAULT_PROGRAM)
        .to_string()
}
