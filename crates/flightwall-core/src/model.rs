//! Flight records handed to the renderer once per fetch cycle.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::logo::LOGO_PIXELS;

/// One end of a route.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Endpoint {
    pub code_icao: String,
    pub code_iata: String,
    /// Full airport name, e.g. "San Francisco Intl".
    pub name: String,
}

impl Endpoint {
    /// IATA code when known, otherwise ICAO.
    pub fn label(&self) -> &str {
        first_non_empty(&[&self.code_iata, &self.code_icao])
    }
}

/// Live telemetry paired with a record.
///
/// `None` means the reading was not reported, which is distinct from a real
/// zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Telemetry {
    /// Barometric altitude in meters.
    pub baro_altitude_m: Option<f64>,
    /// Ground velocity in meters per second.
    pub velocity_mps: Option<f64>,
    /// True track in degrees.
    pub heading_deg: Option<f64>,
    /// Vertical rate in meters per second, positive when climbing.
    pub vertical_rate_mps: Option<f64>,
}

impl Telemetry {
    pub const UNKNOWN: Self = Self {
        baro_altitude_m: None,
        velocity_mps: None,
        heading_deg: None,
        vertical_rate_mps: None,
    };

    /// Builds telemetry from raw readings that use NaN for "not reported".
    pub fn from_raw(
        baro_altitude_m: f64,
        velocity_mps: f64,
        heading_deg: f64,
        vertical_rate_mps: f64,
    ) -> Self {
        Self {
            baro_altitude_m: known(baro_altitude_m),
            velocity_mps: known(velocity_mps),
            heading_deg: known(heading_deg),
            vertical_rate_mps: known(vertical_rate_mps),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

fn known(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Enriched flight metadata plus telemetry and an optional airline logo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightRecord {
    pub ident: String,
    pub ident_icao: String,
    pub ident_iata: String,

    pub operator_code: String,
    pub operator_icao: String,
    pub operator_iata: String,

    pub origin: Endpoint,
    pub destination: Endpoint,

    pub aircraft_code: String,

    pub airline_display_name_full: String,
    pub aircraft_display_name_short: String,

    pub telemetry: Telemetry,

    /// Row-major RGB565 logo pixels; empty when no logo was found.
    pub logo_rgb565: Vec<u16>,
}

impl FlightRecord {
    /// Airline line: full display name, then IATA, ICAO, and raw operator
    /// code. Empty when none is known.
    pub fn airline_label(&self) -> &str {
        first_non_empty(&[
            &self.airline_display_name_full,
            &self.operator_iata,
            &self.operator_icao,
            &self.operator_code,
        ])
    }

    /// Aircraft line: short display name, then the type code.
    pub fn aircraft_label(&self) -> &str {
        first_non_empty(&[&self.aircraft_display_name_short, &self.aircraft_code])
    }

    /// Route line formatted as `ORIGIN-DESTINATION`.
    pub fn route_label(&self) -> RouteLabel<'_> {
        RouteLabel {
            origin: self.origin.label(),
            destination: self.destination.label(),
        }
    }

    /// Logo pixels, only when the buffer has the exact logo size.
    pub fn logo(&self) -> Option<&[u16]> {
        (self.logo_rgb565.len() == LOGO_PIXELS).then_some(self.logo_rgb565.as_slice())
    }
}

/// Borrowed `ORIGIN-DESTINATION` pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RouteLabel<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
}

impl fmt::Display for RouteLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.origin)?;
        f.write_char('-')?;
        f.write_str(self.destination)
    }
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .map(String::as_str)
        .unwrap_or("")
}
