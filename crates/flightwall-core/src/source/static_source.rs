use alloc::{string::String, vec, vec::Vec};
use core::convert::Infallible;

use log::warn;

use super::{FlightSource, LogoStore};
use crate::{
    logo::decode_logo,
    model::{Endpoint, FlightRecord, Telemetry},
};

/// Fixed flight list used for bring-up before a network fetcher exists.
#[derive(Debug, Clone, Default)]
pub struct StaticFlightSource {
    records: Vec<FlightRecord>,
}

impl StaticFlightSource {
    pub fn new(records: Vec<FlightRecord>) -> Self {
        Self { records }
    }
}

impl FlightSource for StaticFlightSource {
    type Error = Infallible;

    fn fetch_flights(&mut self, out: &mut Vec<FlightRecord>) -> Result<usize, Self::Error> {
        out.clear();
        out.extend_from_slice(&self.records);
        Ok(out.len())
    }
}

/// Logo blobs linked into the image, keyed by airline ICAO code.
#[derive(Debug, Clone, Copy)]
pub struct StaticLogoStore<'a> {
    entries: &'a [(&'a str, &'a [u8])],
}

impl<'a> StaticLogoStore<'a> {
    pub const fn new(entries: &'a [(&'a str, &'a [u8])]) -> Self {
        Self { entries }
    }
}

impl LogoStore for StaticLogoStore<'_> {
    fn fetch_logo(&mut self, airline_icao: &str) -> Option<Vec<u16>> {
        if airline_icao.is_empty() {
            return None;
        }

        let (code, blob) = self
            .entries
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(airline_icao))?;

        match decode_logo(blob) {
            Ok(pixels) => Some(pixels),
            Err(err) => {
                warn!("logo {} unusable: {}", code, err);
                None
            }
        }
    }
}

fn endpoint(icao: &str, iata: &str, name: &str) -> Endpoint {
    Endpoint {
        code_icao: String::from(icao),
        code_iata: String::from(iata),
        name: String::from(name),
    }
}

/// A small fixed set of flights that exercises every card line.
pub fn demo_flights() -> Vec<FlightRecord> {
    vec![
        FlightRecord {
            ident: String::from("UAL1234"),
            ident_icao: String::from("UAL1234"),
            ident_iata: String::from("UA1234"),
            operator_code: String::from("UAL"),
            operator_icao: String::from("UAL"),
            operator_iata: String::from("UA"),
            origin: endpoint("KSFO", "SFO", "San Francisco Intl"),
            destination: endpoint("KLAX", "LAX", "Los Angeles Intl"),
            aircraft_code: String::from("B39M"),
            airline_display_name_full: String::from("United Airlines"),
            aircraft_display_name_short: String::from("737 MAX 9"),
            telemetry: Telemetry::from_raw(10_668.0, 231.5, 142.0, -0.4),
            logo_rgb565: Vec::new(),
        },
        FlightRecord {
            ident: String::from("ASA567"),
            ident_icao: String::from("ASA567"),
            operator_code: String::from("ASA"),
            operator_icao: String::from("ASA"),
            origin: endpoint("KSEA", "", "Seattle-Tacoma Intl"),
            destination: endpoint("KSAN", "SAN", "San Diego Intl"),
            aircraft_code: String::from("B738"),
            telemetry: Telemetry::from_raw(3_048.0, f64::NAN, 185.0, 7.6),
            ..FlightRecord::default()
        },
        FlightRecord {
            ident: String::from("N172SP"),
            operator_code: String::from("N172SP"),
            aircraft_code: String::from("C172"),
            telemetry: Telemetry::UNKNOWN,
            ..FlightRecord::default()
        },
    ]
}
