//! Where flight records and airline logos come from.

mod static_source;

use alloc::vec::Vec;

use crate::model::FlightRecord;

pub use static_source::{StaticFlightSource, StaticLogoStore, demo_flights};

/// Produces the current set of flights near the wall.
pub trait FlightSource {
    type Error;

    /// Replaces the contents of `out` with the latest records and returns
    /// how many there are.
    fn fetch_flights(&mut self, out: &mut Vec<FlightRecord>) -> Result<usize, Self::Error>;
}

/// Looks up airline logos by operator ICAO code.
pub trait LogoStore {
    /// Row-major RGB565 pixels, or `None` when no usable logo exists.
    fn fetch_logo(&mut self, airline_icao: &str) -> Option<Vec<u16>>;
}

/// Fills `logo_rgb565` of every record from `store`. Records without an
/// operator code, or whose logo is missing, end up with no logo.
///
/// Returns how many records got one.
pub fn attach_logos<S: LogoStore + ?Sized>(records: &mut [FlightRecord], store: &mut S) -> usize {
    let mut attached = 0;

    for record in records.iter_mut() {
        record.logo_rgb565.clear();
        if record.operator_icao.is_empty() {
            continue;
        }
        if let Some(pixels) = store.fetch_logo(&record.operator_icao) {
            record.logo_rgb565 = pixels;
            attached += 1;
        }
    }

    attached
}
