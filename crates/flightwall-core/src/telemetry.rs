//! Short display strings for the two telemetry lines of a card.

use core::fmt::{self, Write};

use heapless::String;

use crate::model::Telemetry;

pub const METERS_TO_FEET: f64 = 3.28084;
pub const MPS_TO_MPH: f64 = 2.23694;

/// Capacity of one formatted telemetry line.
///
/// Readings saturate to `i64` before printing, so the longest line is
/// `Alt:` with a grouped `i64::MIN` (26 bytes) plus `|Spd:` with an ungrouped
/// one (20 bytes): 55 bytes. Pushes into the line therefore never fail.
pub const TELEMETRY_LINE_BYTES: usize = 64;

pub const NO_TELEMETRY: &str = "No telemetry";

const SEPARATOR: char = '|';

pub type TelemetryLine = String<TELEMETRY_LINE_BYTES>;

/// `Alt:<feet>|Spd:<mph>`, or [`NO_TELEMETRY`] when neither is known.
pub fn format_altitude_speed(telemetry: &Telemetry) -> TelemetryLine {
    let mut line = TelemetryLine::new();

    if let Some(altitude_m) = telemetry.baro_altitude_m {
        let _ = line.push_str("Alt:");
        let _ = write_grouped(&mut line, round_to_int(altitude_m * METERS_TO_FEET));
    }
    if let Some(velocity_mps) = telemetry.velocity_mps {
        push_separator(&mut line);
        let _ = write!(line, "Spd:{}", round_to_int(velocity_mps * MPS_TO_MPH));
    }

    if line.is_empty() {
        let _ = line.push_str(NO_TELEMETRY);
    }
    line
}

/// `Trk:<deg>deg|Vr:<mph>`, or an empty line when neither is known.
pub fn format_track_vertical_rate(telemetry: &Telemetry) -> TelemetryLine {
    let mut line = TelemetryLine::new();

    if let Some(heading_deg) = telemetry.heading_deg {
        let _ = write!(line, "Trk:{}deg", round_to_int(heading_deg));
    }
    if let Some(rate_mps) = telemetry.vertical_rate_mps {
        push_separator(&mut line);
        let _ = write!(line, "Vr:{}", round_to_int(rate_mps * MPS_TO_MPH));
    }

    line
}

/// Rounds half away from zero. A value that rounds to zero from below comes
/// back as plain `0`, so it never prints as `-0`.
pub fn round_to_int(value: f64) -> i64 {
    libm::round(value) as i64
}

/// Writes `value` with a comma between every group of three digits.
pub fn write_grouped<W: Write>(out: &mut W, value: i64) -> fmt::Result {
    if value < 0 {
        out.write_char('-')?;
    }

    let mut digits = [0u8; 20];
    let mut len = 0usize;
    let mut rest = value.unsigned_abs();
    loop {
        digits[len] = b'0' + (rest % 10) as u8;
        len += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    for i in (0..len).rev() {
        out.write_char(digits[i] as char)?;
        if i > 0 && i % 3 == 0 {
            out.write_char(',')?;
        }
    }
    Ok(())
}

fn push_separator(line: &mut TelemetryLine) {
    if !line.is_empty() {
        let _ = line.push(SEPARATOR);
    }
}
