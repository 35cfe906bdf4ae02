use alloc::string::ToString;

use crate::{
    canvas::Canvas,
    color::Rgb565,
    compositor,
    layout::{CardLayout, Line, TextLine},
    model::FlightRecord,
    telemetry,
    text_policy::{ELLIPSIS, Fitted, TextFitter},
};

use super::CardStyle;

pub(super) fn draw_card<C: Canvas>(
    canvas: &mut C,
    layout: &CardLayout,
    style: &CardStyle,
    fitter: &TextFitter,
    record: &FlightRecord,
) {
    canvas.draw_rect_stroke(layout.border, style.border);

    let (logo_x, logo_y) = layout.logo_origin;
    compositor::draw_logo_or_fallback(
        canvas,
        logo_x,
        logo_y,
        &record.logo_rgb565,
        style.fallback_icon,
    );

    let route = record.route_label().to_string();
    let altitude_speed = telemetry::format_altitude_speed(&record.telemetry);
    let track_rate = telemetry::format_track_vertical_rate(&record.telemetry);

    let lines = [
        (Line::Airline, record.airline_label()),
        (Line::Route, route.as_str()),
        (Line::Aircraft, record.aircraft_label()),
        (Line::AltitudeSpeed, altitude_speed.as_str()),
        (Line::TrackVerticalRate, track_rate.as_str()),
    ];
    for (line, text) in lines {
        draw_line(canvas, layout.line(line), fitter, text, style.text);
    }
}

fn draw_line<C: Canvas>(
    canvas: &mut C,
    line: &TextLine,
    fitter: &TextFitter,
    text: &str,
    color: Rgb565,
) {
    if text.is_empty() || line.columns() <= 0 {
        return;
    }

    let fitted = fitter.truncate(text, line.columns(), line.glyph_width());
    draw_fitted(canvas, line.x, line.y, fitted, line.size, color);
}

pub(super) fn draw_fitted<C: Canvas>(
    canvas: &mut C,
    x: i32,
    y: i32,
    fitted: Fitted<'_>,
    size: u8,
    color: Rgb565,
) {
    let x = canvas.draw_text(x, y, fitted.head(), size, color);
    if fitted.is_truncated() {
        canvas.draw_text(x, y, ELLIPSIS, size, color);
    }
}
