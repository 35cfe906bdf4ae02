use alloc::vec::Vec;
use core::fmt::Debug;

use embedded_hal::spi::SpiBus;
use flightwall_core::{
    CardRenderer, Clock, FlightRecord,
    source::{FlightSource, LogoStore, attach_logos},
};
use flightwall_hal_esp32s3::platform::display::MatrixCanvas;
use log::{info, warn};

const BOOT_MESSAGE: &str = "FlightWall";

/// Everything the render loop owns, built once at boot.
pub(super) struct FlightWall<'a, SPI, K, S, L> {
    renderer: CardRenderer<K>,
    canvas: MatrixCanvas<'a, SPI>,
    source: S,
    logos: L,
    flights: Vec<FlightRecord>,
    fetch_interval_ms: u64,
    last_fetch_ms: Option<u64>,
    flush_fault_logged: bool,
}

impl<'a, SPI, K, S, L> FlightWall<'a, SPI, K, S, L>
where
    SPI: SpiBus<u8>,
    SPI::Error: Debug,
    K: Clock,
    S: FlightSource,
    S::Error: Debug,
    L: LogoStore,
{
    pub(super) fn new(
        renderer: CardRenderer<K>,
        canvas: MatrixCanvas<'a, SPI>,
        source: S,
        logos: L,
        fetch_interval_ms: u64,
    ) -> Self {
        Self {
            renderer,
            canvas,
            source,
            logos,
            flights: Vec::new(),
            fetch_interval_ms,
            last_fetch_ms: None,
            flush_fault_logged: false,
        }
    }

    pub(super) fn show_boot_message(&mut self) {
        let result = self.renderer.show_message(&mut self.canvas, BOOT_MESSAGE);
        self.check_flush("boot message", result);
    }

    pub(super) fn show_loading(&mut self) {
        let result = self.renderer.show_loading(&mut self.canvas);
        self.check_flush("loading", result);
    }

    /// Refetches when the interval has elapsed, then draws one frame.
    pub(super) fn tick(&mut self, now_ms: u64) {
        let due = self
            .last_fetch_ms
            .is_none_or(|last| now_ms.saturating_sub(last) >= self.fetch_interval_ms);
        if due {
            self.refresh();
            self.last_fetch_ms = Some(now_ms);
        }

        if let Err(err) = self.renderer.render_flights(&mut self.canvas, &self.flights) {
            self.log_flush_fault("render", err);
        }
    }

    fn refresh(&mut self) {
        let count = match self.source.fetch_flights(&mut self.flights) {
            Ok(count) => count,
            Err(err) => {
                warn!("flight fetch failed: {:?}", err);
                return;
            }
        };
        let with_logos = attach_logos(&mut self.flights, &mut self.logos);

        info!("fetched {} flights, {} with logos", count, with_logos);
        for flight in &self.flights {
            info!(
                "  {} | {} | {} | {} | logo px={}",
                flight.ident,
                flight.airline_label(),
                flight.aircraft_label(),
                flight.route_label(),
                flight.logo_rgb565.len()
            );
        }
    }

    fn check_flush<E: Debug>(&mut self, what: &str, result: Result<(), E>) {
        if let Err(err) = result {
            self.log_flush_fault(what, err);
        }
    }

    fn log_flush_fault<E: Debug>(&mut self, what: &str, err: E) {
        if self.flush_fault_logged {
            return;
        }
        esp_println::println!("display: {} flush failed", what);
        warn!("display {} flush failed: {:?}", what, err);
        self.flush_fault_logged = true;
    }
}
