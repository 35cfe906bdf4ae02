#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

extern crate alloc;

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{clock::CpuClock, spi::master::Spi, time::Rate, timer::timg::TimerGroup};
use flightwall_core::{
    CardRenderer, CardStyle, Clock, RendererConfig, Rgb565,
    layout::LayoutConstants,
    source::{StaticFlightSource, StaticLogoStore, demo_flights},
};
use flightwall_hal_esp32s3::platform::{clock::BootClock, display::MatrixCanvas};
use log::{LevelFilter, info, warn};
use static_cell::StaticCell;
use ws2812_matrix::{
    Config as MatrixConfig, FrameBuffer, PanelLayout, Ws2812Matrix,
    protocol::{HEIGHT, SPI_HZ, WIDTH},
};

use wall::FlightWall;

#[path = "main/wall.rs"]
mod wall;

const DISPLAY_BRIGHTNESS: u8 = 40;
const DISPLAY_CYCLE_SECONDS: u64 = 5;
const FETCH_INTERVAL_SECONDS: u64 = 600;
const RENDER_TICK_MS: u64 = 100;
const BOOT_MESSAGE_MS: u64 = 2_000;
const TEXT_COLOR: Rgb565 = Rgb565::WHITE;
const BORDER_COLOR: Rgb565 = Rgb565::WHITE;
const FALLBACK_ICON_COLOR: Rgb565 = Rgb565::from_rgb888(0, 100, 255);

static FRAME: StaticCell<FrameBuffer> = StaticCell::new();

// Airline logos linked into the image, keyed by ICAO code. Each blob is
// 32x32 little-endian RGB565.
static LOGOS: [(&str, &[u8]); 0] = [];

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

async fn halt() -> ! {
    loop {
        Timer::after_secs(60).await;
    }
}

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: flightwall starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Flight records and decoded logos live on the heap.
    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 65536);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // The strip data line is SPI2 MOSI; SCK is left unconnected.
    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(SPI_HZ))
        .with_mode(esp_hal::spi::Mode::_0);
    let spi = match Spi::new(peripherals.SPI2, spi_config) {
        Ok(spi) => spi.with_mosi(peripherals.GPIO14),
        Err(err) => {
            esp_println::println!("display: spi config rejected");
            warn!("display spi config failed: {:?}", err);
            halt().await
        }
    };

    let driver = Ws2812Matrix::new(spi, MatrixConfig::default());
    let frame = FRAME.init_with(|| FrameBuffer::new(PanelLayout::FLIGHTWALL_MINI));
    let mut canvas = MatrixCanvas::new(driver, frame);
    canvas.set_brightness(DISPLAY_BRIGHTNESS);
    if let Err(err) = canvas.blank() {
        esp_println::println!("display: blank frame failed");
        warn!("display blank frame failed: {:?}", err);
    } else {
        esp_println::println!("display: blank frame flushed");
    }

    let clock = BootClock::new();
    let renderer_config = RendererConfig {
        rotation_interval_ms: DISPLAY_CYCLE_SECONDS * 1_000,
        layout: LayoutConstants::default(),
        style: CardStyle {
            border: BORDER_COLOR,
            text: TEXT_COLOR,
            fallback_icon: FALLBACK_ICON_COLOR,
        },
    };
    let renderer = match CardRenderer::new(WIDTH as u16, HEIGHT as u16, renderer_config, clock) {
        Ok(renderer) => renderer,
        Err(err) => {
            esp_println::println!("display: card layout does not fit the panel");
            warn!("card layout failed: {}", err);
            halt().await
        }
    };

    info!(
        "FlightWall started: panel={}x{} spi_hz={} brightness={} cycle_s={} fetch_s={}",
        WIDTH, HEIGHT, SPI_HZ, DISPLAY_BRIGHTNESS, DISPLAY_CYCLE_SECONDS, FETCH_INTERVAL_SECONDS
    );
    info!("Display pins: DATA=GPIO14 (SPI2 MOSI)");

    let mut wall = FlightWall::new(
        renderer,
        canvas,
        StaticFlightSource::new(demo_flights()),
        StaticLogoStore::new(&LOGOS),
        FETCH_INTERVAL_SECONDS * 1_000,
    );

    wall.show_boot_message();
    Timer::after_millis(BOOT_MESSAGE_MS).await;
    wall.show_loading();

    loop {
        wall.tick(clock.now_ms());
        Timer::after_millis(RENDER_TICK_MS).await;
    }
}
