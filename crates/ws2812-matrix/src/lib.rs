#![cfg_attr(not(test), no_std)]

//! WS2812B LED matrix driver that bit-bangs the strip protocol over SPI.

mod framebuffer;
pub mod protocol;

pub use framebuffer::FrameBuffer;
pub use protocol::{Axis, Corner, PanelLayout, Sequence};

use embedded_hal::spi::SpiBus;

/// LEDs encoded per SPI write.
const LEDS_PER_CHUNK: usize = 64;
const CHUNK_BYTES: usize = LEDS_PER_CHUNK * protocol::BYTES_PER_LED;

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Expected SPI clock in Hz (documented for board glue).
    pub spi_hz: u32,
    /// Global brightness, 0..=255.
    pub brightness: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_hz: protocol::SPI_HZ,
            brightness: 40,
        }
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<SpiErr> {
    /// SPI transfer failed.
    Spi(SpiErr),
    /// Frame has no LEDs to send.
    InvalidInput,
}

pub type DriverResult<SpiErr> = Result<(), Error<SpiErr>>;

/// WS2812B strip on an SPI bus whose MOSI pin is the data line.
#[derive(Debug)]
pub struct Ws2812Matrix<SPI> {
    spi: SPI,
    config: Config,
    chunk: [u8; CHUNK_BYTES],
}

impl<SPI> Ws2812Matrix<SPI>
where
    SPI: SpiBus<u8>,
{
    pub fn new(spi: SPI, config: Config) -> Self {
        Self {
            spi,
            config,
            chunk: [0; CHUNK_BYTES],
        }
    }

    pub fn brightness(&self) -> u8 {
        self.config.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.config.brightness = brightness;
    }

    /// Releases the owned bus.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Streams a full frame followed by the reset latch.
    pub fn flush_frame(&mut self, frame: &FrameBuffer) -> DriverResult<SPI::Error> {
        let strip = frame.strip();
        if strip.is_empty() {
            return Err(Error::InvalidInput);
        }

        for leds in strip.chunks(LEDS_PER_CHUNK) {
            let len = leds.len() * protocol::BYTES_PER_LED;
            for (slot, rgb) in self.chunk[..len]
                .chunks_exact_mut(protocol::BYTES_PER_LED)
                .zip(leds)
            {
                slot.copy_from_slice(&protocol::encode_pixel(*rgb, self.config.brightness));
            }
            self.spi.write(&self.chunk[..len]).map_err(Error::Spi)?;
        }

        self.latch()
    }

    /// Holds the data line low long enough for the LEDs to latch.
    pub fn latch(&mut self) -> DriverResult<SPI::Error> {
        self.spi
            .write(&[0u8; protocol::RESET_BYTES])
            .map_err(Error::Spi)?;
        self.spi.flush().map_err(Error::Spi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::spi::{ErrorKind, ErrorType};

    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<usize>,
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl ErrorType for RecordingBus {
        type Error = Infallible;
    }

    impl SpiBus<u8> for RecordingBus {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.writes.push(words.len());
            self.bytes.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.bytes.extend_from_slice(words);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenBus;

    impl ErrorType for BrokenBus {
        type Error = ErrorKind;
    }

    impl SpiBus<u8> for BrokenBus {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn frame_is_streamed_in_chunks_then_latched() {
        let mut driver = Ws2812Matrix::new(RecordingBus::default(), Config::default());
        driver.flush_frame(&FrameBuffer::default()).unwrap();

        let bus = driver.release();
        let chunks = protocol::PIXELS / LEDS_PER_CHUNK;
        assert_eq!(bus.writes.len(), chunks + 1);
        assert!(bus.writes[..chunks].iter().all(|len| *len == CHUNK_BYTES));
        assert_eq!(bus.writes[chunks], protocol::RESET_BYTES);
        assert_eq!(
            bus.bytes.len(),
            protocol::PIXELS * protocol::BYTES_PER_LED + protocol::RESET_BYTES
        );
        assert_eq!(bus.flushes, 1);
    }

    #[test]
    fn first_strip_led_is_sent_first() {
        let mut frame = FrameBuffer::default();
        frame.set_pixel(127, 31, [0, 255, 0]);

        let mut driver = Ws2812Matrix::new(
            RecordingBus::default(),
            Config {
                brightness: 255,
                ..Config::default()
            },
        );
        driver.flush_frame(&frame).unwrap();

        let bus = driver.release();
        assert_eq!(bus.bytes[0..3], protocol::encode_byte(0xFF));
        assert_eq!(bus.bytes[3..6], protocol::encode_byte(0x00));
        assert_eq!(bus.bytes[9..12], protocol::encode_byte(0x00));
    }

    #[test]
    fn brightness_scales_every_channel() {
        let mut frame = FrameBuffer::new(PanelLayout::single(1, 1));
        frame.set_pixel(0, 0, [200, 200, 200]);

        let mut driver = Ws2812Matrix::new(RecordingBus::default(), Config::default());
        driver.set_brightness(127);
        assert_eq!(driver.brightness(), 127);
        driver.flush_frame(&frame).unwrap();

        let bus = driver.release();
        assert_eq!(bus.writes, [protocol::BYTES_PER_LED, protocol::RESET_BYTES]);
        for color in bus.bytes[..protocol::BYTES_PER_LED].chunks_exact(3) {
            assert_eq!(color, protocol::encode_byte(100));
        }
    }

    #[test]
    fn bus_errors_are_reported() {
        let mut driver = Ws2812Matrix::new(BrokenBus, Config::default());

        assert_eq!(
            driver.flush_frame(&FrameBuffer::default()),
            Err(Error::Spi(ErrorKind::Other))
        );
    }

    #[test]
    fn empty_layout_is_rejected() {
        let mut driver = Ws2812Matrix::new(RecordingBus::default(), Config::default());
        let frame = FrameBuffer::new(PanelLayout::single(0, 0));

        assert_eq!(driver.flush_frame(&frame), Err(Error::InvalidInput));
        assert!(driver.release().bytes.is_empty());
    }
}
