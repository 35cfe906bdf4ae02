use embedded_hal::spi::SpiBus;
use flightwall_core::{Canvas, Rgb565};
use log::debug;
use ws2812_matrix::{Error, FrameBuffer, Ws2812Matrix};

/// [`Canvas`] over a WS2812 panel: draws into a strip-ordered frame and
/// pushes it to the LEDs on flush.
pub struct MatrixCanvas<'a, SPI> {
    driver: Ws2812Matrix<SPI>,
    frame: &'a mut FrameBuffer,
    width: u16,
    height: u16,
}

impl<'a, SPI> MatrixCanvas<'a, SPI>
where
    SPI: SpiBus<u8>,
{
    pub fn new(driver: Ws2812Matrix<SPI>, frame: &'a mut FrameBuffer) -> Self {
        let width = frame.width().min(u16::MAX as usize) as u16;
        let height = frame.height().min(u16::MAX as usize) as u16;
        frame.clear();
        debug!("matrix canvas {}x{}", width, height);

        Self {
            driver,
            frame,
            width,
            height,
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.driver.set_brightness(brightness);
        debug!("matrix brightness {}", self.driver.brightness());
    }

    /// Turns every LED off.
    pub fn blank(&mut self) -> Result<(), Error<SPI::Error>> {
        self.frame.clear();
        self.driver.flush_frame(&*self.frame)
    }
}

impl<SPI> Canvas for MatrixCanvas<'_, SPI>
where
    SPI: SpiBus<u8>,
{
    type Error = Error<SPI::Error>;

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn write_pixel(&mut self, x: u16, y: u16, color: Rgb565) {
        self.frame
            .set_pixel(x as usize, y as usize, color.to_rgb888());
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.driver.flush_frame(&*self.frame)
    }
}
