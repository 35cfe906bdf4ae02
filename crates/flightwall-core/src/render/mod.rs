//! Card, loading, and message screens composed onto a [`Canvas`].

mod card;

use log::{debug, info};

use crate::{
    canvas::Canvas,
    color::Rgb565,
    cycler::{CardCycler, Clock, Selection},
    layout::{CardLayout, LayoutConstants, LayoutError},
    model::FlightRecord,
    text_policy::TextFitter,
};

pub const LOADING_TEXT: &str = "...";
pub const LOADING_TEXT_SIZE: u8 = 1;
pub const MESSAGE_TEXT_SIZE: u8 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CardStyle {
    pub border: Rgb565,
    pub text: Rgb565,
    pub fallback_icon: Rgb565,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            border: Rgb565::WHITE,
            text: Rgb565::WHITE,
            fallback_icon: Rgb565::from_rgb888(0, 100, 255),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RendererConfig {
    pub rotation_interval_ms: u64,
    pub layout: LayoutConstants,
    pub style: CardStyle,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: 5_000,
            layout: LayoutConstants::default(),
            style: CardStyle::default(),
        }
    }
}

/// What the last frame put on the panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shown {
    Loading,
    Card { index: usize },
}

/// Turns the current flight set into exactly one frame per call.
pub struct CardRenderer<K> {
    layout: CardLayout,
    style: CardStyle,
    fitter: TextFitter,
    cycler: CardCycler,
    clock: K,
    last_shown: Option<Shown>,
}

impl<K: Clock> CardRenderer<K> {
    pub fn new(
        width: u16,
        height: u16,
        config: RendererConfig,
        clock: K,
    ) -> Result<Self, LayoutError> {
        let layout = CardLayout::solve(width, height, &config.layout)?;
        info!(
            "card layout {}x{}: text column x={} w={}",
            width, height, layout.lines[0].x, layout.lines[0].width
        );

        Ok(Self {
            layout,
            style: config.style,
            fitter: TextFitter::new(width as i32),
            cycler: CardCycler::new(config.rotation_interval_ms),
            clock,
            last_shown: None,
        })
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn cycler(&self) -> &CardCycler {
        &self.cycler
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Draws the card the cycler selects for `records`, or the loading
    /// placeholder when there are none, and flushes once.
    pub fn render_flights<C: Canvas>(
        &mut self,
        canvas: &mut C,
        records: &[FlightRecord],
    ) -> Result<Shown, C::Error> {
        let selection = self.cycler.select(records.len(), self.clock.now_ms());

        canvas.clear();
        let shown = match selection {
            Selection::Empty => {
                self.draw_loading(canvas);
                Shown::Loading
            }
            Selection::Card(index) => {
                card::draw_card(canvas, &self.layout, &self.style, &self.fitter, &records[index]);
                Shown::Card { index }
            }
        };
        canvas.flush()?;

        if self.last_shown != Some(shown) {
            debug!("showing {:?} of {} flights", shown, records.len());
            self.last_shown = Some(shown);
        }
        Ok(shown)
    }

    pub fn show_loading<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        self.last_shown = None;
        canvas.clear();
        self.draw_loading(canvas);
        canvas.flush()
    }

    /// Shows one line of status text, cut to the content width.
    pub fn show_message<C: Canvas>(&mut self, canvas: &mut C, message: &str) -> Result<(), C::Error> {
        self.last_shown = None;
        canvas.clear();
        canvas.draw_rect_stroke(self.layout.border, self.style.border);

        let columns = self.layout.content_columns(MESSAGE_TEXT_SIZE);
        let fitted = self.fitter.truncate(message, columns.max(1), 0);
        let (x, y) = self.layout.message_origin(MESSAGE_TEXT_SIZE);
        card::draw_fitted(canvas, x, y, fitted, MESSAGE_TEXT_SIZE, self.style.text);

        canvas.flush()
    }

    fn draw_loading<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw_rect_stroke(self.layout.border, self.style.border);

        let (x, y) = self
            .layout
            .centered_text_origin(LOADING_TEXT.len(), LOADING_TEXT_SIZE);
        canvas.draw_text(x, y, LOADING_TEXT, LOADING_TEXT_SIZE, self.style.text);
    }
}
