//! Pixel layout of a flight card.
//!
//! The card is a border, a gap, then a content block. The top of the content
//! block holds the logo column on the left and three text lines (airline,
//! route, aircraft) on the right; two telemetry lines run underneath across
//! the full content width. Line offsets are solved from glyph heights and the
//! configured gaps, so the last telemetry row always lands on the last
//! content row.

use core::fmt;

use crate::{
    font,
    logo::{LOGO_HEIGHT, LOGO_WIDTH},
};

pub const LINE_COUNT: usize = 5;

/// Text lines of a card, top to bottom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line {
    Airline = 0,
    Route = 1,
    Aircraft = 2,
    AltitudeSpeed = 3,
    TrackVerticalRate = 4,
}

impl Line {
    pub const ALL: [Line; LINE_COUNT] = [
        Line::Airline,
        Line::Route,
        Line::Aircraft,
        Line::AltitudeSpeed,
        Line::TrackVerticalRate,
    ];

    /// Telemetry lines span the full content width, under the logo column.
    pub const fn is_full_width(self) -> bool {
        matches!(self, Line::AltitudeSpeed | Line::TrackVerticalRate)
    }
}

/// Glyph scale of one line and the blank rows that follow it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineSpec {
    pub size: u8,
    pub gap_after: u8,
}

impl LineSpec {
    pub const fn new(size: u8, gap_after: u8) -> Self {
        Self { size, gap_after }
    }

    pub const fn height(self) -> i32 {
        font::cell_height(self.size)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayoutConstants {
    /// Outer border thickness.
    pub border: u16,
    /// Blank pixels between the border and the content.
    pub gap: u16,
    pub logo_width: u16,
    pub logo_height: u16,
    /// Blank columns between the logo and the text column.
    pub logo_gap: u16,
    pub lines: [LineSpec; LINE_COUNT],
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            border: 1,
            gap: 1,
            logo_width: LOGO_WIDTH as u16,
            logo_height: LOGO_HEIGHT as u16,
            logo_gap: 1,
            lines: [
                LineSpec::new(1, 1),
                LineSpec::new(2, 1),
                LineSpec::new(2, 2),
                LineSpec::new(1, 0),
                LineSpec::new(1, 0),
            ],
        }
    }
}

impl LayoutConstants {
    /// Distance from each canvas edge to the content block.
    pub const fn inset(&self) -> i32 {
        self.border as i32 + self.gap as i32
    }

    pub const fn logo_column_width(&self) -> i32 {
        self.logo_width as i32 + self.logo_gap as i32
    }

    /// Content height the five lines need: every glyph height plus the gaps
    /// between lines. The last line's trailing gap is not part of the block.
    pub fn required_content_height(&self) -> i32 {
        let heights: i32 = self.lines.iter().map(|line| line.height()).sum();
        let gaps: i32 = self.lines[..LINE_COUNT - 1]
            .iter()
            .map(|line| line.gap_after as i32)
            .sum();
        heights + gaps
    }

    /// Canvas height these constants fit exactly.
    pub fn required_height(&self) -> i32 {
        self.required_content_height() + 2 * self.inset()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LayoutError {
    /// Nothing is left inside the border and gap.
    CanvasTooSmall { width: u16, height: u16 },
    /// A line has glyph size 0.
    ZeroGlyphSize { line: usize },
    /// The five lines do not fill the content height exactly.
    HeightMismatch { required: i32, available: i32 },
    /// The logo column leaves no room for the text column.
    ColumnTooNarrow { logo_column: i32, content_width: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasTooSmall { width, height } => {
                write!(f, "{width}x{height} canvas has no content area")
            }
            Self::ZeroGlyphSize { line } => write!(f, "line {} has glyph size 0", line + 1),
            Self::HeightMismatch {
                required,
                available,
            } => write!(
                f,
                "card lines need {required}px of content height, canvas offers {available}px"
            ),
            Self::ColumnTooNarrow {
                logo_column,
                content_width,
            } => write!(
                f,
                "{logo_column}px logo column leaves no text column in {content_width}px"
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Origin, usable width, and glyph scale of one text line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextLine {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub size: u8,
}

impl TextLine {
    pub const fn glyph_width(&self) -> i32 {
        font::cell_width(self.size)
    }

    pub const fn height(&self) -> i32 {
        font::cell_height(self.size)
    }

    /// Whole glyph cells that fit in the line width.
    pub const fn columns(&self) -> i32 {
        self.width / self.glyph_width()
    }

    /// Last pixel row the line's glyph cells occupy.
    pub const fn last_row(&self) -> i32 {
        self.y + self.height() - 1
    }
}

/// Solved pixel positions for every element of a card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CardLayout {
    pub width: i32,
    pub height: i32,
    pub border: u16,
    pub content: Rect,
    pub logo_origin: (i32, i32),
    pub lines: [TextLine; LINE_COUNT],
}

impl CardLayout {
    pub fn solve(width: u16, height: u16, constants: &LayoutConstants) -> Result<Self, LayoutError> {
        let inset = constants.inset();
        let content = Rect {
            x: inset,
            y: inset,
            w: width as i32 - 2 * inset,
            h: height as i32 - 2 * inset,
        };
        if content.w <= 0 || content.h <= 0 {
            return Err(LayoutError::CanvasTooSmall { width, height });
        }

        if let Some(line) = constants.lines.iter().position(|line| line.size == 0) {
            return Err(LayoutError::ZeroGlyphSize { line });
        }

        let required = constants.required_content_height();
        if required != content.h {
            return Err(LayoutError::HeightMismatch {
                required,
                available: content.h,
            });
        }

        let logo_column = constants.logo_column_width();
        if content.w <= logo_column {
            return Err(LayoutError::ColumnTooNarrow {
                logo_column,
                content_width: content.w,
            });
        }

        let text_x = content.x + logo_column;
        let text_w = content.w - logo_column;

        let mut lines = [TextLine::default(); LINE_COUNT];
        let mut offset = 0i32;
        for (line, spec) in Line::ALL.into_iter().zip(constants.lines) {
            let (x, width) = if line.is_full_width() {
                (content.x, content.w)
            } else {
                (text_x, text_w)
            };
            lines[line as usize] = TextLine {
                x,
                y: content.y + offset,
                width,
                size: spec.size,
            };
            offset += spec.height() + spec.gap_after as i32;
        }

        let aircraft = lines[Line::Aircraft as usize];
        let top_block_h = aircraft.y + aircraft.height() - content.y;
        let logo_origin = (
            content.x,
            content.y + (top_block_h - constants.logo_height as i32) / 2,
        );

        Ok(Self {
            width: width as i32,
            height: height as i32,
            border: constants.border,
            content,
            logo_origin,
            lines,
        })
    }

    pub fn line(&self, line: Line) -> &TextLine {
        &self.lines[line as usize]
    }

    /// Height of the airline/route/aircraft block the logo is centered in.
    pub fn top_block_height(&self) -> i32 {
        let aircraft = self.line(Line::Aircraft);
        aircraft.y + aircraft.height() - self.content.y
    }

    /// Columns of `size` glyphs that fit across the whole content width.
    pub fn content_columns(&self, size: u8) -> i32 {
        self.content.w / font::cell_width(size.max(1))
    }

    /// Origin that centers `chars` glyphs of `size` in the content block.
    pub fn centered_text_origin(&self, chars: usize, size: u8) -> (i32, i32) {
        let text_w = chars as i32 * font::cell_width(size.max(1));
        (
            self.content.x + (self.content.w - text_w) / 2,
            self.vertically_centered_y(size),
        )
    }

    /// Left-aligned origin for a single message line, vertically centered.
    pub fn message_origin(&self, size: u8) -> (i32, i32) {
        (self.content.x, self.vertically_centered_y(size))
    }

    fn vertically_centered_y(&self, size: u8) -> i32 {
        self.content.y + (self.content.h - font::cell_height(size.max(1))) / 2
    }
}
