//! Fitting variable-length strings into a fixed number of glyph columns.

use core::fmt;

pub const ELLIPSIS: &str = "...";
const ELLIPSIS_COLUMNS: usize = 3;

/// Bounds strings to a column budget on a canvas of known width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextFitter {
    canvas_width: i32,
}

impl TextFitter {
    pub const fn new(canvas_width: i32) -> Self {
        Self { canvas_width }
    }

    /// Column budget; a non-positive request means "as many as the canvas
    /// width allows".
    pub fn columns(&self, max_columns: i32, glyph_width: i32) -> usize {
        if max_columns > 0 {
            return max_columns as usize;
        }
        if glyph_width <= 0 {
            return 0;
        }

        (self.canvas_width / glyph_width).max(0) as usize
    }

    /// Fits `text` into `max_columns` characters.
    ///
    /// Text that fits is returned unchanged. Budgets of three columns or fewer
    /// hard-cut the text; wider budgets keep `max - 3` characters followed by
    /// an ellipsis.
    pub fn truncate<'a>(&self, text: &'a str, max_columns: i32, glyph_width: i32) -> Fitted<'a> {
        let max = self.columns(max_columns, glyph_width);
        let len = text.chars().count();

        if len <= max {
            return Fitted::whole(text);
        }
        if max <= ELLIPSIS_COLUMNS {
            return Fitted::whole(char_prefix(text, max));
        }

        Fitted {
            head: char_prefix(text, max - ELLIPSIS_COLUMNS),
            ellipsis: true,
        }
    }
}

/// Result of [`TextFitter::truncate`]: a borrowed head plus an optional
/// trailing ellipsis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fitted<'a> {
    head: &'a str,
    ellipsis: bool,
}

impl<'a> Fitted<'a> {
    const fn whole(head: &'a str) -> Self {
        Self {
            head,
            ellipsis: false,
        }
    }

    pub fn head(&self) -> &'a str {
        self.head
    }

    pub fn is_truncated(&self) -> bool {
        self.ellipsis
    }

    /// Rendered width in characters.
    pub fn columns(&self) -> usize {
        self.head.chars().count() + if self.ellipsis { ELLIPSIS_COLUMNS } else { 0 }
    }
}

impl fmt::Display for Fitted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.head)?;
        if self.ellipsis {
            f.write_str(ELLIPSIS)?;
        }
        Ok(())
    }
}

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use proptest::prelude::*;

    const FITTER: TextFitter = TextFitter::new(128);

    #[test]
    fn short_text_is_unchanged() {
        let fitted = FITTER.truncate("AA", 5, 6);
        assert_eq!(fitted.to_string(), "AA");
        assert!(!fitted.is_truncated());
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let fitted = FITTER.truncate("AmericanAirlinesLLC", 7, 6);
        assert_eq!(fitted.to_string(), "Amer...");
        assert_eq!(fitted.head(), "Amer");
        assert_eq!(fitted.columns(), 7);
    }

    #[test]
    fn narrow_budgets_hard_cut() {
        assert_eq!(FITTER.truncate("AB", 2, 6).to_string(), "AB");
        assert_eq!(FITTER.truncate("ABCDE", 2, 6).to_string(), "AB");
        assert_eq!(FITTER.truncate("ABCDE", 3, 6).to_string(), "ABC");
        assert_eq!(FITTER.truncate("ABCDE", 4, 6).to_string(), "A...");
    }

    #[test]
    fn non_positive_budget_uses_canvas_width() {
        // 128 / 6 = 21 columns.
        let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert_eq!(FITTER.truncate(text, 0, 6).to_string(), "ABCDEFGHIJKLMNOPQR...");
        assert_eq!(FITTER.truncate(text, -4, 12).to_string(), "ABCDEFG...");
        assert_eq!(FITTER.columns(0, 0), 0);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(FITTER.truncate("Zürich-Genève", 8, 6).to_string(), "Züric...");
        assert_eq!(FITTER.truncate("Ééé", 3, 6).to_string(), "Ééé");
    }

    proptest! {
        #[test]
        fn fitted_text_never_exceeds_budget(text in "\\PC{0,40}", max in 1i32..30) {
            let fitted = FITTER.truncate(&text, max, 6);
            let len = text.chars().count();

            prop_assert!(fitted.columns() <= max as usize);
            prop_assert!(text.starts_with(fitted.head()));
            prop_assert_eq!(fitted.is_truncated(), len > max as usize && max > 3);
            if len <= max as usize {
                prop_assert_eq!(fitted.head(), text.as_str());
            }
        }
    }
}
