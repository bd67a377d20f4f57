//! Badges and the colors used to draw them.

use owo_colors::{OwoColorize, Style};

/// Status marker printed in front of receipts, warnings and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Marker text; ASCII when `unicode` is off.
    pub fn symbol(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Err => Style::new().red().bold(),
        }
    }
}

/// Style for labels (`Created:`, `Hint:`) and the product name.
pub fn label_style() -> Style {
    Style::new().dimmed()
}

/// Apply `style` to `text` only when color is on.
pub fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_symbols() {
        assert_eq!(Badge::Ok.symbol(false), "[OK]");
        assert_eq!(Badge::Warn.symbol(false), "[WARN]");
        assert_eq!(Badge::Err.symbol(false), "[ERR]");
    }

    #[test]
    fn test_unicode_symbols() {
        assert_eq!(Badge::Ok.symbol(true), "[\u{2713}]");
        assert_eq!(Badge::Err.symbol(true), "[\u{2717}]");
    }

    #[test]
    fn test_paint_respects_color_switch() {
        assert_eq!(paint("sealed", Badge::Ok.style(), false), "sealed");
        let colored = paint("sealed", Badge::Ok.style(), true);
        assert!(colored.contains("sealed"));
        assert!(colored.contains('\x1b'));
    }
}
