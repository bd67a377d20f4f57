//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Human label for a strength score.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0..=19 => "Weak",
        20..=39 => "Regular",
        40..=59 => "Good",
        60..=79 => "Strong",
        _ => "Very Strong",
    }
}

/// Fixed-width meter for a 0-100 score, e.g. `[#####-----]`.
pub fn strength_meter(score: u8, unicode: bool) -> String {
    const CELLS: usize = 10;
    let filled = (usize::from(score.min(100)) * CELLS) / 100;
    let (on, off) = if unicode {
        ("\u{2588}", "\u{2591}") // █ ░
    } else {
        ("#", "-")
    };
    format!("[{}{}]", on.repeat(filled), off.repeat(CELLS - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_strength_label_bands() {
        assert_eq!(strength_label(0), "Weak");
        assert_eq!(strength_label(19), "Weak");
        assert_eq!(strength_label(21), "Regular");
        assert_eq!(strength_label(50), "Good");
        assert_eq!(strength_label(75), "Strong");
        assert_eq!(strength_label(100), "Very Strong");
    }

    #[test]
    fn test_strength_meter() {
        assert_eq!(strength_meter(0, false), "[----------]");
        assert_eq!(strength_meter(50, false), "[#####-----]");
        assert_eq!(strength_meter(100, false), "[##########]");
    }
}
