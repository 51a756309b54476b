/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Paid shifts render green, pending ones yellow.
pub fn color_for_paid(paid: bool) -> &'static str {
    if paid { GREEN } else { YELLOW }
}

/// Render a location's `#RRGGBB` display color as a 24-bit ANSI swatch.
/// Invalid colors fall back to grey.
pub fn swatch(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m■{RESET}"),
        None => format!("{GREY}■{RESET}"),
    }
}

pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 || !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(h.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(h.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(h.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Returns a grey-wrapped value when it is empty, otherwise the value itself.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#2196F3"), Some((0x21, 0x96, 0xF3)));
        assert_eq!(parse_hex("2196F3"), None);
        assert_eq!(parse_hex("#21"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
    }
}
