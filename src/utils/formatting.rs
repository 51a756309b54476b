//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Format an amount with thousands separators in the pt-BR style
/// (`R$ 1.234,50` for BRL, `<CODE> 1.234,50` otherwise).
pub fn format_money(amount: f64, currency: &str) -> String {
    let symbol = match currency.to_uppercase().as_str() {
        "BRL" => "R$".to_string(),
        "USD" => "US$".to_string(),
        "EUR" => "€".to_string(),
        other => other.to_string(),
    };

    let cents = (amount.abs() * 100.0).round() as u64;
    let int_part = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol} {grouped},{frac:02}")
}

pub fn paid_label(paid: bool) -> &'static str {
    if paid { "Paid" } else { "Pending" }
}

/// First 8 characters of a record id, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Cut a cell to `width` visible characters, marking the cut with `…`.
pub fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
