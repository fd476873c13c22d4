//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Currency rendering with the configured symbol, two decimals.
/// A negative amount keeps the sign in front of the symbol.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Hours rendered for totals: "7.50h".
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}h", hours)
}
