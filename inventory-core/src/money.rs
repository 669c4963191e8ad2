use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount in the store currency.
///
/// Fetched records carry display strings such as `"$1,234.56"`; see [`Amount`]
/// for how the served text and the parsed number travel together.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Lenient parse for fetched data: every character outside `[0-9.]` is dropped,
    /// then the longest leading float is read. Anything unreadable becomes zero.
    pub fn parse_lenient(raw: &str) -> Self {
        let kept: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        Money(leading_float(&kept))
    }

    /// Strict parse for user input. Currency symbols, grouping commas and
    /// surrounding whitespace are accepted; anything else is rejected.
    pub fn parse_strict(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }
        let amount = cleaned.parse::<f64>().ok()?;
        if amount.is_finite() && amount >= 0.0 {
            Some(Money(amount))
        } else {
            None
        }
    }

    /// Display form used in the grid, e.g. `$1,234.5`.
    pub fn display(&self) -> String {
        format!("${}", format_grouped(self.0, 2))
    }

    /// Plain form used to seed editor inputs (no symbol, no grouping).
    pub fn plain(&self) -> String {
        trim_fraction(format!("{:.2}", self.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

/// A display-formatted amount exactly as served (`"$1,234.56"`, `"€5"`,
/// `"Call for price"`) together with the number read from it. The grid shows
/// `text`; sorting, stats and the editor use `money`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Amount {
    text: String,
    money: Money,
}

impl Amount {
    /// Keep `text` verbatim and read its amount leniently.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let money = Money::parse_lenient(&text);
        Self { text, money }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn amount(&self) -> f64 {
        self.money.0
    }

    /// Replace the amount. The served text survives when the amount is unchanged.
    pub fn with_money(self, money: Money) -> Self {
        if money == self.money {
            self
        } else {
            money.into()
        }
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Self {
            text: money.display(),
            money,
        }
    }
}

/// Reads the longest prefix of `s` that forms a decimal number (digits with at
/// most one dot). Returns 0 when the prefix holds no digit.
pub fn leading_float(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Formats `amount` with `,` thousands separators and at most
/// `max_fraction_digits` decimals, trailing zeros dropped (`1234.5` -> `1,234.5`).
pub fn format_grouped(amount: f64, max_fraction_digits: usize) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let negative = amount < 0.0;
    let fixed = trim_fraction(format!("{:.*}", max_fraction_digits, amount.abs()));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (fixed, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let mut out = String::new();
    if negative && (grouped != "0" || frac_part.is_some()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn trim_fraction(fixed: String) -> String {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
