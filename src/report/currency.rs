//! Explicit currency formatting for rendered output
//!
//! The format travels with each render call; nothing reads process-wide
//! locale state.

use serde::{Deserialize, Serialize};

/// Currency rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol prefixed to formatted amounts
    pub symbol: String,

    /// Digits after the decimal point
    pub decimal_places: usize,
}

impl CurrencyFormat {
    /// Create a format with the given symbol and two decimal places
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places: 2,
        }
    }

    /// Format an amount with thousands grouping, e.g. `₹1,234,567.89`
    pub fn format(&self, amount: f64) -> String {
        let digits = format!("{:.*}", self.decimal_places, amount.abs());
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if amount < 0.0 { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{}{}{}.{}", sign, self.symbol, grouped, frac),
            None => format!("{}{}{}", sign, self.symbol, grouped),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("₹")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        let inr = CurrencyFormat::default();

        assert_eq!(inr.format(0.0), "₹0.00");
        assert_eq!(inr.format(999.0), "₹999.00");
        assert_eq!(inr.format(1000.0), "₹1,000.00");
        assert_eq!(inr.format(12825.03), "₹12,825.03");
        assert_eq!(inr.format(1_234_567.891), "₹1,234,567.89");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        let usd = CurrencyFormat::new("$");
        assert_eq!(usd.format(999.999), "$1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        let usd = CurrencyFormat::new("$");
        assert_eq!(usd.format(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_zero_decimal_places() {
        let whole = CurrencyFormat {
            symbol: "$".to_string(),
            decimal_places: 0,
        };
        assert_eq!(whole.format(1_234_567.89), "$1,234,568");
    }
}
