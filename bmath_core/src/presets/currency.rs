//! Currency Presets
//!
//! Currency display defaults keyed by ISO code. This is the only place in
//! the engine where display rounding happens: calculators carry unrounded
//! f64 values, and `format_amount` rounds at the formatting boundary.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported currency codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrencyCode {
    /// US Dollar
    #[default]
    #[serde(rename = "USD")]
    Usd,
    /// Euro
    #[serde(rename = "EUR")]
    Eur,
    /// British Pound
    #[serde(rename = "GBP")]
    Gbp,
    /// Japanese Yen
    #[serde(rename = "JPY")]
    Jpy,
    /// Canadian Dollar
    #[serde(rename = "CAD")]
    Cad,
    /// Australian Dollar
    #[serde(rename = "AUD")]
    Aud,
}

/// Display formatting style for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStyle {
    /// Symbol prefixed to amounts
    pub symbol: &'static str,
    /// Decimal places shown
    pub decimals: u8,
    /// Thousands grouping separator
    pub thousands_sep: &'static str,
    /// Decimal separator
    pub decimal_sep: &'static str,
}

impl CurrencyCode {
    /// All currency codes for UI selection
    pub const ALL: [CurrencyCode; 6] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Jpy,
        CurrencyCode::Cad,
        CurrencyCode::Aud,
    ];

    /// Look up the display style for this currency
    pub fn style(&self) -> CurrencyStyle {
        match self {
            CurrencyCode::Usd => CurrencyStyle {
                symbol: "$",
                decimals: 2,
                thousands_sep: ",",
                decimal_sep: ".",
            },
            CurrencyCode::Eur => CurrencyStyle {
                symbol: "€",
                decimals: 2,
                thousands_sep: ".",
                decimal_sep: ",",
            },
            CurrencyCode::Gbp => CurrencyStyle {
                symbol: "£",
                decimals: 2,
                thousands_sep: ",",
                decimal_sep: ".",
            },
            CurrencyCode::Jpy => CurrencyStyle {
                symbol: "¥",
                decimals: 0,
                thousands_sep: ",",
                decimal_sep: ".",
            },
            CurrencyCode::Cad => CurrencyStyle {
                symbol: "C$",
                decimals: 2,
                thousands_sep: ",",
                decimal_sep: ".",
            },
            CurrencyCode::Aud => CurrencyStyle {
                symbol: "A$",
                decimals: 2,
                thousands_sep: ",",
                decimal_sep: ".",
            },
        }
    }

    /// Get the ISO code string (e.g., "USD")
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Aud => "AUD",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "USD" | "$" | "DOLLAR" => Ok(CurrencyCode::Usd),
            "EUR" | "€" | "EURO" => Ok(CurrencyCode::Eur),
            "GBP" | "£" | "POUND" => Ok(CurrencyCode::Gbp),
            "JPY" | "¥" | "YEN" => Ok(CurrencyCode::Jpy),
            "CAD" => Ok(CurrencyCode::Cad),
            "AUD" => Ok(CurrencyCode::Aud),
            _ => Err(CalcError::preset_not_found(s)),
        }
    }

    /// Format an amount for display in this currency.
    ///
    /// Rounds to the currency's decimal places and applies grouping. This is
    /// the output formatting boundary; no other code rounds money.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bmath_core::presets::CurrencyCode;
    ///
    /// assert_eq!(CurrencyCode::Usd.format_amount(1234.5), "$1,234.50");
    /// assert_eq!(CurrencyCode::Jpy.format_amount(1234.6), "¥1,235");
    /// assert_eq!(CurrencyCode::Eur.format_amount(-9.99), "-€9,99");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        let style = self.style();
        let negative = amount < 0.0;
        let rounded = format!("{:.*}", style.decimals as usize, amount.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (rounded, None),
        };

        // Group the integer digits in threes from the right
        let digits = int_part.as_bytes();
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, b) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(style.thousands_sep);
            }
            grouped.push(*b as char);
        }

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(style.symbol);
        out.push_str(&grouped);
        if let Some(frac) = frac_part {
            out.push_str(style.decimal_sep);
            out.push_str(&frac);
        }
        out
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
