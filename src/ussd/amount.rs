// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer amount parsing and fixed-rate NGN conversion.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Fraction digits shown for converted values.
const DISPLAY_FRACTION_DIGITS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is not a decimal number")]
    Malformed,
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("converted amount is out of range")]
    OutOfRange,
}

/// A parsed amount and its value in the secondary currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub amount: Decimal,
    pub converted: Decimal,
}

impl Quote {
    /// Amount as the subscriber typed it, minus insignificant zeros.
    pub fn display_amount(&self) -> String {
        self.amount.normalize().to_string()
    }

    pub fn display_converted(&self) -> String {
        format_grouped(self.converted)
    }
}

/// Parses step tokens as token amounts and converts them at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountParser {
    rate: Decimal,
}

impl AmountParser {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Parse a plain decimal literal (`10`, `26.6`, `.5`) and convert it.
    ///
    /// Exponents, digit separators and surrounding whitespace are refused.
    pub fn parse(&self, token: &str) -> Result<Quote, AmountError> {
        let unsigned = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
        let well_formed = !unsigned.is_empty()
            && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
            && unsigned.chars().filter(|c| *c == '.').count() <= 1
            && unsigned.chars().any(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(AmountError::Malformed);
        }

        let amount = Decimal::from_str(token).map_err(|_| AmountError::Malformed)?;
        if amount <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }

        let converted = amount
            .checked_mul(self.rate)
            .ok_or(AmountError::OutOfRange)?;

        Ok(Quote { amount, converted })
    }
}

/// Format with comma thousands grouping and at most three fraction digits.
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(DISPLAY_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let plain = rounded.abs().to_string();
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
