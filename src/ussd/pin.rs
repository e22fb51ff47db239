// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Strength rules for the 6-digit transaction PIN.

use thiserror::Error;

/// Required PIN length in digits.
pub const PIN_LENGTH: usize = 6;

/// Length of a digit run that makes a PIN guessable.
const RUN_LENGTH: usize = 4;

/// Why a PIN was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PinRejection {
    #[error("PIN must be exactly {PIN_LENGTH} digits")]
    Format,
    #[error("PIN must not repeat a single digit")]
    Repeated,
    #[error("PIN must not contain a run of {RUN_LENGTH} sequential digits")]
    Sequential,
}

/// Validate a candidate PIN.
///
/// Rejects anything that is not exactly six ASCII digits, six copies of the
/// same digit, or a PIN containing an ascending or descending run of four
/// consecutive digits anywhere (`481234`, `098765`).
pub fn validate(pin: &str) -> Result<(), PinRejection> {
    let digits = pin.as_bytes();
    if digits.len() != PIN_LENGTH || !digits.iter().all(u8::is_ascii_digit) {
        return Err(PinRejection::Format);
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return Err(PinRejection::Repeated);
    }

    if has_sequential_run(digits) {
        return Err(PinRejection::Sequential);
    }

    Ok(())
}

pub fn is_strong(pin: &str) -> bool {
    validate(pin).is_ok()
}

fn has_sequential_run(digits: &[u8]) -> bool {
    digits.windows(RUN_LENGTH).any(|window| {
        let ascending = window.windows(2).all(|pair| pair[1] == pair[0] + 1);
        let descending = window.windows(2).all(|pair| pair[0] == pair[1] + 1);
        ascending || descending
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_unpatterned_pins() {
        assert!(is_strong("048213"));
        assert!(is_strong("482913"));
        assert!(is_strong("135790"));
    }

    #[test]
    fn rejects_bad_format() {
        assert_eq!(validate(""), Err(PinRejection::Format));
        assert_eq!(validate("48291"), Err(PinRejection::Format));
        assert_eq!(validate("4829135"), Err(PinRejection::Format));
        assert_eq!(validate("48a913"), Err(PinRejection::Format));
        assert_eq!(validate(" 48291"), Err(PinRejection::Format));
        assert_eq!(validate("１２３４５６"), Err(PinRejection::Format));
    }

    #[test]
    fn rejects_repeated_digit() {
        assert_eq!(validate("111111"), Err(PinRejection::Repeated));
        assert_eq!(validate("000000"), Err(PinRejection::Repeated));
    }

    #[test]
    fn rejects_full_sequences() {
        assert_eq!(validate("123456"), Err(PinRejection::Sequential));
        assert_eq!(validate("654321"), Err(PinRejection::Sequential));
    }

    #[test]
    fn rejects_embedded_runs() {
        assert_eq!(validate("481234"), Err(PinRejection::Sequential));
        assert_eq!(validate("098765"), Err(PinRejection::Sequential));
        assert_eq!(validate("901239"), Err(PinRejection::Sequential));
        assert_eq!(validate("773210"), Err(PinRejection::Sequential));
    }

    #[test]
    fn three_digit_runs_are_allowed() {
        assert!(is_strong("123905"));
        assert!(is_strong("987102"));
    }

    #[test]
    fn runs_do_not_wrap_around() {
        // 9 -> 0 is not a step of one
        assert!(is_strong("890152"));
    }
}
