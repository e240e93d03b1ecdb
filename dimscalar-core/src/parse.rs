//! Text parsing: `"<number> <unit text>"` into a scalar of a known kind.

use crate::dimension::Dimension;
use crate::error::{ParseFailure, QuantityError, Result};
use crate::kind::QuantityKind;
use crate::scalar::Scalar;
use crate::unit::{AnyUnit, Unit};

/// Splits `text` into its longest leading numeric literal and the trimmed remainder.
///
/// The literal is an optional sign, digits with an optional fraction, and an exponent only when the exponent has
/// digits (`"5e"` yields `"5"` followed by `"e"`).
pub(crate) fn split_number(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    Some((&text[..end], text[end..].trim()))
}

/// Splits and parses the number, reporting failures against `kind`.
fn read_number(kind: QuantityKind, text: &str) -> Result<(f32, &str)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::parse(kind, text, ParseFailure::Empty));
    }
    let (number, rest) = split_number(trimmed)
        .ok_or_else(|| QuantityError::parse(kind, text, ParseFailure::MissingNumber))?;
    let value = number
        .parse::<f32>()
        .map_err(|_| QuantityError::parse(kind, text, ParseFailure::MissingNumber))?;
    Ok((value, rest))
}

/// Parses text into a scalar of the statically known type `S`.
pub(crate) fn parse_scalar<S: Scalar>(text: &str) -> Result<S> {
    let kind = <S::Dim as Dimension>::KIND;
    let parsed = read_number(kind, text).and_then(|(value, unit_text)| {
        Unit::<S::Dim>::lookup(unit_text)
            .map(|unit| S::instantiate(value, unit))
            .ok_or_else(|| {
                QuantityError::parse(kind, text, ParseFailure::UnknownUnit(unit_text.to_string()))
            })
    });
    if let Err(e) = &parsed {
        log::debug!("{}", e);
    }
    parsed
}

/// Parses text into a value and a unit of a kind known only at runtime.
pub(crate) fn parse_any(kind: QuantityKind, text: &str) -> Result<(f32, AnyUnit)> {
    let parsed = read_number(kind, text).and_then(|(value, unit_text)| {
        kind.find_unit(unit_text)
            .map(|unit| (value, unit))
            .ok_or_else(|| {
                QuantityError::parse(kind, text, ParseFailure::UnknownUnit(unit_text.to_string()))
            })
    });
    if let Err(e) = &parsed {
        log::debug!("{}", e);
    }
    parsed
}
