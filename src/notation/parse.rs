//! Shorthand parser.

use crate::error::{CalcError, Result};

/// Parse shorthand text such as `4k7`, `4.7k` or `10` into ohms.
pub fn parse_shorthand(text: &str) -> Result<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let invalid = || CalcError::invalid_shorthand(text.trim());

    let Some(split) = cleaned.find(|c: char| c.is_ascii_alphabetic()) else {
        if !is_decimal(&cleaned) {
            return Err(invalid());
        }
        return cleaned.parse::<f64>().map_err(|_| invalid());
    };

    let (head, rest) = cleaned.split_at(split);
    let mut rest_chars = rest.chars();
    let multiplier = rest_chars
        .next()
        .and_then(suffix_multiplier)
        .ok_or_else(invalid)?;
    let tail = rest_chars.as_str();

    // "4.7k" keeps its own decimal point, "4k7" takes one at the suffix
    let mantissa = if tail.is_empty() {
        if !is_decimal(head) {
            return Err(invalid());
        }
        head.to_string()
    } else {
        if !is_digits(head) || !is_digits(tail) {
            return Err(invalid());
        }
        format!("{head}.{tail}")
    };

    let value = mantissa.parse::<f64>().map_err(|_| invalid())?;
    Ok((value * multiplier).trunc())
}

fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'k' => Some(1e3),
        'm' => Some(1e6),
        'g' => Some(1e9),
        _ => None,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn is_decimal(text: &str) -> bool {
    match text.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(text),
    }
}
