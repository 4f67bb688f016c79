//! Decimal padding for fixed-width table display
//!
//! Post-processes a rendered number so fractional columns line up. Applied
//! only when the text actually contains a fractional separator; integers
//! are left alone.

use serde::{Deserialize, Serialize};

/// How many fractional digits a table column wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionPolicy {
    pub min_decimals: usize,
}

/// Pad the fractional part of `text` with zeros up to the policy's width.
///
/// Text without a fractional separator is returned unchanged; a fraction
/// already at or past the width is never truncated.
pub fn pad(text: &str, policy: &PrecisionPolicy) -> String {
    let Some((_, frac)) = text.split_once('.') else {
        return text.to_string();
    };

    let missing = policy.min_decimals.saturating_sub(frac.len());
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat('0').take(missing));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_fractions() {
        let policy = PrecisionPolicy { min_decimals: 3 };
        assert_eq!(pad("1.5", &policy), "1.500");
        assert_eq!(pad("-1.03", &policy), "-1.030");
    }

    #[test]
    fn test_integers_pass_through() {
        let policy = PrecisionPolicy { min_decimals: 3 };
        assert_eq!(pad("900", &policy), "900");
    }

    #[test]
    fn test_long_fractions_are_not_truncated() {
        let policy = PrecisionPolicy { min_decimals: 1 };
        assert_eq!(pad("1.034", &policy), "1.034");
    }
}
