use std::str::FromStr;

use crate::LedgerError;

/// Decimal money input, resolved to integer minor units (cents).
///
/// Everything inside the crate accumulates raw `i64` cents; `Amount` exists
/// for the one place money crosses a human boundary: parsing decimal strings
/// out of request payloads. Accepts `.` or `,` as decimal separator and an
/// optional leading sign, rejects more than two fractional digits.
///
/// ```rust
/// use ledger::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap().minor(), 1000);
/// assert_eq!("-10,5".parse::<Amount>().unwrap().minor(), -1050);
/// assert!("12.345".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Amount(i64);

impl Amount {
    /// The parsed value in minor units, signed.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason: &str| LedgerError::InvalidAmount(format!("{reason}: {s:?}"));

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix(['-', '+']) {
            Some(rest) => (trimmed.starts_with('-'), rest),
            None => (false, trimmed),
        };
        if digits.is_empty() {
            return Err(reject("empty amount"));
        }

        let (units, frac) = digits.split_once(['.', ',']).unwrap_or((digits, ""));
        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject("not a number"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject("not a number"));
        }
        if frac.len() > 2 {
            return Err(reject("at most two decimals"));
        }

        let units: i64 = units.parse().map_err(|_| reject("amount too large"))?;
        let cents = match frac.len() {
            0 => 0,
            1 => i64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => {
                let bytes = frac.as_bytes();
                i64::from(bytes[0] - b'0') * 10 + i64::from(bytes[1] - b'0')
            }
        };

        let magnitude = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| reject("amount too large"))?;

        Ok(Amount(if negative { -magnitude } else { magnitude }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Amount>().unwrap().minor(), 1000);
        assert_eq!("10.5".parse::<Amount>().unwrap().minor(), 1050);
        assert_eq!("10,50".parse::<Amount>().unwrap().minor(), 1050);
        assert_eq!("-0.01".parse::<Amount>().unwrap().minor(), -1);
        assert_eq!("+1.00".parse::<Amount>().unwrap().minor(), 100);
        assert_eq!("  2.30 ".parse::<Amount>().unwrap().minor(), 230);
        assert_eq!("0".parse::<Amount>().unwrap().minor(), 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", " ", "-", "+", ".", "12.345", "1.2.3", "1,2,3", "ten", "--1", "1-"] {
            assert!(bad.parse::<Amount>().is_err(), "accepted {bad:?}");
        }
    }
}
