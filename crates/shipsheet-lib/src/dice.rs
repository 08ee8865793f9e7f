//! Dice-notation parsing and scaling.
//!
//! Damage and shots values are either a plain integer (`"5"`) or dice
//! notation of the form `{count}d{size}` with an optional `+{bonus}`
//! (`"2d6+3"`). Scaling multiplies the count and bonus while leaving the
//! die size untouched, which is how a mount firing N copies of the same
//! weapon rolls its combined damage.

use std::fmt;

use crate::error::{Error, Result};

/// A parsed `{count}d{size}[+{bonus}]` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    pub count: u32,
    pub size: u32,
    pub bonus: Option<u32>,
}

impl DiceExpr {
    /// Parse dice notation. Plain integers are not accepted here; callers
    /// that allow them check for a flat value first.
    pub fn parse(value: &str) -> Result<Self> {
        let malformed = || Error::MalformedDice {
            value: value.to_string(),
        };

        let (count_part, rest) = value.split_once('d').ok_or_else(malformed)?;
        let count: u32 = count_part.parse().map_err(|_| malformed())?;

        let (size_part, bonus_part) = match rest.split_once('+') {
            Some((size, bonus)) => (size, Some(bonus)),
            None => (rest, None),
        };
        let size: u32 = size_part.parse().map_err(|_| malformed())?;
        let bonus = match bonus_part {
            Some(raw) => Some(raw.parse().map_err(|_| malformed())?),
            None => None,
        };

        Ok(Self { count, size, bonus })
    }

    /// Multiply the dice count and bonus, leaving the die size unchanged.
    pub fn scale(self, multiplier: u32) -> Self {
        Self {
            count: self.count * multiplier,
            size: self.size,
            bonus: self.bonus.map(|b| b * multiplier),
        }
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.size)?;
        if let Some(bonus) = self.bonus {
            write!(f, "+{}", bonus)?;
        }
        Ok(())
    }
}

/// Scale a dice-notation or flat-integer string by a mount's replication
/// count.
///
/// A multiplier of 1 is the identity and returns the input unchanged,
/// byte for byte, so non-canonical spellings in catalog data survive
/// untouched.
pub fn scale_dice(value: &str, multiplier: u32) -> Result<String> {
    if multiplier == 1 {
        return Ok(value.to_string());
    }
    if let Ok(flat) = value.parse::<u32>() {
        return Ok((flat * multiplier).to_string());
    }
    Ok(DiceExpr::parse(value)?.scale(multiplier).to_string())
}

/// Whether a string is a flat integer or valid dice notation.
pub fn is_dice_notation(value: &str) -> bool {
    value.parse::<u32>().is_ok() || DiceExpr::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_count_and_bonus_but_not_size() {
        assert_eq!(scale_dice("2d6+3", 3).unwrap(), "6d6+9");
        assert_eq!(scale_dice("1d8", 2).unwrap(), "2d8");
    }

    #[test]
    fn scales_flat_integers_directly() {
        assert_eq!(scale_dice("5", 4).unwrap(), "20");
    }

    #[test]
    fn multiplier_of_one_is_identity() {
        assert_eq!(scale_dice("1d8", 1).unwrap(), "1d8");
        // Identity short-circuits before parsing, so even junk survives.
        assert_eq!(scale_dice("not dice", 1).unwrap(), "not dice");
    }

    #[test]
    fn rejects_malformed_notation() {
        let err = scale_dice("2x6", 2).unwrap_err();
        assert!(matches!(err, Error::MalformedDice { .. }));
        assert!(DiceExpr::parse("d6").is_err());
        assert!(DiceExpr::parse("2d").is_err());
        assert!(DiceExpr::parse("2d6+").is_err());
    }

    #[test]
    fn notation_check_accepts_both_forms() {
        assert!(is_dice_notation("4"));
        assert!(is_dice_notation("2d6+3"));
        assert!(!is_dice_notation("two dice"));
    }
}
