// 💱 Redenomination - Old pound → New pound (100:1)
// Currency eras, conversion direction and the banknotes in circulation

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 100 old pounds = 1 new pound
pub const CONVERSION_RATE: f64 = 100.0;

/// Banknotes of the old pound still in circulation
pub const OLD_DENOMINATIONS: [u64; 5] = [1000, 2000, 5000, 10000, 50000];

/// Banknotes of the new pound
pub const NEW_DENOMINATIONS: [u64; 6] = [5, 10, 25, 50, 100, 500];

// ============================================================================
// CURRENCY ERA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyEra {
    /// Pre-redenomination pound
    Old,

    /// Post-redenomination pound
    New,
}

impl CurrencyEra {
    /// Map the boolean flag used by callers (true = new pound)
    pub fn from_is_new(is_new: bool) -> Self {
        if is_new {
            CurrencyEra::New
        } else {
            CurrencyEra::Old
        }
    }

    /// Feminine adjective agreeing with ليرة
    pub fn label(&self) -> &'static str {
        match self {
            CurrencyEra::Old => "قديمة",
            CurrencyEra::New => "جديدة",
        }
    }

    /// Singular noun phrase, e.g. "ليرة سورية جديدة"
    pub fn noun_phrase(&self) -> &'static str {
        match self {
            CurrencyEra::Old => "ليرة سورية قديمة",
            CurrencyEra::New => "ليرة سورية جديدة",
        }
    }

    /// Short code for internal use
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyEra::Old => "old",
            CurrencyEra::New => "new",
        }
    }
}

impl fmt::Display for CurrencyEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CurrencyEra {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "old" => Ok(CurrencyEra::Old),
            "new" => Ok(CurrencyEra::New),
            other => bail!("Unknown currency era: {:?} (expected old or new)", other),
        }
    }
}

// ============================================================================
// DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    OldToNew,
    NewToOld,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::OldToNew
    }
}

impl Direction {
    pub fn source_era(&self) -> CurrencyEra {
        match self {
            Direction::OldToNew => CurrencyEra::Old,
            Direction::NewToOld => CurrencyEra::New,
        }
    }

    pub fn target_era(&self) -> CurrencyEra {
        match self {
            Direction::OldToNew => CurrencyEra::New,
            Direction::NewToOld => CurrencyEra::Old,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Direction::OldToNew => Direction::NewToOld,
            Direction::NewToOld => Direction::OldToNew,
        }
    }

    /// Human-readable name for display
    pub fn title(&self) -> &'static str {
        match self {
            Direction::OldToNew => "من القديمة إلى الجديدة",
            Direction::NewToOld => "من الجديدة إلى القديمة",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Direction::OldToNew => "old-to-new",
            Direction::NewToOld => "new-to-old",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "old-to-new" => Ok(Direction::OldToNew),
            "new-to-old" => Ok(Direction::NewToOld),
            other => bail!(
                "Unknown direction: {:?} (expected old-to-new or new-to-old)",
                other
            ),
        }
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert an amount between eras
pub fn convert(amount: f64, direction: Direction) -> f64 {
    match direction {
        Direction::OldToNew => amount / CONVERSION_RATE,
        Direction::NewToOld => amount * CONVERSION_RATE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub direction: Direction,
    pub input: f64,
    pub output: f64,
}

impl Conversion {
    pub fn new(input: f64, direction: Direction) -> Self {
        Conversion {
            direction,
            input,
            output: convert(input, direction),
        }
    }

    /// Fraction digits shown for the converted amount.
    /// New pounds keep piastres, old pounds are whole.
    pub fn display_fraction_digits(&self) -> usize {
        match self.direction {
            Direction::OldToNew => 2,
            Direction::NewToOld => 0,
        }
    }
}

/// Banknotes for an era
pub fn denominations(era: CurrencyEra) -> &'static [u64] {
    match era {
        CurrencyEra::Old => &OLD_DENOMINATIONS,
        CurrencyEra::New => &NEW_DENOMINATIONS,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_labels() {
        assert_eq!(CurrencyEra::Old.noun_phrase(), "ليرة سورية قديمة");
        assert_eq!(CurrencyEra::New.noun_phrase(), "ليرة سورية جديدة");
        assert_eq!(CurrencyEra::from_is_new(true), CurrencyEra::New);
        assert_eq!(CurrencyEra::from_is_new(false), CurrencyEra::Old);
    }

    #[test]
    fn test_era_parse() {
        assert_eq!("OLD".parse::<CurrencyEra>().unwrap(), CurrencyEra::Old);
        assert_eq!(" new ".parse::<CurrencyEra>().unwrap(), CurrencyEra::New);
        assert!("euro".parse::<CurrencyEra>().is_err());
    }

    #[test]
    fn test_direction_parse_and_toggle() {
        let d: Direction = "new-to-old".parse().unwrap();
        assert_eq!(d, Direction::NewToOld);
        assert_eq!(d.toggle(), Direction::OldToNew);
        assert_eq!(d.source_era(), CurrencyEra::New);
        assert_eq!(d.target_era(), CurrencyEra::Old);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(5000.0, Direction::OldToNew), 50.0);
        assert_eq!(convert(50.0, Direction::NewToOld), 5000.0);
        assert_eq!(convert(150.0, Direction::OldToNew), 1.5);
    }

    #[test]
    fn test_conversion_display_digits() {
        let c = Conversion::new(1234.0, Direction::OldToNew);
        assert_eq!(c.output, 12.34);
        assert_eq!(c.display_fraction_digits(), 2);
        assert_eq!(Conversion::new(1.0, Direction::NewToOld).display_fraction_digits(), 0);
    }

    #[test]
    fn test_denominations() {
        assert_eq!(denominations(CurrencyEra::Old), &[1000, 2000, 5000, 10000, 50000]);
        assert_eq!(denominations(CurrencyEra::New).len(), 6);
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&CurrencyEra::New).unwrap(), "\"new\"");
        assert_eq!(serde_json::to_string(&Direction::OldToNew).unwrap(), "\"old-to-new\"");
        let d: Direction = serde_json::from_str("\"new-to-old\"").unwrap();
        assert_eq!(d, Direction::NewToOld);
    }
}
