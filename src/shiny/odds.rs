use crate::numeric::round_to;
use std::fmt;

/// Shiny odds as `rolls / base`.
///
/// Fixed-odds methods are stored as one roll against their fixed denominator,
/// so every result has the same shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct ShinyOdds {
    pub rolls: u32,
    pub base: u32,
    /// `rolls / base * 100`, 4 decimals.
    pub percentage: f64,
}

impl ShinyOdds {
    /// `rolls` is raised to 1 and capped at `base`.
    pub fn new(rolls: u32, base: u32) -> Self {
        let base = base.max(1);
        let rolls = rolls.clamp(1, base);
        Self { rolls, base, percentage: round_to(f64::from(rolls) / f64::from(base) * 100.0, 4) }
    }

    /// A flat "1 in `one_in`" chance.
    pub fn fixed(one_in: u32) -> Self {
        Self::new(1, one_in)
    }

    pub fn probability(&self) -> f64 {
        f64::from(self.rolls) / f64::from(self.base)
    }

    pub fn fraction(&self) -> OddsFraction {
        if self.base % self.rolls == 0 {
            OddsFraction::Exact { one_in: self.base / self.rolls }
        } else {
            let one_in = (f64::from(self.base) / f64::from(self.rolls)).round() as u32;
            OddsFraction::Approximate { one_in, rolls: self.rolls, base: self.base }
        }
    }
}

impl fmt::Display for ShinyOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fraction().fmt(f)
    }
}

/// Display form of a [`ShinyOdds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsFraction {
    /// `1/one_in`, exactly.
    Exact { one_in: u32 },
    /// `~1/one_in (rolls/base)`.
    Approximate { one_in: u32, rolls: u32, base: u32 },
}

impl OddsFraction {
    pub fn one_in(&self) -> u32 {
        match *self {
            OddsFraction::Exact { one_in } | OddsFraction::Approximate { one_in, .. } => one_in,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, OddsFraction::Exact { .. })
    }
}

impl fmt::Display for OddsFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsFraction::Exact { one_in } => write!(f, "1/{one_in}"),
            OddsFraction::Approximate { one_in, rolls, base } => {
                write!(f, "~1/{one_in} ({rolls}/{base})")
            }
        }
    }
}
