//! Fixed-point tag weights
//!
//! Weights are stored as a signed count of thousandths rather than as a
//! binary float, so chains of enhancement steps (`+0.1`, `+0.05`, ...)
//! stay exact and render without drift.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Multiplier attached to a tag. Defaults to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(i32);

const SCALE: i32 = 1000;

impl Weight {
    /// The neutral weight; tags render bare at this value.
    pub const ONE: Weight = Weight(SCALE);

    /// Convert from a float, rounding to thousandths.
    pub fn from_f64(value: f64) -> Self {
        let scaled = (value * SCALE as f64).round();
        Weight(scaled.clamp(i32::MIN as f64, i32::MAX as f64) as i32)
    }

    /// Parse a weight literal. Any finite float literal is accepted;
    /// non-numeric or non-finite text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let value: f64 = text.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self::from_f64(value))
    }

    /// Weight derived from a parenthesis nesting depth: each enclosing
    /// pair adds 0.1 on top of 1.0.
    pub fn from_nesting(pairs: usize) -> Self {
        let pairs = pairs.min(i32::MAX as usize) as i32;
        Weight(SCALE.saturating_add(pairs.saturating_mul(SCALE / 10)))
    }

    /// True when the weight is exactly 1.0.
    pub fn is_one(self) -> bool {
        self.0 == SCALE
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::ONE
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Weight {
    /// Minimal decimal form with at least one fractional digit:
    /// `1.0`, `1.2`, `0.5`, `1.25`, `-0.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u32;
        let mut frac = format!("{:03}", abs % SCALE as u32);
        while frac.len() > 1 && frac.ends_with('0') {
            frac.pop();
        }
        write!(f, "{}{}.{}", sign, whole, frac)
    }
}
