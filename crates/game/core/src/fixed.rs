//! Fixed-point fractions for deterministic arithmetic.
//!
//! Every multiplier, reduction, and probability in the engine is expressed in
//! basis points so that independently running copies of a match (client,
//! server, transcript replay) produce identical integers. No floating point
//! is used on any path that influences hp, energy, guard, or outcome.

/// A fraction expressed in basis points (`10_000` = 1.0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bps(pub u32);

impl Bps {
    /// Denominator of every basis-point value.
    pub const SCALE: u32 = 10_000;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(Self::SCALE);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Build from a whole percentage (`percent(25)` = 0.25).
    pub const fn percent(value: u32) -> Self {
        Self(value * 100)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply `value` by this fraction and floor the result.
    pub const fn apply(self, value: u32) -> u32 {
        let scaled = (value as u64 * self.0 as u64) / Self::SCALE as u64;
        if scaled > u32::MAX as u64 {
            u32::MAX
        } else {
            scaled as u32
        }
    }

    /// Multiplicative composition (`1.5 ∘ 1.2 = 1.8`), floored to a basis point.
    pub const fn compose(self, other: Self) -> Self {
        let product = (self.0 as u64 * other.0 as u64) / Self::SCALE as u64;
        if product > u32::MAX as u64 {
            Self(u32::MAX)
        } else {
            Self(product as u32)
        }
    }

    /// Additive accumulation of a fraction, capped at 1.0.
    pub const fn add_capped(self, other: Self) -> Self {
        let sum = self.0.saturating_add(other.0);
        if sum > Self::SCALE {
            Self::ONE
        } else {
            Self(sum)
        }
    }

    /// `1.0 - self`, floored at zero.
    pub const fn complement(self) -> Self {
        Self(Self::SCALE.saturating_sub(self.0))
    }
}

/// Multiply `value` by every factor in `chain`, flooring exactly once.
///
/// Intermediate products are carried in `u128`, so a chain of up to four
/// factors can never overflow for any `u32` input.
pub fn apply_chain(value: u32, chain: &[Bps]) -> u32 {
    let mut numerator = value as u128;
    let mut denominator = 1u128;
    for factor in chain {
        numerator *= factor.0 as u128;
        denominator *= Bps::SCALE as u128;
    }
    let result = numerator / denominator;
    result.min(u32::MAX as u128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_floors() {
        assert_eq!(Bps::new(15_000).apply(25), 37);
        assert_eq!(Bps::percent(60).apply(25), 15);
        assert_eq!(Bps::ONE.apply(7), 7);
        assert_eq!(Bps::ZERO.apply(u32::MAX), 0);
    }

    #[test]
    fn chain_floors_once() {
        // 10 * 1.15 * 1.15 = 13.225 -> 13, stepwise flooring would give 12
        let chain = [Bps::new(11_500), Bps::new(11_500)];
        assert_eq!(apply_chain(10, &chain), 13);
        assert_eq!(apply_chain(10, &[]), 10);
    }

    #[test]
    fn add_capped_saturates_at_one() {
        assert_eq!(Bps::percent(70).add_capped(Bps::percent(50)), Bps::ONE);
        assert_eq!(Bps::percent(20).add_capped(Bps::percent(30)), Bps::percent(50));
    }

    #[test]
    fn complement_never_underflows() {
        assert_eq!(Bps::percent(40).complement(), Bps::percent(60));
        assert_eq!(Bps::new(12_000).complement(), Bps::ZERO);
    }

    #[test]
    fn compose_multiplies() {
        assert_eq!(Bps::new(15_000).compose(Bps::new(12_000)), Bps::new(18_000));
        assert_eq!(Bps::ONE.compose(Bps::percent(25)), Bps::percent(25));
    }
}
