// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{cmp::Ordering, fmt};

use num_integer::Integer as _;

use crate::{
    Backend, Integer,
    error::{NumberError, Result},
};

/// An exact fraction of two integers in the same backend.
///
/// A `Rational` is always held in lowest terms with a positive denominator,
/// so the sign lives on the numerator and two equal values are also
/// structurally equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: Integer,
    denom: Integer,
}

impl Rational {
    /// Creates a reduced `Rational` from a numerator and denominator.
    ///
    /// # Example
    ///
    /// ```
    /// # use numtower::{Integer, Rational};
    /// #
    /// let r = Rational::new(Integer::from(6), Integer::from(-4)).unwrap();
    /// assert_eq!(r.to_string(), "-3/2");
    /// ```
    pub fn new(numer: Integer, denom: Integer) -> Result<Self> {
        numer.backend().ensure_same(denom.backend())?;
        if denom.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Self::reduce(numer, denom)
    }

    fn reduce(numer: Integer, denom: Integer) -> Result<Self> {
        if let (Integer::Native(n), Integer::Native(d)) = (&numer, &denom) {
            return Self::reduce_native(i128::from(*n), i128::from(*d));
        }
        let gcd = numer.gcd(&denom)?;
        let (mut numer, _) = numer.div_rem(&gcd)?;
        let (mut denom, _) = denom.div_rem(&gcd)?;
        if denom.is_negative() {
            numer = numer.checked_neg()?;
            denom = denom.checked_neg()?;
        }
        Ok(Self { numer, denom })
    }

    /// Reduces in `i128`, where the gcd and the sign flip of `i64::MIN`
    /// cannot overflow, and narrows only the result.
    fn reduce_native(numer: i128, denom: i128) -> Result<Self> {
        let gcd = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / gcd, denom / gcd);
        if denom < 0 {
            (numer, denom) = (-numer, -denom);
        }
        let narrow = |n: i128| {
            i64::try_from(n)
                .map(Integer::Native)
                .map_err(|_| NumberError::Overflow("rational reduction".into()))
        };
        Ok(Self {
            numer: narrow(numer)?,
            denom: narrow(denom)?,
        })
    }

    /// Creates a `Rational` with denominator 1.
    pub fn from_integer(numer: Integer) -> Self {
        let denom = Integer::one(numer.backend());
        Self { numer, denom }
    }

    #[inline]
    pub fn zero(backend: Backend) -> Self {
        Self::from_integer(Integer::zero(backend))
    }

    #[inline]
    pub fn one(backend: Backend) -> Self {
        Self::from_integer(Integer::one(backend))
    }

    #[inline]
    pub fn numer(&self) -> &Integer {
        &self.numer
    }

    /// Returns the denominator, which is always positive.
    #[inline]
    pub fn denom(&self) -> &Integer {
        &self.denom
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.numer.backend()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Returns true if the denominator is 1.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn to_backend(&self, backend: Backend) -> Result<Self> {
        Ok(Self {
            numer: self.numer.to_backend(backend)?,
            denom: self.denom.to_backend(backend)?,
        })
    }

    /// Approximates the fraction as an `f64`.
    pub fn to_f64(&self) -> f64 {
        match (self.numer.as_i64(), self.denom.as_i64()) {
            (Some(n), Some(d)) => n as f64 / d as f64,
            _ => {
                // Scale down huge components together so that the quotient survives
                let n = self.numer.to_big_int();
                let d = self.denom.to_big_int();
                let excess = n.bits().max(d.bits()).saturating_sub(1000);
                let n = Integer::Big(n >> excess).to_f64();
                let d = Integer::Big(d >> excess).to_f64();
                n / d
            }
        }
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        // a/b + c/d = (ad + cb)/bd
        let ad = self.numer.checked_mul(&rhs.denom)?;
        let cb = rhs.numer.checked_mul(&self.denom)?;
        let bd = self.denom.checked_mul(&rhs.denom)?;
        Self::reduce(ad.checked_add(&cb)?, bd)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let ad = self.numer.checked_mul(&rhs.denom)?;
        let cb = rhs.numer.checked_mul(&self.denom)?;
        let bd = self.denom.checked_mul(&rhs.denom)?;
        Self::reduce(ad.checked_sub(&cb)?, bd)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        let numer = self.numer.checked_mul(&rhs.numer)?;
        let denom = self.denom.checked_mul(&rhs.denom)?;
        Self::reduce(numer, denom)
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.checked_mul(&rhs.recip()?)
    }

    /// Returns 1/x, failing with [`NumberError::DivisionByZero`] for 0.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Self::reduce(self.denom.clone(), self.numer.clone())
    }

    pub fn checked_neg(&self) -> Result<Self> {
        Ok(Self {
            numer: self.numer.checked_neg()?,
            denom: self.denom.clone(),
        })
    }
}

impl From<Integer> for Rational {
    fn from(numer: Integer) -> Self {
        Self::from_integer(numer)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Compares by cross multiplication, relying on positive denominators.
    fn cmp(&self, other: &Self) -> Ordering {
        Integer::cmp_products(&self.numer, &other.denom, &other.numer, &self.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(Integer::Native(n), Integer::Native(d)).unwrap()
    }

    fn big(n: i64, d: i64) -> Rational {
        Rational::new(
            Integer::new(n, Backend::Arbitrary),
            Integer::new(d, Backend::Arbitrary),
        )
        .unwrap()
    }

    #[test]
    fn new_reduces() {
        let n = r(6, 8);
        assert_eq!(n.numer(), &Integer::Native(3));
        assert_eq!(n.denom(), &Integer::Native(4));
    }

    #[test]
    fn new_normalizes_sign() {
        let n = r(3, -9);
        assert_eq!(n.numer(), &Integer::Native(-1));
        assert_eq!(n.denom(), &Integer::Native(3));
        let n = r(-3, -9);
        assert_eq!(n.numer(), &Integer::Native(1));
        assert_eq!(n.denom(), &Integer::Native(3));
    }

    #[test]
    fn new_zero() {
        // Zero is always 0/1
        let n = r(0, -5);
        assert!(n.is_zero());
        assert_eq!(n.denom(), &Integer::Native(1));
    }

    #[test]
    fn new_zero_denominator() {
        assert_eq!(
            Rational::new(Integer::Native(1), Integer::Native(0)),
            Err(NumberError::DivisionByZero)
        );
    }

    #[test]
    fn new_mixed_backends() {
        assert!(matches!(
            Rational::new(Integer::Native(1), Integer::new(2, Backend::Arbitrary)),
            Err(NumberError::BackendMismatch { .. })
        ));
    }

    #[test]
    fn add() {
        assert_eq!(r(1, 2).checked_add(&r(1, 3)).unwrap(), r(5, 6));
        assert_eq!(r(4, 1).checked_add(&r(4, 1)).unwrap(), r(8, 1));
        assert_eq!(r(1, 2).checked_add(&r(-1, 2)).unwrap(), r(0, 1));
        assert_eq!(big(1, 6).checked_add(&big(1, 3)).unwrap(), big(1, 2));
    }

    #[test]
    fn sub() {
        assert_eq!(r(1, 2).checked_sub(&r(1, 3)).unwrap(), r(1, 6));
        assert_eq!(r(1, 3).checked_sub(&r(1, 2)).unwrap(), r(-1, 6));
    }

    #[test]
    fn mul() {
        assert_eq!(r(2, 3).checked_mul(&r(3, 4)).unwrap(), r(1, 2));
        assert_eq!(r(-2, 3).checked_mul(&r(3, -4)).unwrap(), r(1, 2));
    }

    #[test]
    fn div() {
        assert_eq!(r(1, 2).checked_div(&r(1, 4)).unwrap(), r(2, 1));
        assert_eq!(r(1, 2).checked_div(&r(-1, 4)).unwrap(), r(-2, 1));
        assert_eq!(r(1, 1).checked_div(&r(0, 1)), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn recip() {
        assert_eq!(r(-2, 3).recip().unwrap(), r(-3, 2));
        assert_eq!(r(0, 1).recip(), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn native_overflow() {
        let huge = r(i64::MAX, 1);
        assert!(matches!(huge.checked_add(&huge), Err(NumberError::Overflow(_))));
        // The same sum succeeds in the arbitrary-precision backend
        let huge = big(i64::MAX, 1);
        let sum = huge.checked_add(&huge).unwrap();
        assert_eq!(sum.numer().to_big_int(), num_bigint::BigInt::from(i64::MAX) * 2i64);
    }

    #[test]
    fn reduce_at_native_limits() {
        let min = i64::MIN;
        // gcd(0, MIN) and gcd(MIN, MIN) are 2^63, outside i64
        assert_eq!(r(0, min), r(0, 1));
        assert_eq!(r(min, min), r(1, 1));
        assert_eq!(r(min, 2).numer(), &Integer::Native(min / 2));
        assert_eq!(r(2, min), r(-1, 1 << 62));
        assert_eq!(r(min, 1).checked_mul(&r(1, 2)).unwrap(), r(min / 2, 1));
        // -1/2^63 and 2^63/1 have no native form
        assert!(matches!(
            Rational::new(Integer::Native(1), Integer::Native(min)),
            Err(NumberError::Overflow(_))
        ));
        assert!(matches!(
            Rational::new(Integer::Native(min), Integer::Native(-1)),
            Err(NumberError::Overflow(_))
        ));
        assert!(matches!(r(min, 1).recip(), Err(NumberError::Overflow(_))));
    }

    #[test]
    fn cmp() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert_eq!(r(2, 4).cmp(&r(1, 2)), Ordering::Equal);
        assert!(big(7, 3) > big(2, 1));
    }

    #[test]
    fn to_f64() {
        assert_eq!(r(1, 4).to_f64(), 0.25);
        assert_eq!(r(-3, 2).to_f64(), -1.5);
        assert_eq!(big(1, 8).to_f64(), 0.125);
    }

    #[test]
    fn display() {
        assert_eq!(r(8, 1).to_string(), "8/1");
        assert_eq!(r(-1, 3).to_string(), "-1/3");
    }
}
