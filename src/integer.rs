// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    Backend,
    error::{NumberError, Result},
};

/// Largest magnitude that an `f64` represents without losing integer precision.
const MAX_EXACT_FLOAT_INT: u64 = 1 << f64::MANTISSA_DIGITS;

/// A signed integer held in one of the two backends.
///
/// The variant is the backend: arithmetic between a `Native` and a `Big`
/// integer is refused with [`NumberError::BackendMismatch`]. Comparison and
/// equality look only at the value, so `Native(3)` and `Big(3)` are equal.
#[derive(Clone, Debug)]
pub enum Integer {
    Native(i64),
    Big(BigInt),
}

impl Integer {
    /// Creates an integer in the given backend.
    pub fn new(value: i64, backend: Backend) -> Self {
        match backend {
            Backend::Native => Integer::Native(value),
            Backend::Arbitrary => Integer::Big(BigInt::from(value)),
        }
    }

    /// Creates an integer from an unbounded value.
    ///
    /// Fails with [`NumberError::Overflow`] if the backend is native and the
    /// value does not fit into an `i64`.
    pub fn from_big(value: BigInt, backend: Backend) -> Result<Self> {
        match backend {
            Backend::Native => value
                .to_i64()
                .map(Integer::Native)
                .ok_or_else(|| NumberError::Overflow("conversion to native integer".into())),
            Backend::Arbitrary => Ok(Integer::Big(value)),
        }
    }

    #[inline]
    pub fn zero(backend: Backend) -> Self {
        Self::new(0, backend)
    }

    #[inline]
    pub fn one(backend: Backend) -> Self {
        Self::new(1, backend)
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        match self {
            Integer::Native(_) => Backend::Native,
            Integer::Big(_) => Backend::Arbitrary,
        }
    }

    /// Returns the value as an `i64` if it fits, whatever the backend.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Integer::Native(n) => Some(*n),
            Integer::Big(n) => n.to_i64(),
        }
    }

    pub fn to_big_int(&self) -> BigInt {
        match self {
            Integer::Native(n) => BigInt::from(*n),
            Integer::Big(n) => n.clone(),
        }
    }

    /// Moves the value into another backend without changing it.
    pub fn to_backend(&self, backend: Backend) -> Result<Self> {
        match (self, backend) {
            (Integer::Native(_), Backend::Native) | (Integer::Big(_), Backend::Arbitrary) => {
                Ok(self.clone())
            }
            (Integer::Native(n), Backend::Arbitrary) => Ok(Integer::Big(BigInt::from(*n))),
            (Integer::Big(n), Backend::Native) => Self::from_big(n.clone(), backend),
        }
    }

    /// Converts to `f64`, failing with [`NumberError::Overflow`] when the
    /// magnitude is above 2<sup>53</sup> and the conversion would be lossy.
    pub fn to_f64_exact(&self) -> Result<f64> {
        let overflow = || NumberError::Overflow("conversion to float".into());
        let n = self.as_i64().ok_or_else(overflow)?;
        if n.unsigned_abs() <= MAX_EXACT_FLOAT_INT {
            Ok(n as f64)
        } else {
            Err(overflow())
        }
    }

    /// Converts to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Integer::Native(n) => *n as f64,
            Integer::Big(n) => n.to_f64().unwrap_or(if n.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Native(n) => *n == 0,
            Integer::Big(n) => n.is_zero(),
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Integer::Native(n) => *n == 1,
            Integer::Big(n) => n.is_one(),
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Native(n) => n.is_negative(),
            Integer::Big(n) => n.is_negative(),
        }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        match self {
            Integer::Native(n) => n.is_positive(),
            Integer::Big(n) => n.is_positive(),
        }
    }

    fn binary(
        &self,
        rhs: &Self,
        op: &str,
        native: fn(i64, i64) -> Option<i64>,
        big: fn(&BigInt, &BigInt) -> BigInt,
    ) -> Result<Self> {
        match (self, rhs) {
            (Integer::Native(a), Integer::Native(b)) => native(*a, *b)
                .map(Integer::Native)
                .ok_or_else(|| NumberError::Overflow(op.into())),
            (Integer::Big(a), Integer::Big(b)) => Ok(Integer::Big(big(a, b))),
            _ => Err(NumberError::BackendMismatch {
                left: self.backend(),
                right: rhs.backend(),
            }),
        }
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, "addition", i64::checked_add, |a, b| a + b)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, "subtraction", i64::checked_sub, |a, b| a - b)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.binary(rhs, "multiplication", i64::checked_mul, |a, b| a * b)
    }

    pub fn checked_neg(&self) -> Result<Self> {
        match self {
            Integer::Native(n) => n
                .checked_neg()
                .map(Integer::Native)
                .ok_or_else(|| NumberError::Overflow("negation".into())),
            Integer::Big(n) => Ok(Integer::Big(-n)),
        }
    }

    /// Truncating division returning quotient and remainder.
    ///
    /// The remainder has the sign of the dividend.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let quotient = self.binary(rhs, "division", i64::checked_div, |a, b| a / b)?;
        let remainder = self.binary(rhs, "division", i64::checked_rem, |a, b| a % b)?;
        Ok((quotient, remainder))
    }

    /// Returns the non-negative greatest common divisor.
    ///
    /// `gcd(0, 0)` is 0.
    pub fn gcd(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Integer::Native(a), Integer::Native(b)) => {
                // Widened so that i64::MIN has an absolute value
                let gcd = i128::from(*a).gcd(&i128::from(*b));
                i64::try_from(gcd)
                    .map(Integer::Native)
                    .map_err(|_| NumberError::Overflow("gcd".into()))
            }
            (Integer::Big(a), Integer::Big(b)) => Ok(Integer::Big(a.gcd(b))),
            _ => Err(NumberError::BackendMismatch {
                left: self.backend(),
                right: rhs.backend(),
            }),
        }
    }

    /// Exact comparison of `a * b` against `c * d`, which never overflows.
    pub(crate) fn cmp_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        match (a, b, c, d) {
            (
                Integer::Native(a),
                Integer::Native(b),
                Integer::Native(c),
                Integer::Native(d),
            ) => (i128::from(*a) * i128::from(*b)).cmp(&(i128::from(*c) * i128::from(*d))),
            _ => (a.to_big_int() * b.to_big_int()).cmp(&(c.to_big_int() * d.to_big_int())),
        }
    }
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Integer::Native(value)
    }
}

impl From<BigInt> for Integer {
    #[inline]
    fn from(value: BigInt) -> Self {
        Integer::Big(value)
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Native(a), Integer::Native(b)) => a.cmp(b),
            (Integer::Big(a), Integer::Big(b)) => a.cmp(b),
            _ => self.to_big_int().cmp(&other.to_big_int()),
        }
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values must hash equally in both backends
        match self.as_i64() {
            Some(n) => n.hash(state),
            None => self.to_big_int().hash(state),
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Native(n) => write!(f, "{n}"),
            Integer::Big(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_in_each_backend() {
        assert_eq!(Integer::new(7, Backend::Native).backend(), Backend::Native);
        assert_eq!(Integer::new(7, Backend::Arbitrary).backend(), Backend::Arbitrary);
        // Same value, so equal even though the representation differs
        assert_eq!(Integer::new(7, Backend::Native), Integer::new(7, Backend::Arbitrary));
    }

    #[test]
    fn from_big_overflows_native() {
        let big = BigInt::from(i64::MAX) + 1i64;
        assert!(matches!(
            Integer::from_big(big.clone(), Backend::Native),
            Err(NumberError::Overflow(_))
        ));
        assert_eq!(
            Integer::from_big(big.clone(), Backend::Arbitrary).unwrap().to_big_int(),
            big
        );
    }

    #[test]
    fn native_overflow_is_detected() {
        let max = Integer::Native(i64::MAX);
        let one = Integer::Native(1);
        assert!(matches!(max.checked_add(&one), Err(NumberError::Overflow(_))));
        assert!(matches!(
            Integer::Native(i64::MIN).checked_sub(&one),
            Err(NumberError::Overflow(_))
        ));
        assert!(matches!(max.checked_mul(&Integer::Native(2)), Err(NumberError::Overflow(_))));
        assert!(matches!(
            Integer::Native(i64::MIN).checked_neg(),
            Err(NumberError::Overflow(_))
        ));
        assert!(matches!(
            Integer::Native(i64::MIN).div_rem(&Integer::Native(-1)),
            Err(NumberError::Overflow(_))
        ));
    }

    #[test]
    fn big_does_not_overflow() {
        let max = Integer::new(i64::MAX, Backend::Arbitrary);
        let sum = max.checked_add(&max).unwrap();
        assert_eq!(sum.to_big_int(), BigInt::from(i64::MAX) * 2i64);
        assert_eq!(sum.as_i64(), None);
    }

    #[test]
    fn mixed_backends_fail() {
        let a = Integer::new(1, Backend::Native);
        let b = Integer::new(1, Backend::Arbitrary);
        assert_eq!(
            a.checked_add(&b),
            Err(NumberError::BackendMismatch {
                left: Backend::Native,
                right: Backend::Arbitrary
            })
        );
        assert!(b.gcd(&a).is_err());
    }

    #[test]
    fn div_rem_truncates() {
        let (q, r) = Integer::Native(-7).div_rem(&Integer::Native(2)).unwrap();
        assert_eq!((q, r), (Integer::Native(-3), Integer::Native(-1)));
        let (q, r) = Integer::new(-7, Backend::Arbitrary)
            .div_rem(&Integer::new(2, Backend::Arbitrary))
            .unwrap();
        assert_eq!(q.as_i64(), Some(-3));
        assert_eq!(r.as_i64(), Some(-1));
    }

    #[test]
    fn div_rem_by_zero() {
        assert_eq!(
            Integer::Native(3).div_rem(&Integer::Native(0)),
            Err(NumberError::DivisionByZero)
        );
    }

    #[test]
    fn gcd() {
        assert_eq!(Integer::Native(12).gcd(&Integer::Native(-18)).unwrap(), Integer::Native(6));
        assert_eq!(Integer::Native(0).gcd(&Integer::Native(5)).unwrap(), Integer::Native(5));
        assert_eq!(Integer::Native(0).gcd(&Integer::Native(0)).unwrap(), Integer::Native(0));
        // 2^63 has no native representation
        assert!(matches!(
            Integer::Native(i64::MIN).gcd(&Integer::Native(0)),
            Err(NumberError::Overflow(_))
        ));
        assert_eq!(
            Integer::new(12, Backend::Arbitrary)
                .gcd(&Integer::new(-18, Backend::Arbitrary))
                .unwrap()
                .as_i64(),
            Some(6)
        );
    }

    #[test]
    fn to_f64_exact() {
        assert_eq!(Integer::Native(1 << 53).to_f64_exact(), Ok(9007199254740992.0));
        assert!(matches!(
            Integer::Native((1 << 53) + 1).to_f64_exact(),
            Err(NumberError::Overflow(_))
        ));
        assert_eq!(Integer::new(-5, Backend::Arbitrary).to_f64_exact(), Ok(-5.0));
    }

    #[test]
    fn cmp_products_wide() {
        let max = Integer::Native(i64::MAX);
        let min = Integer::Native(i64::MIN);
        assert_eq!(Integer::cmp_products(&max, &max, &min, &min), Ordering::Less);
        assert_eq!(
            Integer::cmp_products(
                &Integer::Native(2),
                &Integer::Native(3),
                &Integer::Native(1),
                &Integer::Native(6)
            ),
            Ordering::Equal
        );
    }
}
