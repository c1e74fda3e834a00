// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{cmp::Ordering, fmt};

use num_bigint::BigInt;

use crate::{
    Backend, Integer, Rational,
    error::{NumberError, Result},
};

/// An exact complex number with rational components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Complex {
    re: Rational,
    im: Rational,
}

impl Complex {
    pub fn new(re: Rational, im: Rational) -> Result<Self> {
        re.backend().ensure_same(im.backend())?;
        Ok(Self { re, im })
    }

    /// Creates a real complex number, i.e. one with a zero imaginary part.
    pub fn from_rational(re: Rational) -> Self {
        let im = Rational::zero(re.backend());
        Self { re, im }
    }

    /// Creates `re + im·i` from two machine integers.
    pub fn from_i64(re: i64, im: i64, backend: Backend) -> Self {
        let part = |n| Rational::from_integer(Integer::new(n, backend));
        Self {
            re: part(re),
            im: part(im),
        }
    }

    #[inline]
    pub fn zero(backend: Backend) -> Self {
        Self::from_rational(Rational::zero(backend))
    }

    #[inline]
    pub fn one(backend: Backend) -> Self {
        Self::from_rational(Rational::one(backend))
    }

    #[inline]
    pub fn re(&self) -> &Rational {
        &self.re
    }

    #[inline]
    pub fn im(&self) -> &Rational {
        &self.im
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.re.backend()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns true if the imaginary part is exactly zero.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    pub fn to_backend(&self, backend: Backend) -> Result<Self> {
        Ok(Self {
            re: self.re.to_backend(backend)?,
            im: self.im.to_backend(backend)?,
        })
    }

    pub fn conj(&self) -> Result<Self> {
        Ok(Self {
            re: self.re.clone(),
            im: self.im.checked_neg()?,
        })
    }

    /// Returns the squared modulus re² + im².
    pub fn norm_sqr(&self) -> Result<Rational> {
        self.re
            .checked_mul(&self.re)?
            .checked_add(&self.im.checked_mul(&self.im)?)
    }

    /// Orders two complex numbers by modulus, exactly.
    ///
    /// Squared moduli are compared as unbounded fractions, which orders the
    /// same way as the moduli themselves and never overflows.
    pub fn cmp_modulus(&self, other: &Self) -> Ordering {
        let (p1, q1) = self.big_norm_sqr();
        let (p2, q2) = other.big_norm_sqr();
        (p1 * q2).cmp(&(p2 * q1))
    }

    /// re² + im² as an unreduced fraction with a positive denominator.
    fn big_norm_sqr(&self) -> (BigInt, BigInt) {
        let (a, b) = (self.re.numer().to_big_int(), self.re.denom().to_big_int());
        let (c, d) = (self.im.numer().to_big_int(), self.im.denom().to_big_int());
        let (b2, d2) = (&b * &b, &d * &d);
        (&a * &a * &d2 + &c * &c * &b2, b2 * d2)
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self {
            re: self.re.checked_add(&rhs.re)?,
            im: self.im.checked_add(&rhs.im)?,
        })
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        Ok(Self {
            re: self.re.checked_sub(&rhs.re)?,
            im: self.im.checked_sub(&rhs.im)?,
        })
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        // (a+bi)(c+di) = (ac-bd) + (ad+bc)i
        let (a, b, c, d) = (&self.re, &self.im, &rhs.re, &rhs.im);
        Ok(Self {
            re: a.checked_mul(c)?.checked_sub(&b.checked_mul(d)?)?,
            im: a.checked_mul(d)?.checked_add(&b.checked_mul(c)?)?,
        })
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        // z/w = z·conj(w) / |w|²
        let divisor = rhs.norm_sqr()?;
        if divisor.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        let numer = self.checked_mul(&rhs.conj()?)?;
        Ok(Self {
            re: numer.re.checked_div(&divisor)?,
            im: numer.im.checked_div(&divisor)?,
        })
    }

    pub fn recip(&self) -> Result<Self> {
        Self::one(self.backend()).checked_div(self)
    }

    pub fn checked_neg(&self) -> Result<Self> {
        Ok(Self {
            re: self.re.checked_neg()?,
            im: self.im.checked_neg()?,
        })
    }
}

impl From<Rational> for Complex {
    fn from(re: Rational) -> Self {
        Self::from_rational(re)
    }
}

/// Writes a component, dropping a denominator of 1.
fn fmt_part(r: &Rational, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if r.is_integer() {
        write!(f, "{}", r.numer())
    } else {
        write!(f, "{r}")
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_part(&self.re, f)?;
        if !self.im.is_negative() {
            write!(f, "+")?;
        }
        fmt_part(&self.im, f)?;
        write!(f, "i")
    }
}
