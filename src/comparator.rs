// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;

use crate::{
    Backend, Kind, Number,
    coerce::{check_backend, coerce_pair},
    error::{NumberError, Result},
};

/// Three-way comparison of numbers of any two kinds.
///
/// Operands are promoted to their common kind first. Complex numbers are
/// ordered by modulus, except that two real complex numbers are ordered by
/// their (signed) real parts. `Ordering as i8` gives the usual −1, 0 or 1.
pub trait Comparator {
    /// The backend whose values this engine accepts.
    fn backend(&self) -> Backend;

    fn compare(&self, a: &Number, b: &Number) -> Result<Ordering>;

    /// Equality is defined by comparison, never by representation.
    fn equals(&self, a: &Number, b: &Number) -> Result<bool> {
        Ok(self.compare(a, b)? == Ordering::Equal)
    }
}

/// Comparator for native values.
///
/// Accepts floats: two floats compare by IEEE order, and a float meeting a
/// rational or complex number is converted to a rational first.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeComparator;

impl Comparator for NativeComparator {
    fn backend(&self) -> Backend {
        Backend::Native
    }

    fn compare(&self, a: &Number, b: &Number) -> Result<Ordering> {
        check_backend(a, Backend::Native)?;
        check_backend(b, Backend::Native)?;
        compare_numbers(a, b, true)
    }
}

/// Comparator for arbitrary-precision values.
///
/// Only exact kinds are accepted; any float operand fails with
/// [`NumberError::UnsupportedType`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ArbitraryComparator;

impl Comparator for ArbitraryComparator {
    fn backend(&self) -> Backend {
        Backend::Arbitrary
    }

    fn compare(&self, a: &Number, b: &Number) -> Result<Ordering> {
        check_backend(a, Backend::Arbitrary)?;
        check_backend(b, Backend::Arbitrary)?;
        compare_numbers(a, b, false)
    }
}

/// Compares two numbers in whichever backend they share.
pub(crate) fn compare_numbers(a: &Number, b: &Number, accept_float: bool) -> Result<Ordering> {
    if !accept_float && (a.kind() == Kind::Float || b.kind() == Kind::Float) {
        return Err(NumberError::UnsupportedType(
            "Float is not comparable in the arbitrary-precision engine".into(),
        ));
    }
    let backend = a.backend().or(b.backend()).unwrap_or_default();
    let (_, a, b) = coerce_pair(a, b, backend)?;
    match (&a, &b) {
        (
            Number::Int(x) | Number::WholeInt(x) | Number::NaturalInt(x),
            Number::Int(y) | Number::WholeInt(y) | Number::NaturalInt(y),
        ) => Ok(x.cmp(y)),
        (Number::Float(x), Number::Float(y)) => x
            .partial_cmp(y)
            .ok_or_else(|| NumberError::InvalidValue("NaN is unordered".into())),
        (Number::Rational(x), Number::Rational(y)) => Ok(x.cmp(y)),
        (Number::Complex(x), Number::Complex(y)) => {
            if x.is_real() && y.is_real() {
                Ok(x.re().cmp(y.re()))
            } else {
                Ok(x.cmp_modulus(y))
            }
        }
        _ => Err(NumberError::UnsupportedType(format!(
            "cannot compare {} with {}",
            a.kind(),
            b.kind()
        ))),
    }
}

/// Value equality used by `PartialEq for Number`.
///
/// Unlike [`Comparator::equals`], complex numbers must match component by
/// component, so `3+4i` differs from `5i` even though their moduli agree.
///
/// A float meeting a rational or complex number is first rounded to a
/// rational, so the relation is not transitive: `0.1` and
/// `0.10000000000000002` both equal `1/10` but not each other.
pub(crate) fn equal_values(a: &Number, b: &Number) -> bool {
    let backend = a.backend().or(b.backend()).unwrap_or_default();
    match coerce_pair(a, b, backend) {
        Ok((_, Number::Complex(x), Number::Complex(y))) => x == y,
        Ok(_) => compare_numbers(a, b, true) == Ok(Ordering::Equal),
        Err(_) => false,
    }
}
