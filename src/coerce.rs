// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Type promotion rules for mixed-kind operations.
//!
//! The tower, from low to high, is
//! `Int ≈ WholeInt ≈ NaturalInt < Float < Rational < Complex`.
//! Two operands are always promoted to the higher of their kinds; within the
//! integer kinds the weakest shared constraint wins.

use tracing::trace;

use crate::{
    Backend, Complex, Kind, Number, Rational,
    convert::float_to_rational,
    error::{NumberError, Result},
};

/// Position of a kind in the tower. The integer kinds share a rank.
#[inline]
pub fn rank(kind: Kind) -> u8 {
    match kind {
        Kind::Int | Kind::WholeInt | Kind::NaturalInt => 0,
        Kind::Float => 1,
        Kind::Rational => 2,
        Kind::Complex => 3,
    }
}

/// Returns the kind that an operation on kinds `a` and `b` produces.
///
/// # Example
///
/// ```
/// # use numtower::{Kind, coerce::resolve_type};
/// #
/// assert_eq!(resolve_type(Kind::Int, Kind::Rational), Kind::Rational);
/// assert_eq!(resolve_type(Kind::WholeInt, Kind::NaturalInt), Kind::WholeInt);
/// assert_eq!(resolve_type(Kind::Float, Kind::Complex), Kind::Complex);
/// ```
pub fn resolve_type(a: Kind, b: Kind) -> Kind {
    match (a, b) {
        (a, b) if a == b => a,
        (Kind::Complex, _) | (_, Kind::Complex) => Kind::Complex,
        (Kind::Rational, _) | (_, Kind::Rational) => Kind::Rational,
        (Kind::Float, _) | (_, Kind::Float) => Kind::Float,
        (Kind::Int, _) | (_, Kind::Int) => Kind::Int,
        // Only WholeInt with NaturalInt is left
        _ => Kind::WholeInt,
    }
}

/// Fails unless `value` was built with `backend`. Floats match any backend.
pub fn check_backend(value: &Number, backend: Backend) -> Result<()> {
    match value.backend() {
        Some(own) => own.ensure_same(backend).map(|_| ()),
        None => Ok(()),
    }
}

/// Converts `value` into the representation of `target`.
///
/// Only promotions up the tower are possible; asking for a lower kind fails
/// with [`NumberError::UnsupportedType`]. Converting between integer kinds
/// checks the target's constraint and fails with
/// [`NumberError::InvalidValue`] when it does not hold. Floats are turned into
/// rationals by the lossy continued-fraction conversion, in `backend`.
pub fn coerce(value: &Number, target: Kind, backend: Backend) -> Result<Number> {
    check_backend(value, backend)?;
    if value.kind() == target {
        return Ok(value.clone());
    }
    trace!(from = %value.kind(), to = %target, "coercing operand");
    let coerced = match (value, target) {
        (Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n), Kind::Int) => {
            Number::Int(n.clone())
        }
        (Number::Int(n) | Number::NaturalInt(n), Kind::WholeInt) => {
            if n.is_negative() {
                return Err(NumberError::InvalidValue(format!("{n} is not a whole number")));
            }
            Number::WholeInt(n.clone())
        }
        (Number::Int(n) | Number::WholeInt(n), Kind::NaturalInt) => {
            if !n.is_positive() {
                return Err(NumberError::InvalidValue(format!("{n} is not a natural number")));
            }
            Number::NaturalInt(n.clone())
        }
        (Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n), Kind::Float) => {
            Number::Float(n.to_f64_exact()?)
        }
        (Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n), Kind::Rational) => {
            Number::Rational(Rational::from_integer(n.clone()))
        }
        (Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n), Kind::Complex) => {
            Number::Complex(Complex::from_rational(Rational::from_integer(n.clone())))
        }
        (Number::Float(x), Kind::Rational) => Number::Rational(float_to_rational(*x, backend)?),
        (Number::Float(x), Kind::Complex) => {
            Number::Complex(Complex::from_rational(float_to_rational(*x, backend)?))
        }
        (Number::Rational(r), Kind::Complex) => Number::Complex(Complex::from_rational(r.clone())),
        (value, target) => {
            return Err(NumberError::UnsupportedType(format!(
                "cannot coerce {} to {target}",
                value.kind()
            )));
        }
    };
    Ok(coerced)
}

/// Checks both operands against `backend`, resolves their common kind and
/// coerces both into it.
pub fn coerce_pair(a: &Number, b: &Number, backend: Backend) -> Result<(Kind, Number, Number)> {
    check_backend(a, backend)?;
    check_backend(b, backend)?;
    let kind = resolve_type(a.kind(), b.kind());
    trace!(left = %a.kind(), right = %b.kind(), result = %kind, "resolved operand kinds");
    Ok((kind, coerce(a, kind, backend)?, coerce(b, kind, backend)?))
}
