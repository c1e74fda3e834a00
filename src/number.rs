// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{fmt, str::FromStr};

use crate::{
    Backend, Complex, Factory, Integer, Rational, comparator,
    error::{NumberError, Result},
};

/// The kind of a [`Number`], used to pick result types and coercions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    WholeInt,
    NaturalInt,
    Float,
    Rational,
    Complex,
}

impl Kind {
    /// Returns true for `Int`, `WholeInt` and `NaturalInt`.
    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Int | Kind::WholeInt | Kind::NaturalInt)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "Int",
            Kind::WholeInt => "WholeInt",
            Kind::NaturalInt => "NaturalInt",
            Kind::Float => "Float",
            Kind::Rational => "Rational",
            Kind::Complex => "Complex",
        };
        f.write_str(name)
    }
}

/// A value in the numeric tower.
///
/// `WholeInt` holds an integer ≥ 0 and `NaturalInt` an integer ≥ 1; the
/// [`Factory`] enforces this when the value is built. Values are immutable:
/// every arithmetic operation returns a new `Number`.
///
/// Two numbers are equal when they hold the same value, not when their
/// representations match, so `Int(5)`, `WholeInt(5)` and `Float(5.0)` are all
/// equal to each other.
///
/// `Number` serializes through its `Display` form and deserializes with
/// [`FromStr`], which builds values in the native backend.
#[derive(Clone, Debug, serde_with::DeserializeFromStr, serde_with::SerializeDisplay)]
pub enum Number {
    Int(Integer),
    WholeInt(Integer),
    NaturalInt(Integer),
    Float(f64),
    Rational(Rational),
    Complex(Complex),
}

impl Number {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Number::Int(_) => Kind::Int,
            Number::WholeInt(_) => Kind::WholeInt,
            Number::NaturalInt(_) => Kind::NaturalInt,
            Number::Float(_) => Kind::Float,
            Number::Rational(_) => Kind::Rational,
            Number::Complex(_) => Kind::Complex,
        }
    }

    /// Returns the backend the value was built with, or `None` for floats.
    pub fn backend(&self) -> Option<Backend> {
        match self {
            Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n) => Some(n.backend()),
            Number::Float(_) => None,
            Number::Rational(r) => Some(r.backend()),
            Number::Complex(c) => Some(c.backend()),
        }
    }

    /// Returns the integer of any of the three integer kinds.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n) => n.is_zero(),
            Number::Float(f) => *f == 0.0,
            Number::Rational(r) => r.is_zero(),
            Number::Complex(c) => c.is_zero(),
        }
    }

    /// Rebuilds the value in another backend.
    ///
    /// Floats are returned unchanged. Moving a value that does not fit into an
    /// `i64` to the native backend fails with [`NumberError::Overflow`].
    pub fn to_backend(&self, backend: Backend) -> Result<Number> {
        Ok(match self {
            Number::Int(n) => Number::Int(n.to_backend(backend)?),
            Number::WholeInt(n) => Number::WholeInt(n.to_backend(backend)?),
            Number::NaturalInt(n) => Number::NaturalInt(n.to_backend(backend)?),
            Number::Float(f) => Number::Float(*f),
            Number::Rational(r) => Number::Rational(r.to_backend(backend)?),
            Number::Complex(c) => Number::Complex(c.to_backend(backend)?),
        })
    }

    /// Wraps an integer in the narrowest of `NaturalInt`, `WholeInt` and `Int`
    /// that is no narrower than `kind`.
    ///
    /// Used to re-validate the result of an integer operation: a constraint
    /// that no longer holds widens the result to `Int`.
    pub(crate) fn constrained(kind: Kind, n: Integer) -> Number {
        match kind {
            Kind::NaturalInt if n.is_positive() => Number::NaturalInt(n),
            Kind::WholeInt if !n.is_negative() => Number::WholeInt(n),
            _ => Number::Int(n),
        }
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Number::Rational(r)
    }
}

impl From<Complex> for Number {
    fn from(c: Complex) -> Self {
        Number::Complex(c)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl PartialEq for Number {
    /// Numbers are equal when they hold the same value after coercion.
    ///
    /// Pairs that cannot be compared (mixed backends, NaN) are never equal.
    /// Floats are rounded to rationals when they meet an exact kind, so this
    /// relation is not transitive across floats.
    fn eq(&self, other: &Self) -> bool {
        comparator::equal_values(self, other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n) => write!(f, "{n}"),
            // Debug keeps the fractional point, so 5.0 stays distinguishable from 5
            Number::Float(x) => write!(f, "{x:?}"),
            Number::Rational(r) => write!(f, "{r}"),
            Number::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for Number {
    type Err = NumberError;

    /// Parses a number in the native backend.
    fn from_str(s: &str) -> Result<Self> {
        Factory::new(Backend::default()).parse(s)
    }
}
