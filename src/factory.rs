// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{str::FromStr, sync::LazyLock};

use num_bigint::BigInt;
use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    Backend, Complex, Integer, Kind, Number, Rational,
    coerce::coerce,
    error::{NumberError, Result},
};

/// The forms `Display` writes for exact kinds.
struct Grammar {
    integer: Regex,
    rational: Regex,
    complex: Regex,
}

impl Grammar {
    fn new() -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            integer: Regex::new(r"^-?\d+$")?,
            rational: Regex::new(r"^-?\d+/\d+$")?,
            // e.g. "1/2-3/4i", "0+1i"
            complex: Regex::new(r"^(-?\d+(?:/\d+)?)([+-]\d+(?:/\d+)?)i$")?,
        })
    }
}

static GRAMMAR: LazyLock<std::result::Result<Grammar, regex::Error>> = LazyLock::new(Grammar::new);

/// Builds numbers in one backend, enforcing the invariant of each kind.
///
/// # Example
///
/// ```
/// # use numtower::{Backend, Factory, Kind};
/// #
/// let f = Factory::new(Backend::Native);
/// assert!(f.whole(-1).is_err());
/// assert_eq!(f.rational(3, 6).unwrap().to_string(), "1/2");
/// assert_eq!(f.parse("2-1i").unwrap().kind(), Kind::Complex);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Factory {
    backend: Backend,
}

impl Factory {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn int(&self, n: i64) -> Number {
        Number::Int(Integer::new(n, self.backend))
    }

    /// Creates an `Int` from an unbounded value, failing with
    /// [`NumberError::Overflow`] if it does not fit the native backend.
    pub fn big_int(&self, n: BigInt) -> Result<Number> {
        Ok(Number::Int(Integer::from_big(n, self.backend)?))
    }

    /// Creates a `WholeInt`, which must be ≥ 0.
    pub fn whole(&self, n: i64) -> Result<Number> {
        if n < 0 {
            return Err(NumberError::InvalidValue(format!("{n} is not a whole number")));
        }
        Ok(Number::WholeInt(Integer::new(n, self.backend)))
    }

    /// Creates a `NaturalInt`, which must be ≥ 1.
    pub fn natural(&self, n: i64) -> Result<Number> {
        if n < 1 {
            return Err(NumberError::InvalidValue(format!("{n} is not a natural number")));
        }
        Ok(Number::NaturalInt(Integer::new(n, self.backend)))
    }

    pub fn float(&self, x: f64) -> Number {
        Number::Float(x)
    }

    pub fn rational(&self, numer: i64, denom: i64) -> Result<Number> {
        let r = Rational::new(Integer::new(numer, self.backend), Integer::new(denom, self.backend))?;
        Ok(Number::Rational(r))
    }

    /// Creates a complex number with integer components.
    pub fn complex(&self, re: i64, im: i64) -> Number {
        Number::Complex(Complex::from_i64(re, im, self.backend))
    }

    /// Creates a complex number from two real numbers of any real kind.
    ///
    /// Float parts go through the lossy float-to-rational conversion; complex
    /// parts fail with [`NumberError::UnsupportedType`].
    pub fn complex_parts(&self, re: &Number, im: &Number) -> Result<Number> {
        let part = |n: &Number| match coerce(n, Kind::Rational, self.backend)? {
            Number::Rational(r) => Ok(r),
            other => Err(NumberError::UnsupportedType(format!(
                "{} as a complex component",
                other.kind()
            ))),
        };
        Ok(Number::Complex(Complex::new(part(re)?, part(im)?)?))
    }

    /// Converts a [`Decimal`] into the equal `Rational`, without passing
    /// through `f64`.
    pub fn decimal(&self, dec: Decimal) -> Result<Number> {
        let numer = BigInt::from(dec.mantissa());
        let denom = BigInt::from(10u32).pow(dec.scale());
        let r = Rational::new(
            Integer::from_big(numer, self.backend)?,
            Integer::from_big(denom, self.backend)?,
        )?;
        Ok(Number::Rational(r))
    }

    /// Reads a number back from the form its `Display` writes.
    ///
    /// That is `"-12"` for the integer kinds (read as `Int`), `"3/4"`,
    /// `"1/2-3i"`, and the `Debug` form of an `f64` such as `"2.5"`, `"1e-7"`
    /// or `"NaN"`. Anything else fails with [`NumberError::Parse`].
    pub fn parse(&self, s: &str) -> Result<Number> {
        let grammar = GRAMMAR
            .as_ref()
            .map_err(|e| NumberError::Parse(e.to_string()))?;

        if grammar.integer.is_match(s) {
            return self.big_int(parse_big(s)?);
        }
        if grammar.rational.is_match(s) {
            return Ok(Number::Rational(self.part(s)?));
        }
        if let Some(caps) = grammar.complex.captures(s) {
            let c = Complex::new(self.part(&caps[1])?, self.part(&caps[2])?)?;
            return Ok(Number::Complex(c));
        }
        f64::from_str(s)
            .map(Number::Float)
            .map_err(|_| NumberError::Parse(s.into()))
    }

    /// Reads an integer or fraction as a `Rational`.
    fn part(&self, s: &str) -> Result<Rational> {
        let (numer, denom) = s.split_once('/').unwrap_or((s, "1"));
        Rational::new(
            Integer::from_big(parse_big(numer)?, self.backend)?,
            Integer::from_big(parse_big(denom)?, self.backend)?,
        )
    }
}

fn parse_big(s: &str) -> Result<BigInt> {
    BigInt::from_str(s).map_err(|_| NumberError::Parse(s.into()))
}
