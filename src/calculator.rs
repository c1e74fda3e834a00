// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use tracing::{debug, trace};

use crate::{
    Backend, Complex, Integer, Kind, Number, Rational,
    coerce::{check_backend, coerce_pair},
    error::{NumberError, Result},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        };
        f.write_str(name)
    }
}

/// Arithmetic over mixed numeric kinds.
///
/// Both operands are promoted to their common kind before the operation (see
/// [`crate::coerce`]) and must have been built with the calculator's backend.
///
/// Integer division is exact: a quotient that divides evenly stays an
/// integer, anything else becomes a reduced [`Rational`]. Dividing by zero
/// fails with [`NumberError::DivisionByZero`] for every kind, floats included.
///
/// # Example
///
/// ```
/// # use numtower::{Backend, Context, Kind};
/// #
/// let ctx = Context::new(Backend::Native);
/// let (f, calc) = (ctx.factory(), ctx.calculator());
/// let q = calc.div(&f.int(7), &f.int(2)).unwrap();
/// assert_eq!(q.kind(), Kind::Rational);
/// assert_eq!(q.to_string(), "7/2");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Calculator {
    backend: Backend,
}

impl Calculator {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Creates a calculator for the backend the operands were built with.
    ///
    /// Floats carry no backend, so two floats get the default backend.
    pub fn for_operands(a: &Number, b: &Number) -> Self {
        Self::new(a.backend().or(b.backend()).unwrap_or_default())
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn add(&self, a: &Number, b: &Number) -> Result<Number> {
        self.apply(Operation::Add, a, b)
    }

    pub fn sub(&self, a: &Number, b: &Number) -> Result<Number> {
        self.apply(Operation::Sub, a, b)
    }

    pub fn mul(&self, a: &Number, b: &Number) -> Result<Number> {
        self.apply(Operation::Mul, a, b)
    }

    pub fn div(&self, a: &Number, b: &Number) -> Result<Number> {
        self.apply(Operation::Div, a, b)
    }

    /// Returns 1/a, computed as a division of one by `a` in `a`'s own kind.
    pub fn reciprocal(&self, a: &Number) -> Result<Number> {
        check_backend(a, self.backend)?;
        let one = match a.kind() {
            // NaturalInt(1) carries no constraint weaker than a's own
            Kind::Int | Kind::WholeInt | Kind::NaturalInt => {
                Number::NaturalInt(Integer::one(self.backend))
            }
            Kind::Float => Number::Float(1.0),
            Kind::Rational => Number::Rational(Rational::one(self.backend)),
            Kind::Complex => Number::Complex(Complex::one(self.backend)),
        };
        self.apply(Operation::Div, &one, a)
    }

    /// Returns −a. Negating a constrained integer widens it to `Int` unless
    /// the result still satisfies the constraint.
    pub fn neg(&self, a: &Number) -> Result<Number> {
        check_backend(a, self.backend)?;
        Ok(match a {
            Number::Int(n) | Number::WholeInt(n) | Number::NaturalInt(n) => {
                Number::constrained(a.kind(), n.checked_neg()?)
            }
            Number::Float(x) => Number::Float(-x),
            Number::Rational(r) => Number::Rational(r.checked_neg()?),
            Number::Complex(c) => Number::Complex(c.checked_neg()?),
        })
    }

    fn apply(&self, op: Operation, a: &Number, b: &Number) -> Result<Number> {
        let result = coerce_pair(a, b, self.backend).and_then(|(kind, a, b)| {
            trace!(%op, %kind, "dispatching");
            match (&a, &b) {
                (
                    Number::Int(x) | Number::WholeInt(x) | Number::NaturalInt(x),
                    Number::Int(y) | Number::WholeInt(y) | Number::NaturalInt(y),
                ) => integer_op(op, kind, x, y),
                (Number::Float(x), Number::Float(y)) => float_op(op, *x, *y),
                (Number::Rational(x), Number::Rational(y)) => rational_op(op, x, y),
                (Number::Complex(x), Number::Complex(y)) => complex_op(op, x, y),
                _ => Err(NumberError::UnsupportedType(format!(
                    "{op} on {} and {}",
                    a.kind(),
                    b.kind()
                ))),
            }
        });
        if let Err(error) = &result {
            debug!(%op, left = %a, right = %b, %error, "operation failed");
        }
        result
    }
}

fn integer_op(op: Operation, kind: Kind, x: &Integer, y: &Integer) -> Result<Number> {
    let n = match op {
        Operation::Add => x.checked_add(y)?,
        Operation::Sub => x.checked_sub(y)?,
        Operation::Mul => x.checked_mul(y)?,
        Operation::Div => {
            let (quotient, remainder) = x.div_rem(y)?;
            if !remainder.is_zero() {
                return Ok(Number::Rational(Rational::new(x.clone(), y.clone())?));
            }
            quotient
        }
    };
    Ok(Number::constrained(kind, n))
}

fn float_op(op: Operation, x: f64, y: f64) -> Result<Number> {
    let n = match op {
        Operation::Add => x + y,
        Operation::Sub => x - y,
        Operation::Mul => x * y,
        Operation::Div => {
            if y == 0.0 {
                return Err(NumberError::DivisionByZero);
            }
            x / y
        }
    };
    Ok(Number::Float(n))
}

fn rational_op(op: Operation, x: &Rational, y: &Rational) -> Result<Number> {
    let r = match op {
        Operation::Add => x.checked_add(y)?,
        Operation::Sub => x.checked_sub(y)?,
        Operation::Mul => x.checked_mul(y)?,
        Operation::Div => x.checked_div(y)?,
    };
    Ok(Number::Rational(r))
}

fn complex_op(op: Operation, x: &Complex, y: &Complex) -> Result<Number> {
    let c = match op {
        Operation::Add => x.checked_add(y)?,
        Operation::Sub => x.checked_sub(y)?,
        Operation::Mul => x.checked_mul(y)?,
        Operation::Div => x.checked_div(y)?,
    };
    Ok(Number::Complex(c))
}

macro_rules! impl_arithmetic {
    ($Trait:ident, $method:ident) => {
        impl $Trait for &Number {
            type Output = Result<Number>;

            fn $method(self, rhs: Self) -> Result<Number> {
                Calculator::for_operands(self, rhs).$method(self, rhs)
            }
        }

        impl $Trait for Number {
            type Output = Result<Number>;

            fn $method(self, rhs: Self) -> Result<Number> {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_arithmetic!(Add, add);
impl_arithmetic!(Sub, sub);
impl_arithmetic!(Mul, mul);
impl_arithmetic!(Div, div);

impl Neg for &Number {
    type Output = Result<Number>;

    fn neg(self) -> Result<Number> {
        Calculator::new(self.backend().unwrap_or_default()).neg(self)
    }
}
