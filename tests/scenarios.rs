// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! End-to-end scenarios run against both backends through a `Context`.

use std::cmp::Ordering;

use numtower::{Backend, Context, Kind, Number, NumberError};
use rust_decimal::Decimal;

const BACKENDS: [Backend; 2] = [Backend::Native, Backend::Arbitrary];

#[test]
fn add_ints() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let sum = ctx.calculator().add(&f.int(1), &f.int(2)).unwrap();
        assert_eq!(sum.kind(), Kind::Int);
        assert_eq!(sum.to_string(), "3");
    }
}

#[test]
fn add_floats() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let sum = ctx.calculator().add(&f.float(2.0), &f.float(3.0)).unwrap();
        assert_eq!(sum.kind(), Kind::Float);
        assert_eq!(sum.to_string(), "5.0");
    }
}

#[test]
fn add_whole_and_natural() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let sum = ctx
            .calculator()
            .add(&f.whole(2).unwrap(), &f.natural(3).unwrap())
            .unwrap();
        // The weaker of the two constraints applies
        assert_eq!(sum.kind(), Kind::WholeInt);
        assert_eq!(sum, f.int(5));
    }
}

#[test]
fn add_rationals() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let four = f.rational(4, 1).unwrap();
        let sum = ctx.calculator().add(&four, &four).unwrap();
        assert_eq!(sum.kind(), Kind::Rational);
        assert_eq!(sum.to_string(), "8/1");
    }
}

#[test]
fn compare_complex_by_modulus() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let ordering = ctx.comparator().compare(&f.complex(2, 3), &f.complex(5, -2)).unwrap();
        assert_eq!(ordering, Ordering::Less);
        assert_eq!(ordering as i8, -1);
    }
}

#[test]
fn divide_by_zero_rational() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let result = ctx
            .calculator()
            .div(&f.rational(1, 1).unwrap(), &f.rational(0, 1).unwrap());
        assert_eq!(result, Err(NumberError::DivisionByZero));
    }
}

#[test]
fn inexact_integer_division_promotes() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let calc = ctx.calculator();
        let q = calc.div(&f.int(7), &f.int(2)).unwrap();
        assert_eq!(q.kind(), Kind::Rational);
        assert_eq!(q.to_string(), "7/2");
        let q = calc.div(&f.natural(8).unwrap(), &f.natural(2).unwrap()).unwrap();
        assert_eq!(q.kind(), Kind::NaturalInt);
        assert_eq!(q.to_string(), "4");
    }
}

#[test]
fn mixed_kinds_promote() {
    for backend in BACKENDS {
        let ctx = Context::new(backend);
        let f = ctx.factory();
        let calc = ctx.calculator();
        let r = calc.add(&f.int(1), &f.rational(1, 2).unwrap()).unwrap();
        assert_eq!(r.to_string(), "3/2");
        let c = calc.mul(&f.rational(1, 2).unwrap(), &f.complex(2, 4)).unwrap();
        assert_eq!(c.to_string(), "1+2i");
        let x = calc.sub(&f.float(0.5), &f.int(2)).unwrap();
        assert_eq!(x, f.float(-1.5));
    }
}

#[test]
fn native_overflow_is_reported() {
    let ctx = Context::new(Backend::Native);
    let f = ctx.factory();
    let result = ctx.calculator().add(&f.int(i64::MAX), &f.int(1));
    assert!(matches!(result, Err(NumberError::Overflow(_))));
}

#[test]
fn arbitrary_backend_does_not_overflow() {
    let ctx = Context::new(Backend::Arbitrary);
    let f = ctx.factory();
    let calc = ctx.calculator();
    let big = calc.mul(&f.int(i64::MAX), &f.int(i64::MAX)).unwrap();
    assert_eq!(big.to_string(), "85070591730234615847396907784232501249");
    let back = calc.div(&big, &f.int(i64::MAX)).unwrap();
    assert_eq!(back, f.int(i64::MAX));
}

#[test]
fn backends_do_not_mix() {
    let native = Context::new(Backend::Native);
    let big = Context::new(Backend::Arbitrary);
    let result = native
        .calculator()
        .add(&native.factory().int(1), &big.factory().int(1));
    assert!(matches!(result, Err(NumberError::BackendMismatch { .. })));
}

#[test]
fn operators_pick_the_operand_backend() {
    let f = Context::new(Backend::Arbitrary).factory();
    let sum = (&f.int(2) + &f.rational(1, 3).unwrap()).unwrap();
    assert_eq!(sum.backend(), Some(Backend::Arbitrary));
    assert_eq!(sum.to_string(), "7/3");
    let product = (f.complex(0, 1) * f.complex(0, 1)).unwrap();
    assert_eq!(product, f.int(-1));
    assert_eq!((-&f.natural(3).unwrap()).unwrap().kind(), Kind::Int);
}

#[test]
fn parse_and_compute() {
    let ctx = Context::default();
    let calc = ctx.calculator();
    let a: Number = "1/2+3/4i".parse().unwrap();
    let b: Number = "0.25".parse().unwrap();
    let sum = calc.add(&a, &b).unwrap();
    assert_eq!(sum.to_string(), "3/4+3/4i");
    let exact = ctx.factory().decimal(Decimal::new(1, 1)).unwrap();
    let tenth = calc.mul(&exact, &ctx.factory().int(10)).unwrap();
    assert_eq!(tenth, ctx.factory().int(1));
}
