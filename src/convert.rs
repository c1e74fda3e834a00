// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Conversion of floats into rationals by continued-fraction expansion.
//!
//! The conversion is lossy: the result is the first convergent within one
//! `f64::EPSILON` of relative error, not the exact binary value of the float.

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::{
    Backend, Integer, Rational,
    error::{NumberError, Result},
};

/// Upper bound on the number of continued-fraction terms.
const MAX_TERMS: usize = 64;

/// Converts the integral float `x` into an integer of the given backend.
fn integral_float(x: f64, backend: Backend) -> Result<Integer> {
    match backend {
        Backend::Native => {
            // i64::MIN as f64 is exactly -2^63
            if x >= i64::MIN as f64 && x < -(i64::MIN as f64) {
                Ok(Integer::Native(x as i64))
            } else {
                Err(NumberError::Overflow("conversion from float".into()))
            }
        }
        Backend::Arbitrary => BigInt::from_f64(x)
            .map(Integer::Big)
            .ok_or_else(|| NumberError::InvalidValue(x.to_string())),
    }
}

/// Approximates `x` by a continued fraction.
///
/// Expansion stops at the first convergent p/q with |p/q − x| ≤ |x|·ε, after
/// [`MAX_TERMS`] terms, or, in the native backend, when the next convergent
/// would overflow; the last convergent that fits is then returned.
///
/// NaN and the infinities have no rational form and fail with
/// [`NumberError::InvalidValue`]. A float whose integer part does not fit the
/// native backend fails with [`NumberError::Overflow`], and so does a nonzero
/// float too small for any native convergent other than 0.
///
/// # Example
///
/// ```
/// # use numtower::{Backend, convert::float_to_rational};
/// #
/// let r = float_to_rational(0.1, Backend::Native).unwrap();
/// assert_eq!(r.to_string(), "1/10");
/// ```
pub fn float_to_rational(x: f64, backend: Backend) -> Result<Rational> {
    if !x.is_finite() {
        return Err(NumberError::InvalidValue(format!("{x} has no rational form")));
    }
    // Expanding the magnitude keeps `rest - term` from rounding a tiny
    // negative float up to a whole term
    let magnitude = x.abs();
    let tolerance = magnitude * f64::EPSILON;
    // Convergent recurrences, seeded with h₋₂ = 0, h₋₁ = 1, k₋₂ = 1, k₋₁ = 0
    let (mut h2, mut h1) = (Integer::zero(backend), Integer::one(backend));
    let (mut k2, mut k1) = (Integer::one(backend), Integer::zero(backend));
    let mut best: Option<Rational> = None;
    let mut rest = magnitude;

    for _ in 0..MAX_TERMS {
        let term = rest.floor();
        let next = integral_float(term, backend).and_then(|a| {
            let h = a.checked_mul(&h1)?.checked_add(&h2)?;
            let k = a.checked_mul(&k1)?.checked_add(&k2)?;
            Ok((h, k))
        });
        let (h, k) = match next {
            Ok(hk) => hk,
            // Out of range after at least one term: keep what we have
            Err(e) if best.is_none() => return Err(e),
            Err(_) => break,
        };
        let convergent = Rational::new(h.clone(), k.clone())?;
        let error = (convergent.to_f64() - magnitude).abs();
        best = Some(convergent);
        (h2, h1) = (h1, h);
        (k2, k1) = (k1, k);

        let fraction = rest - term;
        if error <= tolerance || fraction == 0.0 {
            break;
        }
        rest = fraction.recip();
    }

    let best = best.ok_or_else(|| NumberError::InvalidValue(x.to_string()))?;
    if best.is_zero() && magnitude != 0.0 {
        // Too small for any convergent the backend can hold
        return Err(NumberError::Overflow("conversion from float".into()));
    }
    if x.is_sign_negative() { best.checked_neg() } else { Ok(best) }
}
