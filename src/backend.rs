// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::{
    ArbitraryComparator, Calculator, Comparator, Factory, NativeComparator,
    error::{NumberError, Result},
};

/// The integer representation used for `Int`, `Rational` and `Complex` values.
///
/// Floats are always native and have no backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Fixed-width `i64` words with overflow checking on every operation.
    #[default]
    Native,
    /// Unbounded `BigInt` magnitudes.
    Arbitrary,
}

impl Backend {
    /// Fails with [`NumberError::BackendMismatch`] unless `self` and `other`
    /// are the same backend.
    #[inline]
    pub fn ensure_same(self, other: Backend) -> Result<Backend> {
        if self == other {
            Ok(self)
        } else {
            Err(NumberError::BackendMismatch {
                left: self,
                right: other,
            })
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => write!(f, "native"),
            Backend::Arbitrary => write!(f, "arbitrary-precision"),
        }
    }
}

/// A calculation context.
///
/// The backend is chosen once when the context is built and handed to every
/// factory, calculator and comparator created from it, so that all values
/// that meet in one operation share a representation.
///
/// # Example
///
/// ```
/// # use numtower::{Backend, Context};
/// #
/// let ctx = Context::new(Backend::Arbitrary);
/// let f = ctx.factory();
/// let sum = ctx.calculator().add(&f.int(1), &f.int(2)).unwrap();
/// assert_eq!(sum.to_string(), "3");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    backend: Backend,
}

impl Context {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn factory(&self) -> Factory {
        Factory::new(self.backend)
    }

    pub fn calculator(&self) -> Calculator {
        Calculator::new(self.backend)
    }

    /// Returns the comparison engine matching the context's backend.
    pub fn comparator(&self) -> Box<dyn Comparator + Send + Sync> {
        match self.backend {
            Backend::Native => Box::new(NativeComparator),
            Backend::Arbitrary => Box::new(ArbitraryComparator),
        }
    }
}
