// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

use std::{error::Error, fmt};

use crate::Backend;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberError {
    /// The operand kind is not accepted in this context.
    UnsupportedType(String),
    /// A divisor, denominator or divisor modulus is zero.
    DivisionByZero,
    /// The operands were built under different backends.
    BackendMismatch { left: Backend, right: Backend },
    /// A native integer operation left the range of `i64`.
    Overflow(String),
    /// A constrained value was built outside of its domain.
    InvalidValue(String),
    Parse(String),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumberError::UnsupportedType(t) => write!(f, "Unsupported operand type: {t}"),
            NumberError::DivisionByZero => write!(f, "Division by zero"),
            NumberError::BackendMismatch { left, right } => {
                write!(f, "Cannot mix {left} and {right} backends")
            }
            NumberError::Overflow(op) => write!(f, "Integer overflow in {op}"),
            NumberError::InvalidValue(value) => write!(f, "Invalid value: {value}"),
            NumberError::Parse(string) => write!(f, "Failed to parse: {string}"),
        }
    }
}

impl Error for NumberError {}

pub type Result<T> = std::result::Result<T, NumberError>;
