//! A typed numeric tower with exact arithmetic over native or
//! arbitrary-precision integers.

mod backend;
mod calculator;
pub mod coerce;
mod comparator;
mod complex;
pub mod convert;
mod error;
mod factory;
mod integer;
mod number;
mod rational;

pub use backend::{Backend, Context};
pub use calculator::Calculator;
pub use comparator::{ArbitraryComparator, Comparator, NativeComparator};
pub use complex::Complex;
pub use error::{NumberError, Result};
pub use factory::Factory;
pub use integer::Integer;
pub use number::{Kind, Number};
pub use rational::Rational;
