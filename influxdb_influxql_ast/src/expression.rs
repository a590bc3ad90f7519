//! Types describing InfluxQL arithmetic and conditional expressions.

pub use arithmetic::*;
pub use conditional::*;

pub mod arithmetic;
pub mod conditional;
pub mod walk;
