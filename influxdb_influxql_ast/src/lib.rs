//! # InfluxQL statement tree
//!
//! Types describing parsed [InfluxQL] statements and the expressions they
//! contain. Every node renders back to its canonical InfluxQL text via
//! [`std::fmt::Display`], which is what downstream tooling compares against.
//!
//! [InfluxQL]: https://docs.influxdata.com/influxdb/v1.8/query_language
#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]

pub mod common;
pub mod expression;
pub mod identifier;
pub mod literal;
pub mod select;
pub mod show;
pub mod show_field_keys;
pub mod show_measurements;
pub mod show_tag_keys;
pub mod show_tag_values;
pub mod statement;
pub mod string;
