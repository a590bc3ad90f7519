//! InfluxQL statement planning for IOx.
//!
//! Metadata statements such as `SHOW TAG VALUES` are rewritten by
//! [`plan::rewrite_statement`] into `SELECT` statements over virtual system
//! tables, so they share a single execution path with regular queries.
#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]

pub mod plan;
