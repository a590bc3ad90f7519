//! This crate exists to coordinate versions of `tracing` and related crates
//! so that we can manage their updates in a single crate.

#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls, rust_2018_idioms)]

// Export these crates publicly so we can have a single reference
pub use tracing;
