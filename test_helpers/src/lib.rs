#![deny(rustdoc::broken_intra_doc_links, rustdoc::bare_urls, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    clippy::explicit_iter_loop,
    clippy::use_self,
    clippy::clone_on_ref_ptr
)]

use std::sync::Once;

pub mod tracing;

/// A test helper function for asserting that a string contains another string.
#[macro_export]
macro_rules! assert_contains {
    ($ACTUAL: expr, $EXPECTED: expr) => {
        let actual_value: String = $ACTUAL.into();
        let expected_value: String = $EXPECTED.into();
        assert!(
            actual_value.contains(&expected_value),
            "Can not find expected in actual.\n\nExpected:\n{}\n\nActual:\n{}",
            expected_value,
            actual_value
        );
    };
}

/// A test helper function for asserting that a string does not contain another string.
#[macro_export]
macro_rules! assert_not_contains {
    ($ACTUAL: expr, $UNEXPECTED: expr) => {
        let actual_value: String = $ACTUAL.into();
        let unexpected_value: String = $UNEXPECTED.into();
        assert!(
            !actual_value.contains(&unexpected_value),
            "Found unexpected in actual.\n\nUnexpected:\n{}\n\nActual:\n{}",
            unexpected_value,
            actual_value
        );
    };
}

/// Assert that an operation fails with an error matching the given pattern.
#[macro_export]
macro_rules! assert_error {
    ($OPERATION: expr, $(|)? $( $ERROR_PATTERN:pat_param )|+ $( if $GUARD: expr )? $(,)?) => {
        let err = $OPERATION.unwrap_err();
        assert!(
            matches!(err, $( $ERROR_PATTERN )|+ $( if $GUARD )?),
            "Expected {}, but got {:?}",
            stringify!($( $ERROR_PATTERN )|+ $( if $GUARD )?),
            err
        );
    };
}

static LOG_SETUP: Once = Once::new();

/// Enables debug logging if the RUST_LOG or TEST_LOG environment variable
/// is set. Does nothing otherwise.
///
/// Variables in a `.env` file in the working directory, or any parent, are
/// loaded first.
pub fn maybe_start_logging() {
    dotenvy::dotenv().ok();
    if std::env::var("RUST_LOG").is_ok() || std::env::var("TEST_LOG").is_ok() {
        start_logging()
    }
}

/// Start logging for tests, using the filter in RUST_LOG, or `debug` when it
/// is unset. Records emitted through the `log` crate are forwarded as well.
///
/// Only the first call installs the subscriber.
pub fn start_logging() {
    use tracing_subscriber::{filter::EnvFilter, fmt};

    LOG_SETUP.call_once(|| {
        tracing_log::LogTracer::init().expect("Cannot init log->trace integration");

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        observability_deps::tracing::subscriber::set_global_default(subscriber)
            .expect("Cannot set global tracing subscriber");
    })
}
