use snafu::Snafu;

/// Errors returned when rewriting a statement.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{statement} doesn't support time in WHERE clause"))]
    UnsupportedTimePredicate { statement: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
