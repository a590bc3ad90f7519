mod error;
mod rewriter;
#[cfg(test)]
mod test_utils;
mod util;

pub use error::{Error, Result};
pub use rewriter::{
    rewrite_statement, FIELD_KEYS_TABLE, MEASUREMENTS_TABLE, TAGS_TABLE, TAG_KEYS_TABLE,
};
pub use util::has_time_expr;
