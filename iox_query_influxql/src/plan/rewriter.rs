use crate::plan::error::{self, Result};
use crate::plan::util::{conjunction, has_time_expr, measurement_filter, tag_key_filter};
use influxdb_influxql_ast::common::{
    LimitClause, OffsetClause, OrderByClause, QualifiedMeasurementName, WhereClause,
};
use influxdb_influxql_ast::expression::ConditionalExpression;
use influxdb_influxql_ast::select::{
    Field, FieldList, FromMeasurementClause, MeasurementSelection, SelectStatement,
};
use influxdb_influxql_ast::show_field_keys::ShowFieldKeysStatement;
use influxdb_influxql_ast::show_measurements::ShowMeasurementsStatement;
use influxdb_influxql_ast::show_tag_keys::ShowTagKeysStatement;
use influxdb_influxql_ast::show_tag_values::ShowTagValuesStatement;
use influxdb_influxql_ast::statement::Statement;
use observability_deps::tracing::{debug, trace};
use snafu::ensure;

/// Virtual table listing the field keys of each measurement.
pub const FIELD_KEYS_TABLE: &str = "_fieldKeys";

/// Virtual table listing the measurement names.
pub const MEASUREMENTS_TABLE: &str = "_measurements";

/// Virtual table listing the tag keys of each measurement.
pub const TAG_KEYS_TABLE: &str = "_tagKeys";

/// Virtual table listing the tag key and value pairs of each measurement.
pub const TAGS_TABLE: &str = "_tags";

/// Column of the virtual tables holding the measurement name.
const NAME_COLUMN: &str = "name";

/// Column of [`TAGS_TABLE`] holding the tag key.
const KEY_COLUMN: &str = "key";

/// Rewrite `stmt` into an equivalent `SELECT` statement over one of the
/// virtual metadata tables, if it is a `SHOW FIELD KEYS`, `SHOW MEASUREMENTS`,
/// `SHOW TAG KEYS` or `SHOW TAG VALUES` statement.
///
/// Any other statement is returned unchanged.
///
/// The statement is consumed and its predicate moved into the result.
pub fn rewrite_statement(stmt: Statement) -> Result<Statement> {
    let select = match stmt {
        Statement::ShowFieldKeys(s) => rewrite_show_field_keys(s),
        Statement::ShowMeasurements(s) => rewrite_show_measurements(s)?,
        Statement::ShowTagKeys(s) => rewrite_show_tag_keys(s)?,
        Statement::ShowTagValues(s) => rewrite_show_tag_values(s)?,
        stmt @ (Statement::Select(_)
        | Statement::ShowDatabases(_)
        | Statement::ShowRetentionPolicies(_)
        | Statement::ShowSeries(_)) => {
            trace!(statement = %stmt, "statement not rewritten");
            return Ok(stmt);
        }
    };

    debug!(statement = %select, "rewrote metadata statement");
    Ok(select.into())
}

fn rewrite_show_field_keys(stmt: ShowFieldKeysStatement) -> SelectStatement {
    // There is no WHERE clause, so there is nothing to check for time.
    let condition = first_measurement(&stmt.from).and_then(|m| measurement_filter(NAME_COLUMN, m));

    metadata_select(
        &["fieldKey"],
        FIELD_KEYS_TABLE,
        condition,
        stmt.order_by,
        stmt.limit,
        stmt.offset,
    )
}

fn rewrite_show_measurements(stmt: ShowMeasurementsStatement) -> Result<SelectStatement> {
    let condition = stmt.condition.map(WhereClause::into_inner);
    ensure_no_time_expr(condition.as_ref(), "SHOW MEASUREMENTS")?;

    let filter = stmt
        .with_measurement
        .as_ref()
        .and_then(|m| measurement_filter(NAME_COLUMN, m));

    Ok(metadata_select(
        &["name"],
        MEASUREMENTS_TABLE,
        conjunction(filter, condition),
        stmt.order_by,
        stmt.limit,
        stmt.offset,
    ))
}

fn rewrite_show_tag_keys(stmt: ShowTagKeysStatement) -> Result<SelectStatement> {
    let condition = stmt.condition.map(WhereClause::into_inner);
    ensure_no_time_expr(condition.as_ref(), "SHOW TAG KEYS")?;

    let filter = first_measurement(&stmt.from).and_then(|m| measurement_filter(NAME_COLUMN, m));

    Ok(metadata_select(
        &["tagKey"],
        TAG_KEYS_TABLE,
        conjunction(filter, condition),
        stmt.order_by,
        stmt.limit,
        stmt.offset,
    ))
}

fn rewrite_show_tag_values(stmt: ShowTagValuesStatement) -> Result<SelectStatement> {
    let condition = stmt.condition.map(WhereClause::into_inner);
    ensure_no_time_expr(condition.as_ref(), "SHOW TAG VALUES")?;

    let filter = first_measurement(&stmt.from).and_then(|m| measurement_filter(NAME_COLUMN, m));
    let condition = conjunction(filter, condition);

    // The tag key filter is the right operand, unlike the measurement filter.
    let condition = conjunction(condition, tag_key_filter(KEY_COLUMN, &stmt.with_key));

    Ok(metadata_select(
        &["key", "value"],
        TAGS_TABLE,
        condition,
        stmt.order_by,
        stmt.limit,
        stmt.offset,
    ))
}

/// Returns an error for `statement` if `condition` refers to the `time` column.
fn ensure_no_time_expr(
    condition: Option<&ConditionalExpression>,
    statement: &'static str,
) -> Result<()> {
    ensure!(
        !condition.map_or(false, has_time_expr),
        error::UnsupportedTimePredicateSnafu { statement }
    );
    Ok(())
}

/// Returns the first source of `from`, if it is a measurement.
fn first_measurement(from: &FromMeasurementClause) -> Option<&QualifiedMeasurementName> {
    from.first().and_then(MeasurementSelection::measurement)
}

/// Build a `SELECT` of `fields` from the virtual table `table`.
fn metadata_select(
    fields: &[&str],
    table: &str,
    condition: Option<ConditionalExpression>,
    order_by: Option<OrderByClause>,
    limit: Option<LimitClause>,
    offset: Option<OffsetClause>,
) -> SelectStatement {
    SelectStatement {
        fields: FieldList::new(fields.iter().map(|name| Field::var_ref(*name)).collect()),
        from: FromMeasurementClause::new(vec![QualifiedMeasurementName::new(table).into()]),
        condition: condition.map(WhereClause::new),
        order_by,
        limit,
        offset,
        omit_time: true,
        dedupe: true,
    }
}
