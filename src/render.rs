//! LookML block rendering for columns missing from a view.
//!
//! Generated field names may have a configured suffix excluded, but the SQL
//! reference always uses the original column name so the generated block
//! stays valid against the table.

use crate::schema::ColumnDescriptor;
use crate::typemap::{LookmlType, lookml_type};

const TIMEFRAMES: &str = "[raw, time, date, week, month, quarter, year]";

/// Renders the LookML block for one column, dispatching on its mapped type.
pub fn render_column(column: &ColumnDescriptor, suffix: Option<&str>) -> String {
    match lookml_type(&column.sql_type) {
        LookmlType::Time => render_time_group(&column.name, suffix),
        LookmlType::Double => render_double_group(&column.name, suffix),
        mapped => render_dimension(&mapped, &column.name, suffix),
    }
}

fn render_dimension(mapped: &LookmlType, name: &str, suffix: Option<&str>) -> String {
    let field = exclude_suffix(name, suffix);
    format!("dimension: {field} {{\n    type: {mapped}\n    sql: ${{TABLE}}.{name} ;;\n}}\n")
}

fn render_time_group(name: &str, suffix: Option<&str>) -> String {
    // Looker appends each timeframe to the group name, so a literal _date
    // token in the field name would collide with the generated date field.
    let field = before(exclude_suffix(name, suffix), "_date");
    format!(
        "dimension_group: {field} {{\n    type: time\n    timeframes: {TIMEFRAMES}\n    sql: ${{TABLE}}.{name} ;;\n    convert_tz: no\n}}\n"
    )
}

fn render_double_group(name: &str, suffix: Option<&str>) -> String {
    let field = exclude_suffix(name, suffix);
    format!(
        "dimension_group: {field} {{\n    type: number\n    timeframes: {TIMEFRAMES}\n    sql: ${{TABLE}}.{name}::decimal(20,7) ;;\n}}\n"
    )
}

/// Field name with the configured suffix excluded: the prefix before the
/// first occurrence of the suffix, or the name unchanged when no suffix was
/// configured or the suffix does not occur.
fn exclude_suffix<'a>(name: &'a str, suffix: Option<&str>) -> &'a str {
    match suffix {
        Some(token) if !token.is_empty() => before(name, token),
        _ => name,
    }
}

fn before<'a>(value: &'a str, needle: &str) -> &'a str {
    match value.find(needle) {
        Some(pos) => &value[..pos],
        None => value,
    }
}
