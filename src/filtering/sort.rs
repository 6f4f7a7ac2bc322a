use sea_orm::{ColumnTrait, sea_query::Order};

use crate::models::ListParams;

const DEFAULT_SORT_ORDER: &str = "ASC";

/// Convert a sort order string to the `Order` enum.
fn parse_order(sort_order: &str) -> Order {
    if sort_order.eq_ignore_ascii_case("ASC") {
        Order::Asc
    } else {
        Order::Desc
    }
}

/// Find a sortable column by name or fall back to the default.
fn find_column<C>(column_name: &str, columns: &[(&str, C)], default: C) -> C
where
    C: ColumnTrait + Copy,
{
    columns
        .iter()
        .find(|&&(name, _)| name == column_name)
        .map_or(default, |&(_, column)| column)
}

/// Parse `sort`/`order` parameters against the resource's sortable columns.
/// Missing or unknown sort columns fall back to the default column, missing
/// order to ascending - every listing endpoint sorts by its id column unless
/// told otherwise.
pub fn parse_sorting<C>(
    params: &ListParams,
    sortable_columns: &[(&str, C)],
    default_column: C,
) -> (C, Order)
where
    C: ColumnTrait + Copy,
{
    let order = params.order.as_deref().unwrap_or(DEFAULT_SORT_ORDER);
    let direction = parse_order(order);
    let column = params
        .sort
        .as_deref()
        .map_or(default_column, |name| {
            find_column(name, sortable_columns, default_column)
        });
    (column, direction)
}
