use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query parameters accepted by the listing endpoints.
///
/// # Searching
/// The `search` parameter carries `;`-separated clauses of the form
/// `name[operator]=value` with operators `equals`, `notEqual` and `range`
/// (range operands as `start,end`), for example:
/// ```text
/// search=storeId[equals]=1;inventoryId[range]=5,10
/// ```
///
/// # Pagination
/// Offset-based: `offset` (records to skip, default 0) and `limit` (page
/// size, default 10).
///
/// # Sorting
/// `sort` names a sortable column, `order` is `ASC` or `DESC`. Unset or
/// unknown columns fall back to the resource's id column ascending.
#[derive(Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Search clauses in `name[operator]=value` form, separated by `;`.
    #[param(example = "storeId[equals]=1;inventoryId[range]=5,10")]
    pub search: Option<String>,
    /// Number of records to skip.
    #[param(example = 0)]
    pub offset: Option<u64>,
    /// Maximum number of records to return.
    #[param(example = 10)]
    pub limit: Option<u64>,
    /// Sort column name.
    #[param(example = "storeId")]
    pub sort: Option<String>,
    /// Sort direction, `ASC` or `DESC`.
    #[param(example = "ASC")]
    pub order: Option<String>,
}
