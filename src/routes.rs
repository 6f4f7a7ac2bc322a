//! Generic Axum handlers for the listing endpoints.
//!
//! `list` serves a plain collection (`GET /inventory`); `list_scoped` serves
//! a sub-resource collection under a parent id (`GET /store/{id}/inventorys`),
//! resolving the join column before compilation. Both return one page of
//! results with a Content-Range header.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::criteria::SearchCriteria;
use crate::errors::ApiError;
use crate::filtering::{
    calculate_content_range, compile_search, parse_page, parse_sorting, resolve_join_column,
};
use crate::models::ListParams;
use crate::resource::SearchResource;

/// List one page of a resource collection.
///
/// # Errors
///
/// `ApiError::InvalidField` for an unknown search field, `ApiError::Database`
/// when the query fails.
pub async fn list<T>(
    Query(params): Query<ListParams>,
    State(db): State<DatabaseConnection>,
) -> Result<(HeaderMap, Json<Vec<T>>), ApiError>
where
    T: SearchResource + Serialize,
{
    let criteria = SearchCriteria::parse(params.search.as_deref());
    list_with_criteria::<T>(&db, &criteria, &params).await
}

/// Fetch a single resource by its id (`GET /inventory/{id}`).
///
/// # Errors
///
/// `ApiError::NotFound` when no record carries the id, `ApiError::Database`
/// when the query fails.
pub async fn get_one<T>(
    Path(id): Path<i64>,
    State(db): State<DatabaseConnection>,
) -> Result<Json<T>, ApiError>
where
    T: SearchResource + Serialize,
{
    match T::get_one(&db, id).await.map_err(ApiError::database)? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::not_found(
            T::RESOURCE_NAME_SINGULAR,
            Some(id.to_string()),
        )),
    }
}

/// List one page of a sub-resource collection scoped by a parent id.
///
/// `join_column` is the child's foreign-key field name for the parent
/// relation, fixed per route (e.g. `storeId` for `/store/{id}/inventorys`).
///
/// # Errors
///
/// `ApiError::InvalidJoinColumn` when the resource does not declare the join
/// column, plus everything [`list`] can return.
pub async fn list_scoped<T>(
    db: &DatabaseConnection,
    join_column: &str,
    parent_id: &str,
    params: &ListParams,
) -> Result<(HeaderMap, Json<Vec<T>>), ApiError>
where
    T: SearchResource + Serialize,
{
    let (name, value) = resolve_join_column::<T>(join_column, parent_id)?;
    let criteria = SearchCriteria::parse(params.search.as_deref()).with_join_column(name, value);
    list_with_criteria::<T>(db, &criteria, params).await
}

async fn list_with_criteria<T>(
    db: &DatabaseConnection,
    criteria: &SearchCriteria,
    params: &ListParams,
) -> Result<(HeaderMap, Json<Vec<T>>), ApiError>
where
    T: SearchResource + Serialize,
{
    let condition = compile_search::<T>(criteria)?;
    let (order_column, order_direction) =
        parse_sorting(params, &T::sortable_columns(), T::default_sort_column());
    let (offset, limit) = parse_page(params);

    let items = T::find(db, &condition, order_column, order_direction, offset, limit)
        .await
        .map_err(ApiError::database)?;
    let total_count = T::total_count(db, &condition)
        .await
        .map_err(ApiError::database)?;

    let headers = calculate_content_range(offset, limit, total_count, T::RESOURCE_NAME_PLURAL);
    Ok((headers, Json(items)))
}
