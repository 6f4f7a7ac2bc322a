//! Join-column resolution for sub-resource listings.

use crate::errors::ApiError;
use crate::resource::SearchResource;

/// Resolve a parent path segment into the child's join-column pair, e.g.
/// `/store/{id}/inventorys` into `("storeId", id)` for the inventory
/// resource.
///
/// Pure lookup against the resource's join-column table; the returned pair
/// is appended to the criteria's join columns and compiled as one more AND'd
/// equality fragment.
///
/// # Errors
///
/// Returns `ApiError::InvalidJoinColumn` when the resource does not declare
/// the relation; callers must treat this as an invalid request.
pub fn resolve_join_column<T: SearchResource>(
    name: &str,
    value: &str,
) -> Result<(String, String), ApiError> {
    if T::join_columns()
        .iter()
        .any(|descriptor| descriptor.name == name)
    {
        Ok((name.to_string(), value.to_string()))
    } else {
        Err(ApiError::invalid_join_column(name))
    }
}
