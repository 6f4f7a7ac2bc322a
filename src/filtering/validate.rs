//! Field allow-list validation, run before any predicate is compiled.

use crate::criteria::SearchCriteria;
use crate::errors::ApiError;
use crate::resource::FieldDescriptor;

/// Verify every field name in the criteria belongs to the resource's
/// allow-list. Names are matched after `%20`-stripping and trimming; the
/// error quotes the raw name.
///
/// # Errors
///
/// Returns `ApiError::InvalidField` naming the first offending field.
pub fn check_properties<C>(
    criteria: &SearchCriteria,
    fields: &[FieldDescriptor<C>],
) -> Result<(), ApiError> {
    for field in &criteria.fields {
        let name = field.lookup_name();
        if !fields.iter().any(|descriptor| descriptor.name == name) {
            return Err(ApiError::invalid_field(&field.name));
        }
    }
    Ok(())
}
