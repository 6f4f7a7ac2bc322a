//! The predicate compiler: criteria in, conjunctive `Condition` out.

use sea_orm::{ColumnTrait, Condition, sea_query::SimpleExpr};

use crate::criteria::{SearchCriteria, SearchField, SearchOperator};
use crate::errors::ApiError;
use crate::resource::{FieldDescriptor, FieldKind, JoinDescriptor, SearchResource};

use super::validate::check_properties;

/// Digits-only numeric gate. Signs, decimals and surrounding whitespace all
/// fail, and a failing operand drops the fragment instead of erroring - the
/// leniency the API has always had.
fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn numeric_operand(value: Option<&str>) -> Option<i64> {
    let value = value?;
    if is_numeric(value) {
        value.parse().ok()
    } else {
        None
    }
}

/// Compile search criteria for one resource into a conjunctive condition.
///
/// Field names are validated first; compilation only starts once the whole
/// criteria set passed the allow-list. Empty criteria yield `Condition::all()`
/// with no children, the identity that matches every record. Join-column
/// equality fragments are appended after the field fragments.
///
/// A repeated field name keeps the position of its first occurrence but the
/// last clause wins, so the emitted expression is deterministic for a given
/// input order.
///
/// # Errors
///
/// - `ApiError::InvalidField` when a field name is not in the allow-list.
/// - `ApiError::InvalidJoinColumn` when a join column is unknown to the
///   resource or its value cannot be parsed for an integer column.
pub fn compile_search<T: SearchResource>(criteria: &SearchCriteria) -> Result<Condition, ApiError> {
    let fields = T::search_fields();
    check_properties(criteria, &fields)?;

    let mut entries: Vec<(String, &SearchField)> = Vec::new();
    for field in &criteria.fields {
        let name = field.lookup_name();
        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = field,
            None => entries.push((name, field)),
        }
    }

    let mut condition = Condition::all();
    for (name, field) in &entries {
        // Lookup cannot fail after check_properties, but stay total.
        if let Some(descriptor) = fields.iter().find(|descriptor| descriptor.name == *name)
            && let Some(fragment) = compile_field(field, descriptor)
        {
            condition = condition.add(fragment);
        }
    }

    for (name, value) in &criteria.join_columns {
        condition = condition.add(compile_join_column(name, value, &T::join_columns())?);
    }

    Ok(condition)
}

fn compile_field<C: ColumnTrait + Copy>(
    field: &SearchField,
    descriptor: &FieldDescriptor<C>,
) -> Option<SimpleExpr> {
    match (field.operator, descriptor.kind) {
        (SearchOperator::Equals, FieldKind::Integer) => {
            numeric_operand(field.value.as_deref()).map(|value| descriptor.column.eq(value))
        }
        (SearchOperator::NotEqual, FieldKind::Integer) => {
            numeric_operand(field.value.as_deref()).map(|value| descriptor.column.ne(value))
        }
        (SearchOperator::Equals, FieldKind::Text) => {
            field.value.as_deref().map(|value| descriptor.column.eq(value))
        }
        (SearchOperator::NotEqual, FieldKind::Text) => {
            field.value.as_deref().map(|value| descriptor.column.ne(value))
        }
        (SearchOperator::Range, _) => compile_range(field, descriptor),
    }
}

fn compile_range<C: ColumnTrait + Copy>(
    field: &SearchField,
    descriptor: &FieldDescriptor<C>,
) -> Option<SimpleExpr> {
    // Range is a numeric-only operator; on text columns it emits nothing.
    if descriptor.kind != FieldKind::Integer {
        return None;
    }
    let start = numeric_operand(field.starting_value.as_deref());
    let end = numeric_operand(field.ending_value.as_deref());
    match (start, end) {
        (Some(start), Some(end)) => Some(descriptor.column.between(start, end)),
        (Some(start), None) => Some(descriptor.column.gte(start)),
        (None, Some(end)) => Some(descriptor.column.lte(end)),
        (None, None) => None,
    }
}

fn compile_join_column<C: ColumnTrait + Copy>(
    name: &str,
    value: &str,
    joins: &[JoinDescriptor<C>],
) -> Result<SimpleExpr, ApiError> {
    let descriptor = joins
        .iter()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| ApiError::invalid_join_column(name))?;

    match descriptor.kind {
        FieldKind::Integer => {
            let id: i64 = value
                .parse()
                .map_err(|_| ApiError::invalid_join_column(name))?;
            Ok(descriptor.column.eq(id))
        }
        FieldKind::Text => Ok(descriptor.column.eq(value)),
    }
}
