//! # Search Compilation
//!
//! Turns caller-supplied [`SearchCriteria`](crate::criteria::SearchCriteria)
//! into a conjunctive [`sea_orm::Condition`] for one resource, plus the sort
//! and pagination helpers the listing endpoints share.
//!
//! The pipeline is reject-first: every field name is checked against the
//! resource's allow-list before any predicate fragment is built, so an
//! unknown property fails the request without producing a partial filter.
//! Within the compiler the leniency goes the other way - a non-numeric
//! operand on an integer field simply emits no fragment.
//!
//! ## Query examples
//!
//! ```text
//! // Single equality
//! GET /inventory?search=inventoryId[equals]=5
//!
//! // Inclusive range, both bounds numeric
//! GET /inventory?search=inventoryId[range]=5,10
//!
//! // Open-ended range (only the numeric bound applies)
//! GET /inventory?search=inventoryId[range]=5,abc
//!
//! // Sub-resource listing, join column resolved from the path
//! GET /store/1/inventorys?search=filmId[notEqual]=7
//!
//! // Sorting and pagination
//! GET /inventory?sort=inventoryId&order=DESC&offset=10&limit=10
//! ```

pub mod compile;
pub mod join;
pub mod pagination;
pub mod sort;
pub mod validate;

pub use compile::compile_search;
pub use join::resolve_join_column;
pub use pagination::{calculate_content_range, parse_page};
pub use sort::parse_sorting;
pub use validate::check_properties;
