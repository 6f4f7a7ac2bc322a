//! Search plumbing for the DVD rental REST API: criteria parsing, allow-list
//! validation, predicate compilation and paginated listing helpers built on
//! Axum and Sea-ORM.
//!
//! Resources describe their searchable surface once, through the
//! [`SearchResource`] trait, and the generic compiler turns caller-supplied
//! criteria into a conjunctive [`sea_orm::Condition`].

pub mod criteria;
pub mod errors;
pub mod filtering;
pub mod models;
pub mod resource;
pub mod routes;

pub use criteria::{SearchCriteria, SearchField, SearchOperator};
pub use errors::ApiError;
pub use filtering::{compile_search, resolve_join_column};
pub use models::ListParams;
pub use resource::{FieldDescriptor, FieldKind, JoinDescriptor, SearchResource};
