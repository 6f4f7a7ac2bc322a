//! Resource-side description of the searchable surface.
//!
//! Each listable resource implements [`SearchResource`] once, declaring its
//! allow-listed search fields, the foreign-key columns a sub-resource listing
//! may be scoped by, and which columns are sortable. The generic compiler and
//! route handlers are parameterized over this trait, so adding an entity
//! means writing one descriptor table instead of another copy of the query
//! builder.

use async_trait::async_trait;
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, entity::prelude::*,
};

/// Storage kind of a searchable column. Integer columns get numeric operand
/// gating; text columns compare operands as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

/// One entry in a resource's search allow-list: the wire-facing field name,
/// the Sea-ORM column it maps to, and its kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<C> {
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

impl<C> FieldDescriptor<C> {
    pub const fn new(name: &'static str, column: C, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }
}

/// One foreign-key column a sub-resource listing may be scoped by, e.g.
/// `storeId` on inventory for `/store/{id}/inventorys`.
#[derive(Debug, Clone, Copy)]
pub struct JoinDescriptor<C> {
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

impl<C> JoinDescriptor<C> {
    pub const fn new(name: &'static str, column: C, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }
}

/// A resource that can be listed through the search pipeline.
///
/// The default `find`/`total_count` implementations execute a compiled
/// condition against the resource's entity with ordering and offset
/// pagination; override them only when a resource needs custom query logic.
#[async_trait]
pub trait SearchResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ColumnType: ColumnTrait + Copy + std::fmt::Debug;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &str;
    const RESOURCE_NAME_PLURAL: &str;

    /// Field names callers may reference in search clauses. Anything outside
    /// this table fails compilation.
    fn search_fields() -> Vec<FieldDescriptor<Self::ColumnType>>;

    /// Foreign-key columns sub-resource listings may be scoped by. Empty by
    /// default: the resource is never listed under a parent.
    #[must_use]
    fn join_columns() -> Vec<JoinDescriptor<Self::ColumnType>> {
        vec![]
    }

    #[must_use]
    fn sortable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![]
    }

    #[must_use]
    fn default_sort_column() -> Self::ColumnType {
        Self::ID_COLUMN
    }

    /// Fetch a single record by primary key.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` when the underlying query fails.
    async fn get_one(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        let model = Self::EntityType::find()
            .filter(Self::ID_COLUMN.eq(id))
            .one(db)
            .await?;
        Ok(model.map(Self::from))
    }

    /// Fetch one page of matching records.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` when the underlying query fails.
    async fn find(
        db: &DatabaseConnection,
        condition: &Condition,
        order_column: Self::ColumnType,
        order_direction: Order,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self>, DbErr> {
        let models = Self::EntityType::find()
            .filter(condition.clone())
            .order_by(order_column, order_direction)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await?;
        Ok(models.into_iter().map(Self::from).collect())
    }

    /// Count all records matching the condition, ignoring pagination.
    ///
    /// # Errors
    ///
    /// Returns a `DbErr` when the underlying query fails.
    async fn total_count(db: &DatabaseConnection, condition: &Condition) -> Result<u64, DbErr> {
        let query = Self::EntityType::find().filter(condition.clone());
        PaginatorTrait::count(query, db).await
    }
}
