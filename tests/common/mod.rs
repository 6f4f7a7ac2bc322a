use axum::Router;
use axum::routing::get;
use rentalsearch::routes;
use sea_orm::{ActiveValue::Set, Database, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::prelude::*;


use rental_entities::{
    Customer, Inventory, Store, customer, inventory, store, store_customers_handler,
    store_inventorys_handler,
};

pub async fn setup_rental_db() -> Result<DatabaseConnection, DbErr> {
    // try_init because the harness runs this once per test.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Two stores, six inventory rows, three customers. Inventory ids are chosen
/// so range searches over 2,3 and over >= 5 have distinct answers.
pub async fn seed_rental_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stores = vec![
        store::ActiveModel {
            store_id: Set(1),
            address_id: Set(1),
            manager_staff_id: Set(1),
        },
        store::ActiveModel {
            store_id: Set(2),
            address_id: Set(2),
            manager_staff_id: Set(2),
        },
    ];
    store::Entity::insert_many(stores).exec(db).await?;

    let rows = [
        (1, 1, 1),
        (2, 1, 2),
        (3, 2, 1),
        (4, 3, 2),
        (5, 3, 1),
        (6, 4, 2),
    ];
    let inventories: Vec<inventory::ActiveModel> = rows
        .iter()
        .map(|&(inventory_id, film_id, store_id)| inventory::ActiveModel {
            inventory_id: Set(inventory_id),
            film_id: Set(film_id),
            store_id: Set(store_id),
        })
        .collect();
    inventory::Entity::insert_many(inventories).exec(db).await?;

    let customers = vec![
        customer::ActiveModel {
            customer_id: Set(1),
            store_id: Set(1),
            first_name: Set("MARY".to_string()),
            last_name: Set("SMITH".to_string()),
        },
        customer::ActiveModel {
            customer_id: Set(2),
            store_id: Set(1),
            first_name: Set("PATRICIA".to_string()),
            last_name: Set("JOHNSON".to_string()),
        },
        customer::ActiveModel {
            customer_id: Set(3),
            store_id: Set(2),
            first_name: Set("LINDA".to_string()),
            last_name: Set("WILLIAMS".to_string()),
        },
    ];
    customer::Entity::insert_many(customers).exec(db).await?;

    Ok(())
}

pub fn setup_rental_app(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/store", get(routes::list::<Store>))
        .route("/store/{id}", get(routes::get_one::<Store>))
        .route("/store/{id}/inventorys", get(store_inventorys_handler))
        .route("/store/{id}/customers", get(store_customers_handler))
        .route("/inventory", get(routes::list::<Inventory>))
        .route("/inventory/{id}", get(routes::get_one::<Inventory>))
        .route("/customer", get(routes::list::<Customer>))
        .route("/customer/{id}", get(routes::get_one::<Customer>))
        .with_state(db)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateRentalTables)]
    }
}

pub struct CreateRentalTables;

impl MigrationName for CreateRentalTables {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_rental_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateRentalTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreTable)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoreColumn::StoreId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StoreColumn::AddressId).integer().not_null())
                    .col(
                        ColumnDef::new(StoreColumn::ManagerStaffId)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryTable)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryColumn::InventoryId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InventoryColumn::FilmId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryColumn::StoreId)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomerTable)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerColumn::CustomerId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomerColumn::StoreId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerColumn::FirstName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerColumn::LastName)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerTable).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InventoryTable).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StoreTable).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct StoreTable;

impl Iden for StoreTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "store").unwrap();
    }
}

#[derive(Debug)]
pub enum StoreColumn {
    StoreId,
    AddressId,
    ManagerStaffId,
}

impl Iden for StoreColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::StoreId => "store_id",
                Self::AddressId => "address_id",
                Self::ManagerStaffId => "manager_staff_id",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct InventoryTable;

impl Iden for InventoryTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "inventory").unwrap();
    }
}

#[derive(Debug)]
pub enum InventoryColumn {
    InventoryId,
    FilmId,
    StoreId,
}

impl Iden for InventoryColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::InventoryId => "inventory_id",
                Self::FilmId => "film_id",
                Self::StoreId => "store_id",
            }
        )
        .unwrap();
    }
}

#[derive(Debug)]
pub struct CustomerTable;

impl Iden for CustomerTable {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "customer").unwrap();
    }
}

#[derive(Debug)]
pub enum CustomerColumn {
    CustomerId,
    StoreId,
    FirstName,
    LastName,
}

impl Iden for CustomerColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(
            s,
            "{}",
            match self {
                Self::CustomerId => "customer_id",
                Self::StoreId => "store_id",
                Self::FirstName => "first_name",
                Self::LastName => "last_name",
            }
        )
        .unwrap();
    }
}
