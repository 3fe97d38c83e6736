use sea_orm_migration::{sea_orm::Database, *};

mod m20240301_0900_create_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_0900_create_table::Migration)]
    }
}

impl Migrator {
    pub async fn migration_up(db_con: &str) {
        let db = match Database::connect(db_con).await {
            Ok(db) => db,
            Err(e) => return eprintln!("{e}"),
        };
        if let Err(e) = Migrator::up(&db, None).await {
            eprintln!("{e}");
        }
    }

    pub async fn migration_down(db_con: &str) {
        let db = match Database::connect(db_con).await {
            Ok(db) => db,
            Err(e) => return eprintln!("{e}"),
        };
        if let Err(e) = Migrator::down(&db, None).await {
            eprintln!("{e}");
        }
    }
}
