pub use sea_orm_migration::prelude::*;

mod m20240215_000001_seed_bakery_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        // Schema first, then seed rows.
        let mut migrations = migration::Migrator::migrations();
        migrations.push(Box::new(m20240215_000001_seed_bakery_data::Migration));
        migrations
    }
}
