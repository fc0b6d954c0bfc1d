use sea_orm_migration::prelude::*;

use super::m20240214_000001_create_bakery_table::Bakery;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BakedGood::Table)
                    .col(
                        ColumnDef::new(BakedGood::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BakedGood::Name).string().not_null())
                    .col(
                        ColumnDef::new(BakedGood::Price)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BakedGood::BakeryId).integer().not_null())
                    .col(
                        ColumnDef::new(BakedGood::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-baked_good-bakery_id")
                            .from(BakedGood::Table, BakedGood::BakeryId)
                            .to(Bakery::Table, Bakery::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BakedGood::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BakedGood {
    Table,
    Id,
    Name,
    Price,
    BakeryId,
    CreatedAt,
}
