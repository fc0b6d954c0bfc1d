use entity::{baked_good, bakery};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let delightful = bakery::ActiveModel {
            name: Set("Delightful Donuts".to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let incredible = bakery::ActiveModel {
            name: Set("Incredible Crullers".to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let seed_data = vec![
            ("Chocolate Donut", "2.75", delightful.id),
            ("Apple Fritter", "3.25", delightful.id),
            ("Glazed Cruller", "2.50", incredible.id),
            ("Croissant", "4.25", incredible.id),
        ];

        for (name, price, bakery_id) in seed_data {
            let model = baked_good::ActiveModel {
                name: Set(name.to_owned()),
                price: Set(price.parse().map_err(|_| {
                    DbErr::Custom(format!("invalid seed price: {price}"))
                })?),
                bakery_id: Set(bakery_id),
                ..Default::default()
            };
            model.insert(db).await?;
        }

        println!("Bakery tables seeded successfully.");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let names_to_delete = vec![
            "Chocolate Donut",
            "Apple Fritter",
            "Glazed Cruller",
            "Croissant",
        ];
        baked_good::Entity::delete_many()
            .filter(baked_good::Column::Name.is_in(names_to_delete))
            .exec(db)
            .await?;

        bakery::Entity::delete_many()
            .filter(
                bakery::Column::Name.is_in(vec!["Delightful Donuts", "Incredible Crullers"]),
            )
            .exec(db)
            .await?;

        println!("Bakery seeded data removed.");
        Ok(())
    }
}
