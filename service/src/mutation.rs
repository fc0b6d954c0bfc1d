use ::entity::{
    baked_good, baked_good::Entity as BakedGood, bakery, bakery::Entity as Bakery,
};
use sea_orm::*;

pub struct Mutation;

impl Mutation {
    /// Patch semantics: absent fields leave the record unchanged.
    pub async fn update_bakery_by_id(
        db: &DbConn,
        id: i32,
        name: Option<String>,
    ) -> Result<bakery::Model, DbErr> {
        let bakery = Bakery::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("bakery {id} not found")))?;

        let Some(name) = name else {
            return Ok(bakery);
        };

        let mut bakery: bakery::ActiveModel = bakery.into();
        bakery.name = Set(name);
        bakery.update(db).await
    }

    pub async fn create_baked_good(
        db: &DbConn,
        form_data: baked_good::Model,
    ) -> Result<baked_good::Model, DbErr> {
        baked_good::ActiveModel {
            name: Set(form_data.name.to_owned()),
            price: Set(form_data.price),
            bakery_id: Set(form_data.bakery_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn delete_baked_good(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        let baked_good: baked_good::ActiveModel = BakedGood::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("baked good {id} not found")))?
            .into();

        baked_good.delete(db).await
    }
}
