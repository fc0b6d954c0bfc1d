use ::entity::{
    baked_good, baked_good::Entity as BakedGood, bakery, bakery::Entity as Bakery,
};
use sea_orm::*;

pub struct Query;

impl Query {
    /// Every bakery together with its baked goods.
    pub async fn list_bakeries_with_baked_goods(
        db: &DbConn,
    ) -> Result<Vec<(bakery::Model, Vec<baked_good::Model>)>, DbErr> {
        Bakery::find().find_with_related(BakedGood).all(db).await
    }

    pub async fn find_bakery_with_baked_goods(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<(bakery::Model, Vec<baked_good::Model>)>, DbErr> {
        let mut rows = Bakery::find_by_id(id)
            .find_with_related(BakedGood)
            .all(db)
            .await?;
        Ok(rows.pop())
    }

    pub async fn list_baked_goods(db: &DbConn) -> Result<Vec<baked_good::Model>, DbErr> {
        BakedGood::find().all(db).await
    }

    pub async fn find_baked_good_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<baked_good::Model>, DbErr> {
        BakedGood::find_by_id(id).one(db).await
    }

    pub async fn list_baked_goods_by_price_desc(
        db: &DbConn,
    ) -> Result<Vec<baked_good::Model>, DbErr> {
        BakedGood::find()
            .order_by_desc(baked_good::Column::Price)
            .all(db)
            .await
    }

    pub async fn find_most_expensive_baked_good(
        db: &DbConn,
    ) -> Result<Option<baked_good::Model>, DbErr> {
        BakedGood::find()
            .order_by_desc(baked_good::Column::Price)
            .one(db)
            .await
    }
}
