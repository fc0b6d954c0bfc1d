use entity::{baked_good, bakery};
use migration::{Migrator, MigratorTrait};
use sea_orm::{prelude::Decimal, ActiveModelTrait, Database, DbErr, Set};
use service::{Mutation, Query};

#[tokio::test]
async fn main() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(db, None).await.unwrap();

    let bakery = bakery::ActiveModel {
        name: Set("SeaSide Bakery".to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    assert_eq!(bakery.id, 1);
    assert_eq!(bakery.name, "SeaSide Bakery");

    let cheesecake = Mutation::create_baked_good(
        db,
        baked_good::Model {
            id: 0,
            name: "Cheesecake".to_owned(),
            price: Decimal::new(1050, 2),
            bakery_id: bakery.id,
            created_at: Default::default(),
        },
    )
    .await
    .unwrap();

    assert_eq!(cheesecake.id, 1);
    assert_eq!(cheesecake.name, "Cheesecake");
    assert_eq!(cheesecake.price, Decimal::new(1050, 2));
    assert_eq!(cheesecake.bakery_id, bakery.id);

    let scone = Mutation::create_baked_good(
        db,
        baked_good::Model {
            id: 0,
            name: "Scone".to_owned(),
            price: Decimal::new(325, 2),
            bakery_id: bakery.id,
            created_at: Default::default(),
        },
    )
    .await
    .unwrap();

    assert_eq!(scone.id, 2);

    {
        let baked_goods = Query::list_baked_goods(db).await.unwrap();
        assert_eq!(baked_goods.len(), 2);
    }

    {
        let by_price = Query::list_baked_goods_by_price_desc(db).await.unwrap();
        assert_eq!(by_price.len(), 2);
        assert_eq!(by_price[0].name, "Cheesecake");
        assert_eq!(by_price[1].name, "Scone");
    }

    {
        let most_expensive = Query::find_most_expensive_baked_good(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(most_expensive.name, "Cheesecake");
    }

    {
        let (found, baked_goods) = Query::find_bakery_with_baked_goods(db, bakery.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, bakery.id);
        assert_eq!(baked_goods.len(), 2);

        assert!(Query::find_bakery_with_baked_goods(db, 99)
            .await
            .unwrap()
            .is_none());
    }

    {
        let renamed = Mutation::update_bakery_by_id(db, bakery.id, Some("SeaBreeze Bakery".to_owned()))
            .await
            .unwrap();
        assert_eq!(renamed.name, "SeaBreeze Bakery");

        // Empty patch leaves the record untouched.
        let unchanged = Mutation::update_bakery_by_id(db, bakery.id, None)
            .await
            .unwrap();
        assert_eq!(unchanged.name, "SeaBreeze Bakery");

        let err = Mutation::update_bakery_by_id(db, 99, Some("Nowhere".to_owned()))
            .await
            .unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }

    {
        let result = Mutation::delete_baked_good(db, scone.id).await.unwrap();
        assert_eq!(result.rows_affected, 1);

        assert!(Query::find_baked_good_by_id(db, scone.id)
            .await
            .unwrap()
            .is_none());

        let err = Mutation::delete_baked_good(db, scone.id).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }
}
