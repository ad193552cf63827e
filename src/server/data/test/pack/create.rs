use super::*;

/// Tests creating a new pack.
///
/// Verifies that the repository assigns an ID and persists every supplied field.
///
/// Expected: Ok with pack created
#[tokio::test]
async fn creates_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackRepository::new(db);
    let pack = repo
        .create(CreatePackParam {
            name: "Base Set".to_string(),
            set_code: Some("BS".to_string()),
            description: Some("The original set".to_string()),
            release_date: NaiveDate::from_ymd_opt(1999, 1, 9),
            card_count: Some(102),
            image_url: Some("/images/base-set.png".to_string()),
        })
        .await?;

    assert!(!pack.id.is_nil());
    assert_eq!(pack.name, "Base Set");
    assert_eq!(pack.set_code.as_deref(), Some("BS"));
    assert_eq!(pack.release_date, NaiveDate::from_ymd_opt(1999, 1, 9));
    assert_eq!(pack.card_count, Some(102));
    assert_eq!(pack.created_at, pack.updated_at);

    // Verify pack exists in database
    let db_pack = entity::prelude::Pack::find_by_id(pack.id).one(db).await?;
    assert!(db_pack.is_some());
    assert_eq!(db_pack.unwrap().name, "Base Set");

    Ok(())
}

/// Tests creating a pack with only the required name.
///
/// Expected: Ok with every optional column empty
#[tokio::test]
async fn creates_pack_with_only_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pack = PackRepository::new(db).create(create_param("Jungle")).await?;

    assert_eq!(pack.name, "Jungle");
    assert!(pack.set_code.is_none());
    assert!(pack.description.is_none());
    assert!(pack.release_date.is_none());
    assert!(pack.card_count.is_none());
    assert!(pack.image_url.is_none());

    Ok(())
}

/// Tests that each created pack receives a distinct ID.
///
/// Expected: Ok with unique IDs and three rows stored
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PackRepository::new(db);
    let pack1 = repo.create(create_param("Fossil")).await?;
    let pack2 = repo.create(create_param("Fossil")).await?;
    let pack3 = repo.create(create_param("Team Rocket")).await?;

    assert_ne!(pack1.id, pack2.id);
    assert_ne!(pack1.id, pack3.id);
    assert_ne!(pack2.id, pack3.id);

    let count = entity::prelude::Pack::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}
