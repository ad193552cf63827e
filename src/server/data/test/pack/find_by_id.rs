use super::*;

/// Tests finding an existing pack.
///
/// Expected: Ok(Some) with matching pack
#[tokio::test]
async fn finds_existing_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pack::PackFactory::new(db)
        .name("Neo Genesis")
        .set_code("N1")
        .build()
        .await?;

    let found = PackRepository::new(db).find_by_id(created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Neo Genesis");
    assert_eq!(found.set_code.as_deref(), Some("N1"));

    Ok(())
}

/// Tests finding a pack that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pack(db).await?;

    let repo = PackRepository::new(db);
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}

/// Tests the existence check for a stored pack.
///
/// Expected: Ok(true)
#[tokio::test]
async fn exists_for_stored_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pack = factory::create_pack(db).await?;

    assert!(PackRepository::new(db).exists(pack.id).await?);

    Ok(())
}
