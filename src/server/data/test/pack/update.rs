use super::*;

/// Tests updating only some fields of a pack.
///
/// Verifies that supplied fields are overwritten while omitted fields keep their values
/// and `updated_at` moves forward.
///
/// Expected: Ok(Some) with merged pack
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pack::PackFactory::new(db)
        .name("Gym Heroes")
        .set_code("G1")
        .card_count(132)
        .build()
        .await?;

    let updated = PackRepository::new(db)
        .update(
            created.id,
            UpdatePackParam {
                name: Some(Some("Gym Challenge".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Gym Challenge");
    assert_eq!(updated.set_code.as_deref(), Some("G1"));
    assert_eq!(updated.card_count, Some(132));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests clearing a nullable field.
///
/// Expected: Ok(Some) with the field set to NULL
#[tokio::test]
async fn clears_nullable_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::pack::PackFactory::new(db)
        .description("Limited print run")
        .build()
        .await?;

    let updated = PackRepository::new(db)
        .update(
            created.id,
            UpdatePackParam {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.description.is_none());

    let db_pack = entity::prelude::Pack::find_by_id(created.id).one(db).await?.unwrap();
    assert!(db_pack.description.is_none());

    Ok(())
}

/// Tests updating a pack that does not exist.
///
/// Verifies that no row is created as a side effect.
///
/// Expected: Ok(None) with table still empty
#[tokio::test]
async fn returns_none_for_missing_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PackRepository::new(db)
        .update(
            Uuid::new_v4(),
            UpdatePackParam {
                name: Some(Some("Ghost".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Pack::find().count(db).await?, 0);

    Ok(())
}
