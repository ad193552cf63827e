use super::*;

/// Tests renaming a deck while keeping its description.
///
/// Expected: Ok(Some) with merged deck
#[tokio::test]
async fn renames_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Deck).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::deck::DeckFactory::new(db)
        .description("Mirror match tech")
        .build()
        .await?;

    let updated = DeckRepository::new(db)
        .update(
            created.id,
            UpdateDeckParam {
                name: Some(Some("Rain Dance".to_string())),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Rain Dance");
    assert_eq!(updated.description.as_deref(), Some("Mirror match tech"));

    Ok(())
}

/// Tests updating a deck that does not exist.
///
/// Expected: Ok(None) with table still empty
#[tokio::test]
async fn returns_none_for_missing_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Deck).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DeckRepository::new(db)
        .update(Uuid::new_v4(), UpdateDeckParam::default())
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Deck::find().count(db).await?, 0);

    Ok(())
}
