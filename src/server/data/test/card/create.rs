use super::*;

/// Tests creating a card inside an existing pack.
///
/// Expected: Ok with card linked to the pack
#[tokio::test]
async fn creates_card_in_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pack = factory::create_pack(db).await?;

    let card = CardRepository::new(db)
        .create(CreateCardParam {
            pack_id: Some(pack.id),
            name: "Charizard".to_string(),
            card_number: Some("4/102".to_string()),
            rarity: Some("Holo Rare".to_string()),
            card_type: Some("Fire".to_string()),
            description: None,
            image_url: Some("/images/charizard.jpg".to_string()),
        })
        .await?;

    assert_eq!(card.pack_id, Some(pack.id));
    assert_eq!(card.name, "Charizard");
    assert_eq!(card.card_number.as_deref(), Some("4/102"));
    assert_eq!(card.rarity.as_deref(), Some("Holo Rare"));

    let db_card = entity::prelude::Card::find_by_id(card.id).one(db).await?;
    assert!(db_card.is_some());

    Ok(())
}

/// Tests creating a card without a pack.
///
/// Expected: Ok with `pack_id` empty
#[tokio::test]
async fn creates_card_without_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = CardRepository::new(db)
        .create(create_param(None, "Promo Pikachu"))
        .await?;

    assert!(card.pack_id.is_none());

    Ok(())
}

/// Tests creating a card that references a pack which does not exist.
///
/// Verifies that the foreign key rejects the insert and no row is stored.
///
/// Expected: Err with nothing inserted
#[tokio::test]
async fn fails_for_missing_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CardRepository::new(db)
        .create(create_param(Some(Uuid::new_v4()), "Orphan"))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Card::find().count(db).await?, 0);

    Ok(())
}
