use super::*;

/// Tests listing every card regardless of pack.
///
/// Expected: Ok with all cards sorted by name
#[tokio::test]
async fn returns_all_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pack = factory::create_pack(db).await?;
    factory::card::CardFactory::new(db)
        .pack_id(pack.id)
        .name("Venusaur")
        .build()
        .await?;
    factory::card::CardFactory::new(db).name("Blastoise").build().await?;

    let cards = CardRepository::new(db).get_all(None).await?;
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(names, vec!["Blastoise", "Venusaur"]);

    Ok(())
}

/// Tests filtering cards by pack.
///
/// Expected: Ok with only the cards of the requested pack
#[tokio::test]
async fn filters_by_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (pack, cards) = factory::helpers::create_pack_with_cards(db, 3).await?;
    let (_other_pack, _other_cards) = factory::helpers::create_pack_with_cards(db, 2).await?;
    factory::create_card(db).await?;

    let result = CardRepository::new(db).get_all(Some(pack.id)).await?;

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|c| c.pack_id == Some(pack.id)));
    for card in cards {
        assert!(result.iter().any(|c| c.id == card.id));
    }

    Ok(())
}

/// Tests filtering by a pack that has no cards.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_pack_with_cards(db, 2).await?;

    let result = CardRepository::new(db).get_all(Some(Uuid::new_v4())).await?;

    assert!(result.is_empty());

    Ok(())
}
