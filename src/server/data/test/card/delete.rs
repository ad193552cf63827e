use super::*;

/// Tests deleting a card by ID.
///
/// Expected: Ok(1), then Ok(0) on the second attempt
#[tokio::test]
async fn deletes_card_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;
    let repo = CardRepository::new(db);

    assert_eq!(repo.delete(card.id).await?, 1);
    assert_eq!(repo.delete(card.id).await?, 0);
    assert!(repo.find_by_id(card.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a card keeps its pack.
///
/// Expected: Ok with pack row still present
#[tokio::test]
async fn keeps_pack_of_deleted_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (pack, cards) = factory::helpers::create_pack_with_cards(db, 1).await?;

    CardRepository::new(db).delete(cards[0].id).await?;

    assert!(entity::prelude::Pack::find_by_id(pack.id).one(db).await?.is_some());

    Ok(())
}
