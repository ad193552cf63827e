use super::*;

/// Tests deleting a deck twice.
///
/// Expected: Ok(1), then Ok(0)
#[tokio::test]
async fn deletes_deck_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Deck).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deck = factory::create_deck(db).await?;
    let repo = DeckRepository::new(db);

    assert_eq!(repo.delete(deck.id).await?, 1);
    assert_eq!(repo.delete(deck.id).await?, 0);

    Ok(())
}
