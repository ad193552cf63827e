use super::*;

/// Tests creating a deck and listing it back.
///
/// Expected: Ok with deck stored and returned by `get_all`
#[tokio::test]
async fn creates_and_lists_deck() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Deck).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeckRepository::new(db);
    let deck = repo
        .create(CreateDeckParam {
            name: "Haymaker".to_string(),
            description: Some("Fast damage".to_string()),
        })
        .await?;

    assert_eq!(deck.name, "Haymaker");
    assert_eq!(deck.description.as_deref(), Some("Fast damage"));

    let decks = repo.get_all().await?;
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0], deck);

    Ok(())
}
