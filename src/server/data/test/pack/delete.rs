use super::*;

/// Tests deleting a pack by ID.
///
/// Expected: Ok(1) with the row removed
#[tokio::test]
async fn deletes_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pack = factory::create_pack(db).await?;
    let other = factory::create_pack(db).await?;

    let deleted = PackRepository::new(db).delete(pack.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Pack::find_by_id(pack.id).one(db).await?.is_none());
    assert!(entity::prelude::Pack::find_by_id(other.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting the same pack twice.
///
/// Expected: first delete removes one row, second removes none
#[tokio::test]
async fn second_delete_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pack = factory::create_pack(db).await?;
    let repo = PackRepository::new(db);

    assert_eq!(repo.delete(pack.id).await?, 1);
    assert_eq!(repo.delete(pack.id).await?, 0);

    Ok(())
}

/// Tests that deleting a pack detaches its cards instead of deleting them.
///
/// Expected: Ok with cards kept and `pack_id` cleared
#[tokio::test]
async fn detaches_cards_of_deleted_pack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Pack)
        .with_table(Card)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (pack, cards) = factory::helpers::create_pack_with_cards(db, 2).await?;

    PackRepository::new(db).delete(pack.id).await?;

    for card in cards {
        let db_card = entity::prelude::Card::find_by_id(card.id).one(db).await?;
        assert!(db_card.is_some());
        assert!(db_card.unwrap().pack_id.is_none());
    }

    Ok(())
}
