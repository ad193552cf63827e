use super::*;

/// Tests listing packs from an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let packs = PackRepository::new(db).get_all().await?;

    assert!(packs.is_empty());

    Ok(())
}

/// Tests that packs are listed alphabetically by name.
///
/// Expected: Ok with packs sorted by name
#[tokio::test]
async fn returns_packs_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Pack).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pack::PackFactory::new(db).name("Team Rocket").build().await?;
    factory::pack::PackFactory::new(db).name("Base Set").build().await?;
    factory::pack::PackFactory::new(db).name("Jungle").build().await?;

    let packs = PackRepository::new(db).get_all().await?;
    let names: Vec<&str> = packs.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Base Set", "Jungle", "Team Rocket"]);

    Ok(())
}
