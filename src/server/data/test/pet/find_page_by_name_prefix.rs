use super::*;

/// Tests that only pets with a matching name prefix are returned.
///
/// Expected: Ok with only prefixed pets, ordered by ID
#[tokio::test]
async fn returns_only_matching_pets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let matching = factory::helpers::create_pets_with_prefix(db, owner.id, "lastName", 3).await?;
    factory::pet::PetFactory::new(db, owner.id)
        .name("Samantha")
        .build()
        .await?;

    let repo = PetRepository::new(db);
    let page = repo.find_page_by_name_prefix("lastName", None, 10).await?;

    let ids: Vec<i32> = page.iter().map(|p| p.id).collect();
    let expected: Vec<i32> = matching.iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that a page resumes after the given ID and is bounded by the limit.
///
/// Expected: Ok with the second and third matching pets
#[tokio::test]
async fn resumes_after_id_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let matching = factory::helpers::create_pets_with_prefix(db, owner.id, "lastName", 5).await?;

    let repo = PetRepository::new(db);
    let page = repo
        .find_page_by_name_prefix("lastName", Some(matching[0].id), 2)
        .await?;

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, matching[1].id);
    assert_eq!(page[1].id, matching[2].id);

    Ok(())
}

/// Tests that `_` and `%` in the prefix are matched literally.
///
/// Expected: Ok with only the pet whose name begins with the exact characters
#[tokio::test]
async fn treats_wildcards_in_prefix_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let mut pets = Vec::new();
    for name in ["temp_1", "tempX1", "temp%2", "temporary"] {
        pets.push(
            factory::pet::PetFactory::new(db, owner.id)
                .name(name)
                .build()
                .await?,
        );
    }

    let repo = PetRepository::new(db);
    let underscore = repo.find_page_by_name_prefix("temp_", None, 10).await?;
    let percent = repo.find_page_by_name_prefix("temp%", None, 10).await?;

    assert_eq!(underscore.iter().map(|p| p.id).collect::<Vec<_>>(), vec![pets[0].id]);
    assert_eq!(percent.iter().map(|p| p.id).collect::<Vec<_>>(), vec![pets[2].id]);

    Ok(())
}

/// Tests that the prefix match respects letter case.
///
/// Expected: Ok with only the pet whose name has the same case as the prefix
#[tokio::test]
async fn matches_prefix_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let lower = factory::pet::PetFactory::new(db, owner.id)
        .name("temp_1")
        .build()
        .await?;
    for name in ["TEMP_2", "Temp_3"] {
        factory::pet::PetFactory::new(db, owner.id)
            .name(name)
            .build()
            .await?;
    }

    let repo = PetRepository::new(db);
    let page = repo.find_page_by_name_prefix("temp_", None, 10).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, lower.id);

    Ok(())
}
