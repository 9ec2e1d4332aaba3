use super::*;

/// Tests that only owners with a matching first-name prefix are returned.
///
/// Expected: Ok with prefixed owners ordered by ID
#[tokio::test]
async fn returns_only_matching_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::helpers::create_owners_with_prefix(db, "firstName", 3).await?;
    factory::owner::OwnerFactory::new(db)
        .first_name("Eduardo")
        .build()
        .await?;

    let repo = OwnerRepository::new(db);
    let page = repo
        .find_page_by_first_name_prefix("firstName", None, 10)
        .await?;

    let ids: Vec<i32> = page.iter().map(|o| o.id).collect();
    let expected: Vec<i32> = matching.iter().map(|o| o.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that a page after the last matching owner is empty.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_after_last_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let matching = factory::helpers::create_owners_with_prefix(db, "firstName", 2).await?;

    let repo = OwnerRepository::new(db);
    let page = repo
        .find_page_by_first_name_prefix("firstName", Some(matching[1].id), 10)
        .await?;

    assert!(page.is_empty());

    Ok(())
}

/// Tests that wildcard characters and letter case in the prefix must match exactly.
///
/// Expected: Ok with only the owner named `a_b...`
#[tokio::test]
async fn matches_prefix_literally_and_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let exact = factory::owner::OwnerFactory::new(db)
        .first_name("a_bel")
        .build()
        .await?;
    for first_name in ["axbel", "A_bel", "a%bel"] {
        factory::owner::OwnerFactory::new(db)
            .first_name(first_name)
            .build()
            .await?;
    }

    let repo = OwnerRepository::new(db);
    let page = repo.find_page_by_first_name_prefix("a_b", None, 10).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, exact.id);

    Ok(())
}
