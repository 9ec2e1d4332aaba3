use super::*;

/// Tests that owners are ordered by last name, then first name.
///
/// Expected: Ok with owners in name order
#[tokio::test]
async fn returns_owners_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::owner::OwnerFactory::new(db)
        .first_name("Maria")
        .last_name("Escobito")
        .build()
        .await?;
    factory::owner::OwnerFactory::new(db)
        .first_name("Peter")
        .last_name("Davis")
        .build()
        .await?;
    factory::owner::OwnerFactory::new(db)
        .first_name("Betty")
        .last_name("Davis")
        .build()
        .await?;

    let repo = OwnerRepository::new(db);
    let owners = repo.get_all().await?;

    let names: Vec<&str> = owners.iter().map(|o| o.first_name.as_str()).collect();
    assert_eq!(names, vec!["Betty", "Peter", "Maria"]);

    Ok(())
}

/// Tests retrieving owners from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let owners = repo.get_all().await?;

    assert!(owners.is_empty());

    Ok(())
}
