use super::*;

/// Tests creating a pet with an existing type.
///
/// Expected: Ok with pet stored under the owner with the requested type
#[tokio::test]
async fn creates_pet_with_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let cat = factory::create_pet_type(db, "cat").await?;

    let repo = PetRepository::new(db);
    let pet = repo
        .create(CreatePetParams {
            owner_id: owner.id,
            name: "Leo".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2010, 9, 7),
            type_id: Some(cat.id),
        })
        .await?;

    assert_eq!(pet.owner_id, owner.id);
    assert_eq!(pet.type_id, Some(cat.id));
    assert_eq!(pet.name, "Leo");

    Ok(())
}

/// Tests creating a pet with a type ID that doesn't exist.
///
/// Expected: Ok with pet stored untyped
#[tokio::test]
async fn drops_unknown_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let repo = PetRepository::new(db);
    let pet = repo
        .create(CreatePetParams {
            owner_id: owner.id,
            name: "Basil".to_string(),
            birth_date: None,
            type_id: Some(999999),
        })
        .await?;

    assert_eq!(pet.type_id, None);

    Ok(())
}

/// Tests creating a pet for an owner that doesn't exist.
///
/// Expected: Err due to foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let result = repo
        .create(CreatePetParams {
            owner_id: 999999,
            name: "Orphan".to_string(),
            birth_date: None,
            type_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
