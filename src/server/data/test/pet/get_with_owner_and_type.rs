use super::*;

/// Tests retrieving a pet together with its owner and type.
///
/// Expected: Ok(Some((pet, owner, Some(pet_type))))
#[tokio::test]
async fn returns_pet_with_owner_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, pet_type, pet) = factory::helpers::create_pet_with_dependencies(db).await?;

    let repo = PetRepository::new(db);
    let result = repo.get_with_owner_and_type(pet.id).await?;

    let (found_pet, found_owner, found_type) = result.expect("pet should exist");
    assert_eq!(found_pet.id, pet.id);
    assert_eq!(found_owner.id, owner.id);
    assert_eq!(found_type.map(|t| t.name), Some(pet_type.name));

    Ok(())
}

/// Tests retrieving an untyped pet.
///
/// Expected: Ok(Some((pet, owner, None)))
#[tokio::test]
async fn returns_none_type_for_untyped_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;

    let repo = PetRepository::new(db);
    let (_, _, pet_type) = repo
        .get_with_owner_and_type(pet.id)
        .await?
        .expect("pet should exist");

    assert!(pet_type.is_none());

    Ok(())
}

/// Tests retrieving a non-existent pet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let result = repo.get_with_owner_and_type(999999).await?;

    assert!(result.is_none());

    Ok(())
}
