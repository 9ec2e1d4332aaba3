use super::*;

/// Tests deleting a pet.
///
/// Expected: Ok with pet deleted
#[tokio::test]
async fn deletes_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let pet = factory::create_pet(db, owner.id).await?;

    let repo = PetRepository::new(db);
    repo.delete(pet.id).await?;

    let check = entity::prelude::Pet::find_by_id(pet.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a non-existent pet succeeds.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_nonexistent_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
