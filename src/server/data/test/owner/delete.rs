use super::*;

/// Tests deleting an owner cascades to the owner's pets.
///
/// Expected: Ok with owner and pets deleted
#[tokio::test]
async fn deletes_owner_and_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _pet_type, pet) = factory::helpers::create_pet_with_dependencies(db).await?;

    let repo = OwnerRepository::new(db);
    repo.delete(owner.id).await?;

    let owner_check = entity::prelude::Owner::find_by_id(owner.id).one(db).await?;
    assert!(owner_check.is_none());

    let pet_check = entity::prelude::Pet::find_by_id(pet.id).one(db).await?;
    assert!(pet_check.is_none());

    Ok(())
}
