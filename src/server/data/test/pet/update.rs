use super::*;

/// Tests updating every field of a pet.
///
/// Expected: Ok(Some(updated))
#[tokio::test]
async fn updates_pet_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _dog, pet) = factory::helpers::create_pet_with_dependencies(db).await?;
    let hamster = factory::create_pet_type(db, "hamster").await?;

    let repo = PetRepository::new(db);
    let updated = repo
        .update(UpdatePetParams {
            id: pet.id,
            name: "Rosy".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2011, 4, 17),
            type_id: Some(hamster.id),
        })
        .await?
        .expect("pet should exist");

    assert_eq!(updated.name, "Rosy");
    assert_eq!(updated.type_id, Some(hamster.id));
    assert_eq!(updated.birth_date, NaiveDate::from_ymd_opt(2011, 4, 17));

    Ok(())
}

/// Tests updating a non-existent pet.
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
    let result = repo
        .update(UpdatePetParams {
            id: 999999,
            name: "Ghost".to_string(),
            birth_date: None,
            type_id: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
