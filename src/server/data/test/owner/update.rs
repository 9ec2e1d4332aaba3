use super::*;

/// Tests replacing an owner's contact fields.
///
/// Expected: Ok(Some(updated)) with every field replaced
#[tokio::test]
async fn replaces_contact_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let repo = OwnerRepository::new(db);
    let updated = repo
        .update(UpdateOwnerParams {
            id: owner.id,
            fields: fields("Harold", "Davis"),
        })
        .await?
        .expect("owner should exist");

    assert_eq!(updated.id, owner.id);
    assert_eq!(updated.first_name, "Harold");
    assert_eq!(updated.last_name, "Davis");
    assert_eq!(updated.address, "638 Cardinal Ave.");

    Ok(())
}

/// Tests updating a non-existent owner.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let result = repo
        .update(UpdateOwnerParams {
            id: 999999,
            fields: fields("Nobody", "Home"),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
