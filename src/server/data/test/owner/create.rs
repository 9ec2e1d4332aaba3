use super::*;

/// Tests creating an owner.
///
/// Expected: Ok with owner stored and ID assigned
#[tokio::test]
async fn creates_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let owner = repo.create(fields("Jean", "Coleman")).await?;

    assert!(owner.id > 0);
    assert_eq!(owner.first_name, "Jean");
    assert_eq!(owner.city, "Sun Prairie");

    let stored = entity::prelude::Owner::find_by_id(owner.id).one(db).await?;
    assert_eq!(stored, Some(owner));

    Ok(())
}
