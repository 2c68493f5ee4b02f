use super::*;

/// Tests swapping the live message id of one sticky.
///
/// Verifies only the targeted row changes.
///
/// Expected: Ok(1) and the other sticky untouched
#[tokio::test]
async fn updates_only_target_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_sticky_message(db, "1001").await?;
    let other = factory::create_sticky_message(db, "1001").await?;

    let updated = StickyMessageRepository::new(db)
        .update_message_id(target.id, 424242)
        .await?;

    assert_eq!(updated, 1);

    let target_row = entity::prelude::StickyMessage::find_by_id(target.id)
        .one(db)
        .await?
        .unwrap();
    let other_row = entity::prelude::StickyMessage::find_by_id(other.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(target_row.message_id, "424242");
    assert_eq!(other_row.message_id, other.message_id);

    Ok(())
}

/// Tests updating a sticky that no longer exists.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = StickyMessageRepository::new(db)
        .update_message_id(99, 424242)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
