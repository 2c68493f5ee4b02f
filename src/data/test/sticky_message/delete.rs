use super::*;

/// Tests deleting a sticky by the message id of its live copy.
///
/// Expected: Ok(1) and row removed
#[tokio::test]
async fn deletes_by_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sticky = factory::sticky_message::StickyMessageFactory::new(db)
        .message_id("5005")
        .build()
        .await?;
    let kept = factory::create_sticky_message(db, "1001").await?;

    let deleted = StickyMessageRepository::new(db)
        .delete_by_message_id(5005)
        .await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::StickyMessage::find_by_id(sticky.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::StickyMessage::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests batch deletion by row id.
///
/// Expected: Ok with the number of removed rows, other rows kept
#[tokio::test]
async fn deletes_batch_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_sticky_message(db, "1001").await?;
    let b = factory::create_sticky_message(db, "1002").await?;
    let c = factory::create_sticky_message(db, "1003").await?;

    let deleted = StickyMessageRepository::new(db)
        .delete_many(&[a.id, c.id])
        .await?;

    assert_eq!(deleted, 2);
    let remaining = entity::prelude::StickyMessage::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);

    Ok(())
}

/// Tests that an empty batch deletes nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sticky_message(db, "1001").await?;

    let deleted = StickyMessageRepository::new(db).delete_many(&[]).await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::StickyMessage::find().all(db).await?.len(), 1);

    Ok(())
}
