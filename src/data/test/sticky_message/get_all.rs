use super::*;

/// Tests fetching all stickies returns them in row id order.
///
/// Expected: Ok with stickies ordered by id
#[tokio::test]
async fn returns_stickies_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_sticky_message(db, "1001").await?;
    let second = factory::create_sticky_message(db, "1002").await?;
    let third = factory::create_sticky_message(db, "1001").await?;

    let stickies = StickyMessageRepository::new(db).get_all().await?;

    let ids: Vec<i32> = stickies.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests fetching from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_stickies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stickies = StickyMessageRepository::new(db).get_all().await?;

    assert!(stickies.is_empty());

    Ok(())
}

/// Tests that a corrupted stored id surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unparsable_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_sticky_message(db, "not-a-snowflake").await?;

    let result = StickyMessageRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
