use super::*;

/// Tests creating a sticky message row.
///
/// Verifies that ids are stored as strings and parsed back into the domain model.
///
/// Expected: Ok with the created sticky
#[tokio::test]
async fn creates_sticky_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_cache_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StickyMessageRepository::new(db);
    let sticky = repo
        .create(CreateStickyMessageParam {
            message_id: 1383845771232678071,
            channel_id: 1383845771232678000,
            guild_id: 1374722200053088306,
            content: "Read the pinned rules".to_string(),
        })
        .await?;

    assert_eq!(sticky.message_id, 1383845771232678071);
    assert_eq!(sticky.channel_id, 1383845771232678000);
    assert_eq!(sticky.content, "Read the pinned rules");

    let row = entity::prelude::StickyMessage::find_by_id(sticky.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.message_id, "1383845771232678071");

    Ok(())
}
