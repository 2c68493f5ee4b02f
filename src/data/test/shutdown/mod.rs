use crate::{data::shutdown::ShutdownRepository, model::shutdown::CreateShutdownParam};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tests creating a shutdown window.
///
/// Expected: Ok with persisted dates and description
#[tokio::test]
async fn creates_shutdown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shutdown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shutdown = ShutdownRepository::new(db)
        .create(CreateShutdownParam {
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 20),
            description: "Map rework".to_string(),
        })
        .await?;

    let row = entity::prelude::Shutdown::find_by_id(shutdown.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.start_date, date(2024, 1, 10));
    assert_eq!(row.end_date, date(2024, 1, 20));
    assert_eq!(row.description, "Map rework");

    Ok(())
}

/// Tests shutdowns are returned ordered by start date regardless of insert order.
///
/// Expected: Ok with ascending start dates
#[tokio::test]
async fn returns_shutdowns_ordered_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shutdown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::shutdown::ShutdownFactory::new(db)
        .start_date(date(2024, 5, 1))
        .end_date(date(2024, 5, 3))
        .build()
        .await?;
    factory::shutdown::ShutdownFactory::new(db)
        .start_date(date(2024, 2, 1))
        .end_date(date(2024, 2, 8))
        .build()
        .await?;

    let shutdowns = ShutdownRepository::new(db).get_all().await?;

    assert_eq!(shutdowns.len(), 2);
    assert_eq!(shutdowns[0].start_date, date(2024, 2, 1));
    assert_eq!(shutdowns[1].start_date, date(2024, 5, 1));
    assert_eq!(shutdowns[0].duration_days(), 7);

    Ok(())
}

/// Tests deleting a shutdown by id.
///
/// Expected: Ok(1) then Ok(0) for the second attempt
#[tokio::test]
async fn deletes_shutdown_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Shutdown)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shutdown = factory::create_shutdown(db).await?;
    let repo = ShutdownRepository::new(db);

    assert_eq!(repo.delete(shutdown.id).await?, 1);
    assert_eq!(repo.delete(shutdown.id).await?, 0);
    assert!(entity::prelude::Shutdown::find_by_id(shutdown.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
