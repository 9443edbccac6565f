use super::*;

/// Tests fetching an existing record.
///
/// Expected: Ok with the record
#[tokio::test]
async fn finds_existing_record() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_feedback(db).await?;

    let repo = FeedbackRepository::new(db);
    let found = repo.find_by_id(&created.id.to_string()).await?;

    assert_eq!(found.id, created.id);
    assert_eq!(found.feedback, created.feedback);

    Ok(())
}

/// Tests fetching a well-formed id with no record.
///
/// Expected: Err(StoreError::NotFound)
#[tokio::test]
async fn reports_not_found_for_unknown_id() {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let result = repo.find_by_id(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

/// Tests fetching with an id that is not a UUID.
///
/// Expected: Err(StoreError::MalformedIdentifier)
#[tokio::test]
async fn reports_malformed_identifier() {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let result = repo.find_by_id("not-an-id").await;

    match result {
        Err(StoreError::MalformedIdentifier(id)) => assert_eq!(id, "not-an-id"),
        other => panic!("expected malformed identifier, got {:?}", other),
    }
}
