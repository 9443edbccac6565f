use super::*;

/// Tests fetching an existing record.
///
/// Expected: Ok with the record
#[tokio::test]
async fn gets_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_feedback(db).await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let record = service.get_by_id(&created.id.to_string()).await?;

    assert_eq!(record.id, created.id);
    assert_eq!(record.feedback, created.feedback);
    assert_eq!(record.category, Category::Growth);

    Ok(())
}

/// Tests the distinction between unknown and malformed ids.
///
/// Expected: NotFound for a well-formed unknown id, BadRequest for a malformed one
#[tokio::test]
async fn distinguishes_not_found_from_malformed() {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(FeedbackRepository::new(db));

    match service.get_by_id(&Uuid::new_v4().to_string()).await {
        Err(AppError::NotFound(message)) => assert_eq!(message, NOT_FOUND_MESSAGE),
        other => panic!("expected not found, got {:?}", other),
    }

    match service.get_by_id("xyz").await {
        Err(AppError::BadRequest(message)) => assert_eq!(message, INVALID_ID_MESSAGE),
        other => panic!("expected bad request, got {:?}", other),
    }
}
