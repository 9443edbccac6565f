use super::*;

/// Tests marking an unreviewed record reviewed.
///
/// Expected: Ok with is_reviewed = true
#[tokio::test]
async fn marks_record_reviewed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_feedback(db).await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let record = service.mark_reviewed(&created.id.to_string()).await?;

    assert!(record.is_reviewed);
    assert_eq!(record.feedback, created.feedback);

    Ok(())
}

/// Tests that marking twice succeeds and leaves the record reviewed.
///
/// Expected: Ok both times with identical logical state
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_feedback(db).await?;
    let id = created.id.to_string();

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let first = service.mark_reviewed(&id).await?;
    let second = service.mark_reviewed(&id).await?;

    assert!(first.is_reviewed && second.is_reviewed);
    assert_eq!(first.feedback, second.feedback);
    assert_eq!(first.category, second.category);
    assert_eq!(first.submission_time, second.submission_time);

    Ok(())
}

/// Tests unknown and malformed ids.
///
/// Expected: NotFound and BadRequest respectively
#[tokio::test]
async fn classifies_bad_ids() {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(FeedbackRepository::new(db));

    assert!(matches!(
        service.mark_reviewed(&Uuid::new_v4().to_string()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.mark_reviewed("not-a-uuid").await,
        Err(AppError::BadRequest(_))
    ));
}
