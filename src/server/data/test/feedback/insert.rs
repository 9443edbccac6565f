use super::*;

/// Tests inserting a valid candidate.
///
/// Verifies that the repository assigns an id, applies defaults, trims the text,
/// and stamps both timestamps.
///
/// Expected: Ok with the stored record
#[tokio::test]
async fn inserts_valid_candidate() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let stored = repo
        .insert(
            FeedbackCandidate::new("  The new build pipeline is great.  ", "Work Environment")
                .apply_defaults(),
        )
        .await?;

    assert_eq!(stored.feedback, "The new build pipeline is great.");
    assert_eq!(stored.category, Category::WorkEnvironment);
    assert!(!stored.is_reviewed);
    assert_eq!(stored.created_at, stored.updated_at);

    let row = entity::prelude::Feedback::find_by_id(stored.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.feedback, "The new build pipeline is great.");
    assert_eq!(row.category, FeedbackCategory::WorkEnvironment);

    Ok(())
}

/// Tests that insert validates even when the caller skipped validation.
///
/// Expected: Err(StoreError::Validation) with every violated rule and no row written
#[tokio::test]
async fn rejects_invalid_candidate_without_writing() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let result = repo
        .insert(FeedbackCandidate::new("short", "Culture").apply_defaults())
        .await;

    match result {
        Err(StoreError::Validation(errors)) => assert_eq!(
            errors,
            vec![FEEDBACK_TOO_SHORT.to_string(), CATEGORY_INVALID.to_string()]
        ),
        other => panic!("expected validation error, got {:?}", other),
    }

    let rows = entity::prelude::Feedback::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that each insert receives a distinct id.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeedbackRepository::new(db);
    let first = repo
        .insert(FeedbackCandidate::new("Identical feedback text", "Growth").apply_defaults())
        .await?;
    let second = repo
        .insert(FeedbackCandidate::new("Identical feedback text", "Growth").apply_defaults())
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
