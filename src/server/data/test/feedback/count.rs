use super::*;

/// Tests counting with and without filters.
///
/// Expected: total ignores pagination and honors the filter
#[tokio::test]
async fn counts_matching_records() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_many_feedback(db, 4).await?;
    FeedbackFactory::new(db).reviewed(true).build().await?;

    let repo = FeedbackRepository::new(db);

    assert_eq!(repo.count(&FeedbackFilter::default()).await?, 5);
    assert_eq!(
        repo.count(&FeedbackFilter {
            category: None,
            is_reviewed: Some(true),
        })
        .await?,
        1
    );
    assert_eq!(
        repo.count(&FeedbackFilter {
            category: Some("Leadership".to_string()),
            is_reviewed: None,
        })
        .await?,
        0
    );

    Ok(())
}
