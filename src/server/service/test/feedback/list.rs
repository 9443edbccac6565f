use super::*;

/// Tests listing without filters.
///
/// Expected: newest first, total equal to the unfiltered count, pages = ceil(total / limit)
#[tokio::test]
async fn lists_all_records_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_many_feedback(db, 3).await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let page = service.list(ListFeedbackParams::default()).await?;

    let ids: Vec<Uuid> = page.records.iter().map(|r| r.id).collect();
    let expected: Vec<Uuid> = created.iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.pages, 1);

    Ok(())
}

/// Tests the second page of 5 over 12 matching records.
///
/// Expected: records 6-10, total 12, pages 3
#[tokio::test]
async fn returns_requested_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_many_feedback(db, 12).await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let page = service
        .list(ListFeedbackParams {
            page: 2,
            limit: 5,
            ..Default::default()
        })
        .await?;

    let ids: Vec<Uuid> = page.records.iter().map(|r| r.id).collect();
    let expected: Vec<Uuid> = created[5..10].iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(page.total, 12);
    assert_eq!(page.page, 2);
    assert_eq!(page.pages, 3);

    let dto = page.into_dto();
    assert_eq!(dto.count, 5);
    assert_eq!(dto.total, 12);

    Ok(())
}

/// Tests the category filter.
///
/// Expected: only Leadership records; count is the page size, total the match count
#[tokio::test]
async fn filters_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        FeedbackFactory::new(db)
            .category(FeedbackCategory::Leadership)
            .build()
            .await?;
    }
    FeedbackFactory::new(db)
        .category(FeedbackCategory::Others)
        .build()
        .await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let page = service
        .list(ListFeedbackParams {
            filter: FeedbackFilter {
                category: Some("Leadership".to_string()),
                is_reviewed: None,
            },
            limit: 2,
            ..Default::default()
        })
        .await?;

    assert!(page
        .records
        .iter()
        .all(|r| r.category == Category::Leadership));
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.pages, 2);

    Ok(())
}

/// Tests the reviewed filter.
///
/// Expected: only reviewed records when filtering, every record otherwise
#[tokio::test]
async fn filters_by_review_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviewed = FeedbackFactory::new(db).reviewed(true).build().await?;
    factory::create_feedback(db).await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));

    let page = service
        .list(ListFeedbackParams {
            filter: FeedbackFilter {
                category: None,
                is_reviewed: Some(true),
            },
            ..Default::default()
        })
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].id, reviewed.id);

    let page = service.list(ListFeedbackParams::default()).await?;
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests listing an empty store and a page beyond the last one.
///
/// Expected: no records, pages 0 for an empty store; empty page past the end
#[tokio::test]
async fn handles_empty_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FeedbackService::new(FeedbackRepository::new(db));

    let page = service.list(ListFeedbackParams::default()).await?;
    assert!(page.records.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.pages, 0);

    factory::create_many_feedback(db, 3).await?;
    let page = service
        .list(ListFeedbackParams {
            page: 4,
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert!(page.records.is_empty());
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 4);
    assert_eq!(page.pages, 2);

    Ok(())
}

/// Tests that a custom sort is passed through.
///
/// Expected: oldest first when sorting by ascending submission time
#[tokio::test]
async fn honors_sort_specification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_many_feedback(db, 3).await?;

    let service = FeedbackService::new(FeedbackRepository::new(db));
    let page = service
        .list(ListFeedbackParams {
            sort: SortSpec::parse("submissionTime"),
            ..Default::default()
        })
        .await?;

    let ids: Vec<Uuid> = page.records.iter().map(|r| r.id).collect();
    let expected: Vec<Uuid> = created.iter().rev().map(|r| r.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}
