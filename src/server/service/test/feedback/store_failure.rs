//! Store failures that are not validation, identifier or lookup problems.

use super::*;

/// Store whose every call fails as if the database were unreachable.
struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Other(DbErr::Custom("connection refused".to_string()))
}

#[async_trait]
impl FeedbackStore for UnavailableStore {
    async fn find(
        &self,
        _filter: &FeedbackFilter,
        _sort: &SortSpec,
        _skip: u64,
        _limit: u64,
    ) -> Result<Vec<Feedback>, StoreError> {
        Err(unavailable())
    }

    async fn count(&self, _filter: &FeedbackFilter) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn insert(&self, _candidate: FeedbackCandidate) -> Result<Feedback, StoreError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Feedback, StoreError> {
        Err(unavailable())
    }

    async fn update_by_id(
        &self,
        _id: &str,
        _patch: FeedbackPatch,
    ) -> Result<Feedback, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Feedback, StoreError> {
        Err(unavailable())
    }
}

fn failure_message(result: Result<impl std::fmt::Debug, AppError>) -> &'static str {
    match result {
        Err(AppError::StoreFailure { message, .. }) => message,
        other => panic!("expected store failure, got {:?}", other),
    }
}

/// Tests that each operation maps an unexpected store failure to its own message.
///
/// Expected: AppError::StoreFailure with the operation's client-facing message
#[tokio::test]
async fn maps_store_failures_per_operation() {
    let service = FeedbackService::new(UnavailableStore);
    let id = Uuid::new_v4().to_string();

    assert_eq!(
        failure_message(service.list(ListFeedbackParams::default()).await),
        "Server error while fetching feedback"
    );
    assert_eq!(
        failure_message(service.create(create_params("Long enough feedback", "Growth")).await),
        "Server error while submitting feedback"
    );
    assert_eq!(
        failure_message(service.get_by_id(&id).await),
        "Server error while fetching feedback"
    );
    assert_eq!(
        failure_message(service.mark_reviewed(&id).await),
        "Server error while updating feedback"
    );
    assert_eq!(
        failure_message(service.delete(&id).await),
        "Server error while deleting feedback"
    );
}

/// Tests that missing fields are rejected before the store is consulted.
///
/// Expected: BadRequest even though the store would fail
#[tokio::test]
async fn missing_fields_never_reach_the_store() {
    let service = FeedbackService::new(UnavailableStore);

    let result = service.create(CreateFeedbackParams::default()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
