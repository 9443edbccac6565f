use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_feedback_table::Feedback;

const IDX_CATEGORY: &str = "idx_feedback_category";
const IDX_SUBMISSION_TIME: &str = "idx_feedback_submission_time";
const IDX_IS_REVIEWED: &str = "idx_feedback_is_reviewed";

/// Indexes backing the list filters and the default newest-first ordering.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(IDX_CATEGORY)
                    .table(Feedback::Table)
                    .col(Feedback::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBMISSION_TIME)
                    .table(Feedback::Table)
                    .col((Feedback::SubmissionTime, IndexOrder::Desc))
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_IS_REVIEWED)
                    .table(Feedback::Table)
                    .col(Feedback::IsReviewed)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [IDX_CATEGORY, IDX_SUBMISSION_TIME, IDX_IS_REVIEWED] {
            manager
                .drop_index(Index::drop().name(name).table(Feedback::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}
