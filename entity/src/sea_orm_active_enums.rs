use sea_orm::entity::prelude::*;

/// Category a piece of feedback is filed under.
///
/// The string values are the literals persisted in the `category` column and must
/// not change, existing rows are matched against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FeedbackCategory {
    #[sea_orm(string_value = "Work Environment")]
    WorkEnvironment,
    #[sea_orm(string_value = "Leadership")]
    Leadership,
    #[sea_orm(string_value = "Growth")]
    Growth,
    #[sea_orm(string_value = "Others")]
    Others,
}
