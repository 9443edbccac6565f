//! SeaORM entities for the feedback board database.

pub mod prelude;

pub mod feedback;
pub mod sea_orm_active_enums;
