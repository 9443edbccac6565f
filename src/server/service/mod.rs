//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They normalize request parameters, call the record store they were constructed
//! with, and translate store outcomes into `AppError`s the controllers can return.

pub mod feedback;
