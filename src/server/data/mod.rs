//! Database repository layer.
//!
//! Repositories perform every database read and write. They use SeaORM entity models
//! internally and hand domain models back to the service layer, so entity types never
//! cross this boundary.

pub mod feedback;

#[cfg(test)]
mod test;
