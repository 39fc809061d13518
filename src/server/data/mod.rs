//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and expose the queries
//! commands need. They return SeaORM entity models and `DbErr` directly;
//! services convert results into domain models and `AppError`.

pub mod stats;

#[cfg(test)]
mod test;
