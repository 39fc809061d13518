//! QuickVids Test Utils
//!
//! Provides shared testing utilities for the interactions server. This crate offers
//! a builder for test contexts backed by in-memory SQLite databases, factories and
//! fixtures for test data, a deterministic request signer and a fake upstream HTTP
//! server standing in for the Discord and top.gg APIs.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **TestSigner**: Ed25519 key pair signing interaction requests like Discord does
//! - **FakeDiscord**: Local axum server answering outbound REST calls
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_stats() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_stats_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod signing;
pub mod upstream;
