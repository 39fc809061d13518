//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::discord_guild::create_guild(&db).await?;
//!     let event = factory::embed_event::EmbedEventFactory::new(&db)
//!         .user_id("42")
//!         .hours_ago(30)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `discord_guild` - Create Discord guild entities
//! - `embed_event` - Create embed event entities
//! - `helpers` - Unique id generation shared by the factories

pub mod discord_guild;
pub mod embed_event;
pub mod helpers;

pub use discord_guild::create_guild;
pub use embed_event::create_embed_event;
