//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They build
//! the JSON payloads Discord posts to the interactions endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let ping = fixture::interaction::ping();
//! let info = fixture::interaction::chat_input("info", Some("8"));
//! ```

pub mod interaction;
