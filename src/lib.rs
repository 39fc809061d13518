//! QuickVids interactions server
//!
//! Receives signed interaction webhooks from Discord, verifies them, dispatches
//! slash commands and calls back into the Discord REST API.

pub mod server;
