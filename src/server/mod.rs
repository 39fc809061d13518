//! Interaction webhook backend.
//!
//! This module contains the complete backend: the HTTP surface Discord posts
//! interactions to, the command layer, outbound Discord REST calls and the
//! statistics data access used by commands. The backend uses Axum as the web
//! framework, SeaORM for database operations and Serenity's model and builder
//! types for Discord payloads.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers
//! - **Middleware** (`middleware/`) - Signature verification and rate limiting
//! - **Service Layer** (`service/`) - Dispatch, permission checks, Discord and top.gg REST calls
//! - **Bot** (`bot/`) - Command trait, registry, per-request command context and commands
//! - **Data Layer** (`data/`) - Database queries for bot statistics
//! - **Model Layer** (`model/`) - Interaction payloads and REST response models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Utilities** (`util/`) - Structural comparison and formatting helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; the rate limiter admits or rejects it
//! 2. **Middleware** verifies the Ed25519 signature over the raw body
//! 3. **Controller** hands the verified body to the interaction service
//! 4. **Service** routes by interaction type and runs the resolved command
//! 5. **Command** replies through its context, possibly calling REST helpers
//! 6. **Controller** returns exactly one interaction response as JSON

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test;
