//! Server-side models.
//!
//! Inbound interaction payloads, the subset of Discord REST responses the
//! helpers decode, statistics shown by commands and the JSON error body.
//! Outbound interaction responses use Serenity's builders directly.

pub mod api;
pub mod discord;
pub mod interaction;
pub mod stats;

#[cfg(test)]
mod test;
