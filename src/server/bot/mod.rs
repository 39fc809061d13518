//! Slash command layer.
//!
//! Commands implement [`command::Command`] and are collected into a
//! [`command::CommandRegistry`] once at startup. Each interaction gets a
//! [`context::CommandContext`] that records the command's single response and
//! gives access to shared state and the Discord REST helpers.
//!
//! Only the HTTP interaction model is used: no gateway connection is opened,
//! so the bot never receives events it did not ask for through a command.

pub mod command;
pub mod commands;
pub mod context;
