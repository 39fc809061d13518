//! Service layer.
//!
//! Services hold borrowed handles to shared state and implement the
//! interaction flow: dispatch by type, permission checks, statistics and the
//! outbound Discord and top.gg REST calls.

pub mod discord;
pub mod interaction;
pub mod permission;
pub mod stats;
pub mod topgg;

#[cfg(test)]
mod test;
