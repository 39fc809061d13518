//! Shared helpers with no dependency on application state.

pub mod compare;
pub mod format;
pub mod http;
