//! State Management
//!
//! Shared read-only dashboard data.

pub mod global;

pub use global::{provide_global_state, GlobalState};
