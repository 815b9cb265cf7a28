//! Application layer - Use case implementations
//!
//! This module applies the domain operations to batches of lists.

pub mod batch;
