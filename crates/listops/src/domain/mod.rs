//! Domain layer - Pure list operations
//!
//! This module contains pure functions without I/O dependencies.

pub mod arrange;
pub mod blank;
pub mod parity;
pub mod progression;
